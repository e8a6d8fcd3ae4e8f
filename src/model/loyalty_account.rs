use super::loyalty_account_mapping::LoyaltyAccountMapping;

model! {
    /// 积分账户
    pub struct LoyaltyAccount {
        optional id: String => "id",
        required program_id: String => "program_id",
        /// 可用积分
        optional balance: i32 => "balance",
        /// 累计获得的积分，不扣减已兑换部分
        optional lifetime_points: i32 => "lifetime_points",
        nullable customer_id: String => "customer_id",
        nullable enrolled_at: String => "enrolled_at",
        optional created_at: String => "created_at",
        optional updated_at: String => "updated_at",
        optional mapping: LoyaltyAccountMapping => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{model::loyalty_account_mapping::LoyaltyAccountMapping, serializer::JsonSerialize};

    use super::LoyaltyAccount;

    #[test]
    fn create_body() {
        let mut mapping = LoyaltyAccountMapping::new();
        mapping.set_phone_number("+14155551234");

        let mut account = LoyaltyAccount::new("d619f755-2d17-41f3-990d-c04ecedd64dd".to_owned());
        account.set_mapping(mapping);

        assert_eq!(
            account.json_serialize(true).unwrap(),
            json!({
                "program_id": "d619f755-2d17-41f3-990d-c04ecedd64dd",
                "mapping": {"phone_number": "+14155551234"}
            })
        );
    }
}
