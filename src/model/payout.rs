use crate::enums::{PayoutStatus, PayoutType};

use super::{destination::Destination, money::Money};

model! {
    /// 向商户的一次结算
    pub struct Payout {
        required id: String => "id",
        optional status: PayoutStatus => "status",
        required location_id: String => "location_id",
        optional created_at: String => "created_at",
        optional updated_at: String => "updated_at",
        optional amount_money: Money => "amount_money",
        optional destination: Destination => "destination",
        /// 每次状态变化递增
        optional version: i32 => "version",
        optional kind: PayoutType => "type",
        /// 预计到账日期，YYYY-MM-DD
        nullable arrival_date: String => "arrival_date",
        /// 银行转账时的端到端追踪号
        nullable end_to_end_id: String => "end_to_end_id",
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        decode::from_json_str,
        enums::{Currency, DestinationType, PayoutStatus, PayoutType},
    };

    use super::Payout;

    #[test]
    fn decode() {
        let payout: Payout = from_json_str(
            r#"{
                "id": "po_b345d2c7-90b3-4f0b-a2aa-df1def7f8afc",
                "status": "PAID",
                "location_id": "L88917AVBK2S5",
                "amount_money": {"amount": 6259, "currency_code": "USD", "currency": "USD"},
                "destination": {"type": "BANK_ACCOUNT", "id": "ccof:ZPp3oedR3AeEUNd3z7"},
                "version": 1,
                "type": "BATCH",
                "arrival_date": "2022-03-29",
                "end_to_end_id": null
            }"#,
        )
        .unwrap();

        assert_eq!(payout.get_status(), Some(&PayoutStatus::Paid));
        assert_eq!(payout.get_kind(), Some(&PayoutType::Batch));
        assert_eq!(
            payout.get_destination().and_then(|d| d.get_kind()),
            Some(&DestinationType::BankAccount)
        );
        assert_eq!(
            payout.get_amount_money().and_then(|m| m.get_currency()),
            Some(&Currency::Usd)
        );
        assert_eq!(payout.get_arrival_date().map(String::as_str), Some("2022-03-29"));
        assert!(payout.get_end_to_end_id_field().is_null());
    }
}
