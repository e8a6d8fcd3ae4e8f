use crate::enums::PaymentStatus;

use super::{address::Address, money::Money};

model! {
    /// 支付记录。
    /// 由接口返回，字段均为只读。
    pub struct Payment {
        optional id: String => "id",
        /// RFC 3339 格式的创建时间
        optional created_at: String => "created_at",
        optional updated_at: String => "updated_at",
        optional amount_money: Money => "amount_money",
        optional tip_money: Money => "tip_money",
        /// `amount_money` 与 `tip_money` 之和
        optional total_money: Money => "total_money",
        optional app_fee_money: Money => "app_fee_money",
        optional refunded_money: Money => "refunded_money",
        optional status: PaymentStatus => "status",
        /// ISO 8601 时长，例如 `P7D`
        optional delay_duration: String => "delay_duration",
        nullable delay_action: String => "delay_action",
        optional delayed_until: String => "delayed_until",
        /// CARD、BANK_ACCOUNT、WALLET、CASH、EXTERNAL 等
        optional source_type: String => "source_type",
        optional location_id: String => "location_id",
        optional order_id: String => "order_id",
        optional reference_id: String => "reference_id",
        optional customer_id: String => "customer_id",
        optional team_member_id: String => "team_member_id",
        optional refund_ids: Vec<String> => "refund_ids",
        optional buyer_email_address: String => "buyer_email_address",
        optional billing_address: Address => "billing_address",
        optional shipping_address: Address => "shipping_address",
        optional note: String => "note",
        optional statement_description_identifier: String => "statement_description_identifier",
        optional receipt_number: String => "receipt_number",
        optional receipt_url: String => "receipt_url",
        /// 乐观并发控制使用的版本令牌
        optional version_token: String => "version_token",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{decode::from_json_str, enums::{Currency, PaymentStatus}};

    use super::Payment;

    #[test]
    fn decode_response() {
        let payment: Payment = from_json_str(
            r#"{
                "id": "GQTFp1ZlXdpoW4o6eGiZhbjosiDFf",
                "created_at": "2021-10-13T19:34:33.524Z",
                "amount_money": {"amount": 1000, "currency": "USD"},
                "status": "COMPLETED",
                "delay_action": null,
                "source_type": "CARD",
                "refund_ids": [],
                "version_token": "TPtNEOBOa6Qq6E3C3IjckSVOM6b3hMbfhjvTxHBQUsB6o",
                "risk_evaluation": {"risk_level": "NORMAL"}
            }"#,
        )
        .unwrap();

        assert_eq!(payment.get_id().map(String::as_str), Some("GQTFp1ZlXdpoW4o6eGiZhbjosiDFf"));
        assert_eq!(payment.get_status(), Some(&PaymentStatus::Completed));
        assert_eq!(
            payment.get_amount_money().and_then(|m| m.get_currency()),
            Some(&Currency::Usd)
        );
        assert!(payment.get_delay_action_field().is_null());
        assert_eq!(payment.get_refund_ids(), Some(&vec![]));
        assert_eq!(payment.get_tip_money(), None);
        assert_eq!(json!(payment)["amount_money"], json!({"amount": 1000, "currency": "USD"}));
    }
}
