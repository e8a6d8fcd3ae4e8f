use super::{address::Address, money::Money};

model! {
    /// 创建支付
    pub struct CreatePaymentRequest {
        /// 支付来源，例如卡片 nonce 或已保存卡片的 id
        required source_id: String => "source_id",
        /// 幂等键，同一个键的重复请求只会扣款一次
        required idempotency_key: String => "idempotency_key",
        optional amount_money: Money => "amount_money",
        optional tip_money: Money => "tip_money",
        optional app_fee_money: Money => "app_fee_money",
        nullable delay_duration: String => "delay_duration",
        nullable delay_action: String => "delay_action",
        /// 为 `false` 时只授权不扣款
        nullable autocomplete: bool => "autocomplete",
        nullable order_id: String => "order_id",
        nullable customer_id: String => "customer_id",
        nullable location_id: String => "location_id",
        nullable team_member_id: String => "team_member_id",
        nullable reference_id: String => "reference_id",
        nullable verification_token: String => "verification_token",
        nullable accept_partial_authorization: bool => "accept_partial_authorization",
        nullable buyer_email_address: String => "buyer_email_address",
        nullable buyer_phone_number: String => "buyer_phone_number",
        optional billing_address: Address => "billing_address",
        optional shipping_address: Address => "shipping_address",
        nullable note: String => "note",
        nullable statement_description_identifier: String => "statement_description_identifier",
    }
}
