use super::money::Money;

model! {
    /// 对已完成的支付发起退款
    pub struct RefundPaymentRequest {
        required idempotency_key: String => "idempotency_key",
        /// 退款金额，不能超过支付金额减去已退金额
        required amount_money: Money => "amount_money",
        nullable app_fee_money: Money => "app_fee_money",
        nullable payment_id: String => "payment_id",
        nullable destination_id: String => "destination_id",
        nullable unlinked: bool => "unlinked",
        nullable location_id: String => "location_id",
        nullable customer_id: String => "customer_id",
        nullable reason: String => "reason",
        /// 与支付当前的 `version_token` 不一致时请求失败
        nullable payment_version_token: String => "payment_version_token",
        nullable team_member_id: String => "team_member_id",
    }
}
