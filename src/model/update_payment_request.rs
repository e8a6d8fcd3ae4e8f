use super::payment::Payment;

model! {
    /// 更新尚未完成的支付，例如修改小费金额
    pub struct UpdatePaymentRequest {
        optional payment: Payment => "payment",
        required idempotency_key: String => "idempotency_key",
    }
}
