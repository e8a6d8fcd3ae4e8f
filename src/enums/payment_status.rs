string_enum! {
    /// 支付状态
    pub enum PaymentStatus {
        Approved => "APPROVED",
        Pending => "PENDING",
        Completed => "COMPLETED",
        Canceled => "CANCELED",
        Failed => "FAILED",
    }
}
