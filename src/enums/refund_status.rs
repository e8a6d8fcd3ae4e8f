string_enum! {
    /// 退款状态
    pub enum RefundStatus {
        Pending => "PENDING",
        Completed => "COMPLETED",
        Rejected => "REJECTED",
        Failed => "FAILED",
    }
}
