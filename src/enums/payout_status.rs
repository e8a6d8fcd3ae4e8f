string_enum! {
    pub enum PayoutStatus {
        Sent => "SENT",
        Failed => "FAILED",
        Paid => "PAID",
    }
}
