string_enum! {
    pub enum PayoutType {
        Batch => "BATCH",
        Simple => "SIMPLE",
    }
}
