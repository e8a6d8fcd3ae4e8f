string_enum! {
    /// 结算去向类型
    pub enum DestinationType {
        BankAccount => "BANK_ACCOUNT",
        Card => "CARD",
        SquareBalance => "SQUARE_BALANCE",
        SquareStoredBalance => "SQUARE_STORED_BALANCE",
    }
}
