use crate::enums::Currency;

model! {
    /// 金额。
    /// 以最小货币单位表示，例如 `USD` 的 100 表示 1 美元。
    pub struct Money {
        /// 最小货币单位的数量，退款等场景可以为负
        nullable amount: i64 => "amount",
        nullable currency: Currency => "currency",
    }
}

impl Money {
    pub fn of(amount: i64, currency: Currency) -> Self {
        let mut money = Money::new();
        money.set_amount(amount);
        money.set_currency(currency);
        money
    }
}
