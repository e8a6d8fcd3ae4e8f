use crate::enums::ActivityType;

use super::money::Money;

model! {
    /// 结算中的一条资金明细
    pub struct PayoutEntry {
        required id: String => "id",
        required payout_id: String => "payout_id",
        nullable effective_at: String => "effective_at",
        optional kind: ActivityType => "type",
        /// 扣除手续费前的金额
        optional gross_amount_money: Money => "gross_amount_money",
        optional fee_amount_money: Money => "fee_amount_money",
        optional net_amount_money: Money => "net_amount_money",
    }
}
