model! {
    /// 积分累积事件的明细。
    /// `points` 与 `order_id` 二选一。
    pub struct LoyaltyEventAccumulatePoints {
        nullable loyalty_program_id: String => "loyalty_program_id",
        nullable points: i32 => "points",
        nullable order_id: String => "order_id",
    }
}
