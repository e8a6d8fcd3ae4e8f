use crate::enums::RefundStatus;

use super::money::Money;

model! {
    /// 退款记录
    pub struct PaymentRefund {
        required id: String => "id",
        nullable status: RefundStatus => "status",
        nullable location_id: String => "location_id",
        /// 未关联原支付的退款
        optional unlinked: bool => "unlinked",
        nullable destination_type: String => "destination_type",
        required amount_money: Money => "amount_money",
        optional app_fee_money: Money => "app_fee_money",
        nullable reason: String => "reason",
        optional payment_id: String => "payment_id",
        optional order_id: String => "order_id",
        optional created_at: String => "created_at",
        optional updated_at: String => "updated_at",
        optional team_member_id: String => "team_member_id",
    }
}
