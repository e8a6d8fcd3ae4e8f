use crate::enums::DestinationType;

model! {
    /// 结算资金的去向
    pub struct Destination {
        optional kind: DestinationType => "type",
        /// 银行账户或卡片的 id
        optional id: String => "id",
    }
}
