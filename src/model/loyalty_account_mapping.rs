model! {
    /// 积分账户与买家身份的映射，目前只支持手机号
    pub struct LoyaltyAccountMapping {
        optional id: String => "id",
        optional created_at: String => "created_at",
        /// E.164 格式的手机号
        nullable phone_number: String => "phone_number",
    }
}
