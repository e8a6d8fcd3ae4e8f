use super::custom_attribute::CustomAttribute;

model! {
    /// 为顾客创建或更新自定义属性
    pub struct UpsertCustomerCustomAttributeRequest {
        required custom_attribute: CustomAttribute => "custom_attribute",
        nullable idempotency_key: String => "idempotency_key",
    }
}
