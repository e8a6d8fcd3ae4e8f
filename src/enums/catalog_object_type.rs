string_enum! {
    /// 目录对象类型
    pub enum CatalogObjectType {
        Item => "ITEM",
        Image => "IMAGE",
        Category => "CATEGORY",
        ItemVariation => "ITEM_VARIATION",
        Tax => "TAX",
        Discount => "DISCOUNT",
        ModifierList => "MODIFIER_LIST",
        Modifier => "MODIFIER",
        PricingRule => "PRICING_RULE",
        ProductSet => "PRODUCT_SET",
        TimePeriod => "TIME_PERIOD",
        MeasurementUnit => "MEASUREMENT_UNIT",
        SubscriptionPlan => "SUBSCRIPTION_PLAN",
        ItemOption => "ITEM_OPTION",
        ItemOptionVal => "ITEM_OPTION_VAL",
        CustomAttributeDefinition => "CUSTOM_ATTRIBUTE_DEFINITION",
        QuickAmountsSettings => "QUICK_AMOUNTS_SETTINGS",
    }
}
