string_enum! {
    pub enum CatalogPricingType {
        FixedPricing => "FIXED_PRICING",
        VariablePricing => "VARIABLE_PRICING",
    }
}
