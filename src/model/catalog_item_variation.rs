use crate::enums::CatalogPricingType;

use super::money::Money;

model! {
    /// 商品规格，例如同一款饮品的不同杯型
    pub struct CatalogItemVariation {
        /// 所属商品的 id
        nullable item_id: String => "item_id",
        nullable name: String => "name",
        nullable sku: String => "sku",
        nullable upc: String => "upc",
        /// 在商品中的排序
        optional ordinal: i32 => "ordinal",
        optional pricing_type: CatalogPricingType => "pricing_type",
        /// `pricing_type` 为 FIXED_PRICING 时必填
        optional price_money: Money => "price_money",
        nullable track_inventory: bool => "track_inventory",
        nullable sellable: bool => "sellable",
        nullable stockable: bool => "stockable",
    }
}
