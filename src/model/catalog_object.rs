use std::collections::BTreeMap;

use serde_json::Value;

use crate::enums::CatalogObjectType;

use super::{catalog_item::CatalogItem, catalog_item_variation::CatalogItemVariation};

model! {
    /// 目录对象。
    /// `type` 决定哪一个 `*_data` 字段有效。
    pub struct CatalogObject {
        required kind: CatalogObjectType => "type",
        /// 新建时使用 `#` 开头的临时 id
        required id: String => "id",
        optional updated_at: String => "updated_at",
        optional version: i64 => "version",
        optional is_deleted: bool => "is_deleted",
        nullable custom_attribute_values: BTreeMap<String, Value> => "custom_attribute_values",
        nullable present_at_all_locations: bool => "present_at_all_locations",
        nullable present_at_location_ids: Vec<String> => "present_at_location_ids",
        nullable absent_at_location_ids: Vec<String> => "absent_at_location_ids",
        optional item_data: CatalogItem => "item_data",
        optional item_variation_data: CatalogItemVariation => "item_variation_data",
    }
}
