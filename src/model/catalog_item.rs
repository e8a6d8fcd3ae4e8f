use super::catalog_object::CatalogObject;

model! {
    /// 商品
    pub struct CatalogItem {
        nullable name: String => "name",
        nullable description: String => "description",
        /// 在 POS 上显示的缩写，最多 24 个字符
        nullable abbreviation: String => "abbreviation",
        /// 十六进制颜色，例如 `#ff0000`
        nullable label_color: String => "label_color",
        nullable is_taxable: bool => "is_taxable",
        nullable category_id: String => "category_id",
        nullable tax_ids: Vec<String> => "tax_ids",
        /// 类型为 ITEM_VARIATION 的目录对象
        nullable variations: Vec<CatalogObject> => "variations",
        nullable skip_modifier_screen: bool => "skip_modifier_screen",
        nullable description_html: String => "description_html",
    }
}
