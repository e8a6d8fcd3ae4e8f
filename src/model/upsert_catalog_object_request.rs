use super::catalog_object::CatalogObject;

model! {
    /// 新建或更新单个目录对象
    pub struct UpsertCatalogObjectRequest {
        required idempotency_key: String => "idempotency_key",
        required object: CatalogObject => "object",
    }
}
