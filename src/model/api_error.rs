use crate::enums::ErrorCategory;

model! {
    /// 接口返回的单条错误
    pub struct ApiError {
        required category: ErrorCategory => "category",
        required code: String => "code",
        /// 可读的错误描述，仅用于排查问题
        optional detail: String => "detail",
        /// 出错的请求字段名
        optional field: String => "field",
    }
}
