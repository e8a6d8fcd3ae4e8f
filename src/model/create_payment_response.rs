use super::{api_error::ApiError, payment::Payment};

model! {
    pub struct CreatePaymentResponse {
        /// 请求失败时的错误列表
        optional errors: Vec<ApiError> => "errors",
        optional payment: Payment => "payment",
    }
}
