string_enum! {
    /// 接口错误的大类
    pub enum ErrorCategory {
        ApiError => "API_ERROR",
        AuthenticationError => "AUTHENTICATION_ERROR",
        InvalidRequestError => "INVALID_REQUEST_ERROR",
        RateLimitError => "RATE_LIMIT_ERROR",
        PaymentMethodError => "PAYMENT_METHOD_ERROR",
        RefundError => "REFUND_ERROR",
        MerchantSubscriptionError => "MERCHANT_SUBSCRIPTION_ERROR",
        ExternalVendorError => "EXTERNAL_VENDOR_ERROR",
    }
}
