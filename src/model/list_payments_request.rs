use crate::enums::SortOrder;

model! {
    /// 分页查询支付记录，以查询字符串发送
    pub struct ListPaymentsRequest {
        /// RFC 3339 格式，默认为一年前
        nullable begin_time: String => "begin_time",
        nullable end_time: String => "end_time",
        nullable sort_order: SortOrder => "sort_order",
        /// 上一页响应返回的游标
        nullable cursor: String => "cursor",
        nullable location_id: String => "location_id",
        /// 按支付总额精确匹配
        nullable total: i64 => "total",
        nullable last_4: String => "last_4",
        nullable card_brand: String => "card_brand",
        /// 每页条数上限，最大 100
        nullable limit: i32 => "limit",
    }
}

#[cfg(test)]
mod tests {
    use crate::{enums::SortOrder, serializer::JsonSerialize};

    use super::ListPaymentsRequest;

    #[test]
    fn query_string() {
        let mut request = ListPaymentsRequest::new();
        request.set_begin_time("2024-01-01T00:00:00Z");
        request.set_sort_order(SortOrder::Asc);
        request.set_limit(50);
        request.set_cursor_null();

        assert_eq!(
            request.to_query_string().unwrap(),
            "begin_time=2024-01-01T00%3A00%3A00Z&sort_order=ASC&limit=50"
        );
    }

    #[test]
    fn empty_query_string() {
        assert_eq!(ListPaymentsRequest::new().to_query_string().unwrap(), "");
    }
}
