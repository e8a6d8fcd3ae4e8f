use serde_json::Value;

/// 字符串原样输出，其余按 JSON 文本输出
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::value_to_string;

    #[test]
    fn strings_are_not_quoted() {
        assert_eq!(value_to_string(&json!("USD")), "USD");
        assert_eq!(value_to_string(&json!(100)), "100");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(1.5)), "1.5");
    }
}
