use serde_json::Value;

use crate::enums::CustomAttributeVisibility;

model! {
    /// 自定义属性。
    /// `value` 的类型由属性定义的 schema 决定，可以是任意 JSON 值。
    pub struct CustomAttribute {
        /// 属性定义的 key，同一资源内唯一
        nullable key: String => "key",
        nullable value: Value => "value",
        /// 乐观锁版本号，更新时携带
        optional version: i32 => "version",
        optional visibility: CustomAttributeVisibility => "visibility",
        optional updated_at: String => "updated_at",
        optional created_at: String => "created_at",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::{config::SerializerConfig, decode::from_json_value, serializer::JsonSerialize};

    use super::CustomAttribute;

    #[test]
    fn json_value() {
        let mut attribute = CustomAttribute::new();
        attribute.set_key("favorite-drink");
        attribute.set_value(json!({"size": "large", "sugar": 0}));
        attribute.set_version(2);

        assert_eq!(
            attribute.json_serialize(true).unwrap(),
            json!({
                "key": "favorite-drink",
                "value": {"size": "large", "sugar": 0},
                "version": 2
            })
        );
    }

    #[test]
    fn json_null_value() {
        let mut attribute = CustomAttribute::new();
        attribute.set_key("k");
        attribute.set_value(Value::Null);

        // null 作为真实取值时同样被过滤，不算显式置空
        assert_eq!(attribute.json_serialize(true).unwrap(), json!({"key": "k"}));

        let config = SerializerConfig::builder().keep_explicit_nulls().build();
        assert_eq!(
            attribute.json_serialize_with(&config).unwrap(),
            json!({"key": "k"})
        );

        attribute.set_value_null();
        assert_eq!(
            attribute.json_serialize_with(&config).unwrap(),
            json!({"key": "k", "value": null})
        );
    }

    #[test]
    fn decode_null_value() {
        let attribute: CustomAttribute =
            from_json_value(json!({"key": "k", "value": null, "version": 1})).unwrap();

        assert!(attribute.get_value_field().is_null());
        assert_eq!(attribute.get_version(), Some(&1));
        assert_eq!(attribute.get_visibility(), None);
    }
}
