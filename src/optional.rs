use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 可区分"未设置"、"显式置空"与"已赋值"三种状态的字段容器。
///
/// 局部更新类请求需要区分调用方没有碰过某个字段（不发送）和调用方
/// 明确要把字段清空（发送 `null`）。
#[derive(Debug, Clone, PartialEq)]
pub enum OptionalField<T> {
    /// 调用方从未设置
    Unset,
    /// 调用方显式设置为 null
    Null,
    /// 调用方设置了具体的值
    Value(T),
}

impl<T> Default for OptionalField<T> {
    fn default() -> Self {
        OptionalField::Unset
    }
}

impl<T> OptionalField<T> {
    pub fn new() -> Self {
        OptionalField::Unset
    }

    /// 未设置或显式置空时返回 `None`
    pub fn get(&self) -> Option<&T> {
        match self {
            OptionalField::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            OptionalField::Value(v) => Some(v),
            _ => None,
        }
    }

    /// 标记为已设置。`None` 表示显式置空。
    pub fn set(&mut self, value: Option<T>) {
        *self = value.into();
    }

    pub fn unset(&mut self) {
        *self = OptionalField::Unset;
    }

    pub fn is_present(&self) -> bool {
        !self.is_unset()
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, OptionalField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionalField::Null)
    }

    pub fn as_ref(&self) -> OptionalField<&T> {
        match self {
            OptionalField::Unset => OptionalField::Unset,
            OptionalField::Null => OptionalField::Null,
            OptionalField::Value(v) => OptionalField::Value(v),
        }
    }

    /// 丢弃"是否设置过"的信息，只保留值
    pub fn into_option(self) -> Option<T> {
        match self {
            OptionalField::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for OptionalField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => OptionalField::Value(v),
            None => OptionalField::Null,
        }
    }
}

// 只输出解包后的值。模型字段的缺省由序列化器控制，这里的 Unset 兜底为 null。
impl<T: Serialize> Serialize for OptionalField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionalField::Value(v) => v.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

// 字段缺失由 `#[serde(default)]` 处理，能走到这里的一定是 null 或具体值。
impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalField<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::OptionalField;

    #[derive(Deserialize, Debug)]
    struct Holder {
        #[serde(default)]
        note: OptionalField<String>,
    }

    #[test]
    fn starts_unset() {
        let field = OptionalField::<String>::new();
        assert!(!field.is_present());
        assert_eq!(field.get(), None);
    }

    #[test]
    fn set_value_then_null_then_unset() {
        let mut field = OptionalField::new();

        field.set(Some(5));
        assert!(field.is_present());
        assert_eq!(field.get(), Some(&5));

        field.set(None);
        assert!(field.is_present());
        assert!(field.is_null());
        assert_eq!(field.get(), None);

        field.unset();
        assert!(!field.is_present());
        assert_eq!(field, OptionalField::Unset);
    }

    #[test]
    fn set_after_unset_is_present_again() {
        let mut field = OptionalField::new();
        field.set(Some("a"));
        field.unset();
        field.set(Some("b"));
        assert_eq!(field.get(), Some(&"b"));
        assert_eq!(field.into_option(), Some("b"));
    }

    #[test]
    fn deserialize_distinguishes_absent_from_null() {
        let absent: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(absent.note.is_unset());

        let null: Holder = serde_json::from_value(json!({ "note": null })).unwrap();
        assert!(null.note.is_null());

        let value: Holder = serde_json::from_value(json!({ "note": "hi" })).unwrap();
        assert_eq!(value.note.get().map(String::as_str), Some("hi"));
    }

    #[test]
    fn serialize_never_emits_wrapper() {
        assert_eq!(
            serde_json::to_value(OptionalField::Value(3)).unwrap(),
            json!(3)
        );
        assert_eq!(
            serde_json::to_value(OptionalField::<i32>::Null).unwrap(),
            json!(null)
        );
    }
}
