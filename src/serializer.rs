use std::collections::BTreeMap;

use serde_json::Value;
use urlencoding::encode;

use crate::{
    config::SerializerConfig,
    error::{Error, SdkResult},
    optional::OptionalField,
    util::value_to_string,
    ParamsMap,
};

/// 可以写进线上 JSON 的值
pub trait ToWire {
    fn to_wire(&self, config: &SerializerConfig) -> SdkResult<Value>;
}

macro_rules! to_wire_via_serde {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToWire for $t {
                fn to_wire(&self, _config: &SerializerConfig) -> SdkResult<Value> {
                    Ok(serde_json::to_value(self)?)
                }
            }
        )*
    };
}

to_wire_via_serde!(String, bool, i32, i64, u32, u64, f64, Value);

impl<T: ToWire> ToWire for Option<T> {
    fn to_wire(&self, config: &SerializerConfig) -> SdkResult<Value> {
        match self {
            Some(v) => v.to_wire(config),
            None => Ok(Value::Null),
        }
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self, config: &SerializerConfig) -> SdkResult<Value> {
        let items = self
            .iter()
            .map(|item| item.to_wire(config))
            .collect::<SdkResult<Vec<Value>>>()?;
        Ok(Value::Array(items))
    }
}

impl<T: ToWire> ToWire for BTreeMap<String, T> {
    fn to_wire(&self, config: &SerializerConfig) -> SdkResult<Value> {
        let mut map = ParamsMap::with_capacity(self.len());
        for (k, v) in self.iter() {
            map.insert(k.clone(), v.to_wire(config)?);
        }
        Ok(Value::Object(map))
    }
}

/// 按声明顺序收集模型字段。
///
/// 先全部写入，结束时统一删除 null 条目。
pub struct WireWriter<'a> {
    config: &'a SerializerConfig,
    entries: ParamsMap,
    explicit_nulls: Vec<&'static str>,
}

impl<'a> WireWriter<'a> {
    pub(crate) fn new(config: &'a SerializerConfig) -> Self {
        Self {
            config,
            entries: ParamsMap::new(),
            explicit_nulls: vec![],
        }
    }

    /// 必填字段，始终写入
    pub fn required<T: ToWire>(&mut self, wire_name: &'static str, value: &T) -> SdkResult<()> {
        let value = value.to_wire(self.config)?;
        self.entries.insert(wire_name.to_owned(), value);
        Ok(())
    }

    /// 可空字段，设置过才写入
    pub fn nullable<T: ToWire>(
        &mut self,
        wire_name: &'static str,
        field: &OptionalField<T>,
    ) -> SdkResult<()> {
        let value = match field {
            OptionalField::Unset => return Ok(()),
            OptionalField::Null => {
                self.explicit_nulls.push(wire_name);
                Value::Null
            }
            // 取值转换出的 null（如 NaN、Value::Null）不算显式置空
            OptionalField::Value(v) => v.to_wire(self.config)?,
        };

        self.entries.insert(wire_name.to_owned(), value);

        Ok(())
    }

    /// 普通可选字段，有值才写入
    pub fn optional<T: ToWire>(&mut self, wire_name: &'static str, value: &Option<T>) -> SdkResult<()> {
        match value {
            Some(v) => self.required(wire_name, v),
            None => Ok(()),
        }
    }

    pub(crate) fn finish(self) -> ParamsMap {
        let keep_explicit = self.config.keeps_explicit_nulls();
        let explicit_nulls = self.explicit_nulls;

        self.entries
            .into_iter()
            .filter(|(name, value)| {
                if !value.is_null() {
                    return true;
                }

                let keep = keep_explicit && explicit_nulls.iter().any(|n| *n == name.as_str());
                if !keep {
                    trace!("drop null field: {}", name);
                }
                keep
            })
            .collect()
    }
}

/// 模型的序列化约定
pub trait JsonSerialize {
    /// 按声明顺序把字段写入 `writer`
    fn write_fields(&self, writer: &mut WireWriter<'_>) -> SdkResult<()>;

    /// 拼装并过滤后的字段表
    fn wire_map(&self, config: &SerializerConfig) -> SdkResult<ParamsMap> {
        let mut writer = WireWriter::new(config);
        self.write_fields(&mut writer)?;
        Ok(writer.finish())
    }

    /// 转换为 JSON。
    ///
    /// 没有任何字段输出时，`emit_empty_as_object` 为 `true` 返回 `{}`，否则返回 `[]`。
    fn json_serialize(&self, emit_empty_as_object: bool) -> SdkResult<Value> {
        let config = SerializerConfig::builder()
            .with_empty_as_object(emit_empty_as_object)
            .build();
        self.json_serialize_with(&config)
    }

    fn json_serialize_with(&self, config: &SerializerConfig) -> SdkResult<Value> {
        let map = self.wire_map(config)?;

        if map.is_empty() && !config.emit_empty_as_object {
            return Ok(Value::Array(vec![]));
        }

        debug!("serialized fields: {:?}", map.keys().collect::<Vec<&String>>());
        Ok(Value::Object(map))
    }

    fn to_json_string(&self) -> SdkResult<String> {
        let value = self.json_serialize_with(&SerializerConfig::default())?;
        Ok(serde_json::to_string(&value)?)
    }

    /// 生成列表类接口使用的查询字符串
    fn to_query_string(&self) -> SdkResult<String> {
        let map = self.wire_map(&SerializerConfig::default())?;

        let mut pairs = Vec::with_capacity(map.len());
        for (k, v) in map.iter() {
            let v = query_value(k, v)?;
            trace!("query pair: {}={}", k, v);
            pairs.push(format!("{}={}", k, encode(&v)));
        }

        Ok(pairs.join("&"))
    }
}

fn query_value(name: &str, value: &Value) -> SdkResult<String> {
    match value {
        Value::Object(_) => Err(Error::Params(format!(
            "{} 是嵌套对象，不能作为查询参数",
            name
        ))),
        Value::Array(items) => {
            let items = items
                .iter()
                .filter(|item| !item.is_null())
                .map(|item| query_value(name, item))
                .collect::<SdkResult<Vec<String>>>()?;
            Ok(items.join(","))
        }
        other => Ok(value_to_string(other)),
    }
}
