//! 从接口响应还原模型。
//!
//! 与序列化使用同一套线上字段名：缺失的可空字段为 `Unset`，
//! `null` 为 `Null`，缺失的必填字段返回错误。

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, SdkResult};

pub fn from_json_str<T: DeserializeOwned>(json: &str) -> SdkResult<T> {
    debug!("decode {} from {} bytes", type_name::<T>(), json.len());
    serde_json::from_str(json).map_err(|e| decode_error::<T>(e))
}

pub fn from_json_slice<T: DeserializeOwned>(json: &[u8]) -> SdkResult<T> {
    debug!("decode {} from {} bytes", type_name::<T>(), json.len());
    serde_json::from_slice(json).map_err(|e| decode_error::<T>(e))
}

pub fn from_json_value<T: DeserializeOwned>(value: Value) -> SdkResult<T> {
    debug!("decode {} from value", type_name::<T>());
    serde_json::from_value(value).map_err(|e| decode_error::<T>(e))
}

fn decode_error<T>(e: serde_json::Error) -> Error {
    error!("解析 {} 出错：{}", type_name::<T>(), e);
    Error::Json(e)
}
