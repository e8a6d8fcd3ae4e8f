//! 支付/商务开放接口的模型层。
//!
//! 每个模型只是数据载体：私有字段、存取方法、可撤销的可空字段，以及
//! 把模型转换为线上 JSON 的 [`JsonSerialize`]。可空字段使用
//! [`OptionalField`] 区分"未设置"、"显式置空"和"有值"三种状态。
//!
//! ```
//! use rust_commerce_sdk::{enums::Currency, model::{CreatePaymentRequest, Money}, JsonSerialize};
//!
//! let mut request = CreatePaymentRequest::new("cnon:card-nonce-ok".to_owned(), "key-1".to_owned());
//! request.set_amount_money(Money::of(100, Currency::Usd));
//! request.set_note("coffee");
//!
//! let body = request.to_json_string().unwrap();
//! assert!(body.contains(r#""note":"coffee""#));
//! ```

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod config;
pub mod decode;
pub mod enums;
pub mod error;
pub mod model;
pub mod optional;
pub mod serializer;
pub mod util;

pub use config::{NullPolicy, SerializerConfig, SerializerConfigBuilder};
pub use error::{Error, SdkResult};
pub use optional::OptionalField;
pub use serializer::{JsonSerialize, ToWire, WireWriter};

use serde_json::{Map, Value};

pub type ParamsMap = Map<String, Value>;
