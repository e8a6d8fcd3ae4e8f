/// 根据字段清单生成模型：结构体、构造函数、存取方法、序列化与反序列化实现。
///
/// 每个字段写成 `种类 字段名: 类型 => "线上字段名"`，种类有三种：
///
/// - `required`：构造函数参数，始终输出
/// - `nullable`：存为 `OptionalField<T>`，设置过才输出，可显式置空，可撤销
/// - `optional`：存为 `Option<T>`，有值才输出，多用于只读的响应字段
///
/// 字段按声明顺序输出。
///
/// ```ignore
/// model! {
///     pub struct Money {
///         nullable amount: i64 => "amount",
///         nullable currency: Currency => "currency",
///     }
/// }
/// ```
macro_rules! model {
    (@munch [$($meta:tt)*] $name:ident
        fields [$($fields:tt)*]
        params [$($params:tt)*]
        inits [$($inits:tt)*]
        entries [$(($kind:ident $field:ident [$ty:ty] $wire:tt))*]
        rest []
    ) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
        pub struct $name {
            $($fields)*
        }

        impl $name {
            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            pub fn new($($params)*) -> Self {
                $name { $($inits)* }
            }

            $(model!(@accessor $kind $field $ty);)*
        }

        impl $crate::serializer::JsonSerialize for $name {
            #[allow(unused_variables)]
            fn write_fields(
                &self,
                writer: &mut $crate::serializer::WireWriter<'_>,
            ) -> $crate::error::SdkResult<()> {
                $(writer.$kind($wire, &self.$field)?;)*
                Ok(())
            }
        }

        // 嵌套模型总是输出对象，空模型为 `{}`
        impl $crate::serializer::ToWire for $name {
            fn to_wire(
                &self,
                config: &$crate::config::SerializerConfig,
            ) -> $crate::error::SdkResult<serde_json::Value> {
                let map = $crate::serializer::JsonSerialize::wire_map(self, config)?;
                Ok(serde_json::Value::Object(map))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let value = $crate::serializer::JsonSerialize::json_serialize_with(
                    self,
                    &$crate::config::SerializerConfig::default(),
                )
                .map_err(serde::ser::Error::custom)?;
                serde::Serialize::serialize(&value, serializer)
            }
        }
    };

    (@munch [$($meta:tt)*] $name:ident
        fields [$($fields:tt)*]
        params [$($params:tt)*]
        inits [$($inits:tt)*]
        entries [$($entries:tt)*]
        rest [
            $(#[$fmeta:meta])*
            required $field:ident : $ty:ty => $wire:literal
            $(, $($rest:tt)*)?
        ]
    ) => {
        model!(@munch [$($meta)*] $name
            fields [$($fields)* $(#[$fmeta])* #[serde(rename = $wire)] $field: $ty,]
            params [$($params)* $field: $ty,]
            inits [$($inits)* $field,]
            entries [$($entries)* (required $field [$ty] $wire)]
            rest [$($($rest)*)?]
        );
    };

    (@munch [$($meta:tt)*] $name:ident
        fields [$($fields:tt)*]
        params [$($params:tt)*]
        inits [$($inits:tt)*]
        entries [$($entries:tt)*]
        rest [
            $(#[$fmeta:meta])*
            nullable $field:ident : $ty:ty => $wire:literal
            $(, $($rest:tt)*)?
        ]
    ) => {
        model!(@munch [$($meta)*] $name
            fields [
                $($fields)*
                $(#[$fmeta])*
                #[serde(rename = $wire, default)]
                $field: $crate::optional::OptionalField<$ty>,
            ]
            params [$($params)*]
            inits [$($inits)* $field: $crate::optional::OptionalField::Unset,]
            entries [$($entries)* (nullable $field [$ty] $wire)]
            rest [$($($rest)*)?]
        );
    };

    (@munch [$($meta:tt)*] $name:ident
        fields [$($fields:tt)*]
        params [$($params:tt)*]
        inits [$($inits:tt)*]
        entries [$($entries:tt)*]
        rest [
            $(#[$fmeta:meta])*
            optional $field:ident : $ty:ty => $wire:literal
            $(, $($rest:tt)*)?
        ]
    ) => {
        model!(@munch [$($meta)*] $name
            fields [
                $($fields)*
                $(#[$fmeta])*
                #[serde(rename = $wire, default)]
                $field: Option<$ty>,
            ]
            params [$($params)*]
            inits [$($inits)* $field: None,]
            entries [$($entries)* (optional $field [$ty] $wire)]
            rest [$($($rest)*)?]
        );
    };

    (@accessor required $field:ident $ty:ty) => {
        paste::paste! {
            pub fn [<get_ $field>](&self) -> &$ty {
                &self.$field
            }

            pub fn [<set_ $field>]<V: Into<$ty>>(&mut self, $field: V) {
                self.$field = $field.into();
            }
        }
    };

    (@accessor nullable $field:ident $ty:ty) => {
        paste::paste! {
            pub fn [<get_ $field>](&self) -> Option<&$ty> {
                self.$field.get()
            }

            pub fn [<set_ $field>]<V: Into<$ty>>(&mut self, $field: V) {
                self.$field.set(Some($field.into()));
            }

            pub fn [<set_ $field _null>](&mut self) {
                self.$field.set(None);
            }

            pub fn [<unset_ $field>](&mut self) {
                self.$field.unset();
            }

            pub fn [<get_ $field _field>](&self) -> &$crate::optional::OptionalField<$ty> {
                &self.$field
            }
        }
    };

    (@accessor optional $field:ident $ty:ty) => {
        paste::paste! {
            pub fn [<get_ $field>](&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>]<V: Into<$ty>>(&mut self, $field: V) {
                self.$field = Some($field.into());
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        model!(@munch [$(#[$meta])*] $name
            fields []
            params []
            inits []
            entries []
            rest [$($body)*]
        );
    };
}

/// 生成字符串常量组。
///
/// 每个变体对应一个线上取值，另有 `Unknown(String)` 原样承载未收录的取值，
/// 模型层不拒绝任何取值。
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// 当前版本未收录的取值
            Unknown(String),
        }

        impl $name {
            /// 全部已知取值
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)*
                    $name::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => $name::$variant,)*
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match $name::from(value.as_str()) {
                    $name::Unknown(_) => $name::Unknown(value),
                    known => known,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(value))
            }
        }

        impl $crate::serializer::ToWire for $name {
            fn to_wire(
                &self,
                _config: &$crate::config::SerializerConfig,
            ) -> $crate::error::SdkResult<serde_json::Value> {
                Ok(serde_json::Value::String(self.as_str().to_owned()))
            }
        }
    };
}
