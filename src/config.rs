/// 拼装完成后如何处理值为 null 的条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// 删除所有 null 条目，包括显式置空的可空字段
    DropAll,
    /// 保留显式置空的可空字段，其余 null 仍然删除。
    /// 用于需要清空远端字段的局部更新请求。
    KeepExplicit,
}

impl Default for NullPolicy {
    fn default() -> Self {
        NullPolicy::DropAll
    }
}

/// 序列化配置
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// 没有任何字段输出时，`true` 输出 `{}`，`false` 输出 `[]`
    pub emit_empty_as_object: bool,
    pub null_policy: NullPolicy,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        SerializerConfig {
            emit_empty_as_object: true,
            null_policy: NullPolicy::default(),
        }
    }
}

impl SerializerConfig {
    pub fn builder() -> SerializerConfigBuilder {
        SerializerConfigBuilder::default()
    }

    pub(crate) fn keeps_explicit_nulls(&self) -> bool {
        self.null_policy == NullPolicy::KeepExplicit
    }
}

#[derive(Default)]
pub struct SerializerConfigBuilder {
    emit_empty_as_object: Option<bool>,
    null_policy: NullPolicy,
}

impl SerializerConfigBuilder {
    pub fn new() -> Self {
        SerializerConfigBuilder::default()
    }

    pub fn with_empty_as_object(mut self, emit_empty_as_object: bool) -> Self {
        self.emit_empty_as_object = Some(emit_empty_as_object);
        self
    }

    pub fn with_null_policy(mut self, null_policy: NullPolicy) -> Self {
        self.null_policy = null_policy;
        self
    }

    /// 保留显式置空的字段
    pub fn keep_explicit_nulls(self) -> Self {
        self.with_null_policy(NullPolicy::KeepExplicit)
    }

    pub fn build(self) -> SerializerConfig {
        SerializerConfig {
            emit_empty_as_object: self.emit_empty_as_object.unwrap_or(true),
            null_policy: self.null_policy,
        }
    }
}
