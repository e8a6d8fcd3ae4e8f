string_enum! {
    /// 其他应用对自定义属性的访问级别
    pub enum CustomAttributeVisibility {
        VisibilityHidden => "VISIBILITY_HIDDEN",
        VisibilityReadOnly => "VISIBILITY_READ_ONLY",
        VisibilityReadWriteValues => "VISIBILITY_READ_WRITE_VALUES",
    }
}
