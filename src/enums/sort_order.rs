string_enum! {
    pub enum SortOrder {
        Desc => "DESC",
        Asc => "ASC",
    }
}
