string_enum! {
    /// 团队成员的门店分配方式
    pub enum AssignmentType {
        /// 当前及以后新增的所有门店
        AllCurrentAndFutureLocations => "ALL_CURRENT_AND_FUTURE_LOCATIONS",
        /// 只分配 `location_ids` 中列出的门店
        ExplicitLocations => "EXPLICIT_LOCATIONS",
    }
}
