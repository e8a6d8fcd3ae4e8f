use crate::enums::AssignmentType;

model! {
    /// 团队成员可以访问的门店
    pub struct TeamMemberAssignedLocations {
        optional assignment_type: AssignmentType => "assignment_type",
        /// `assignment_type` 为 EXPLICIT_LOCATIONS 时生效
        nullable location_ids: Vec<String> => "location_ids",
    }
}
