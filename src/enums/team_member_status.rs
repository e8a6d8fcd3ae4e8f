string_enum! {
    pub enum TeamMemberStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}
