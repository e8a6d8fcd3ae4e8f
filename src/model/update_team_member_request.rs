use super::team_member::TeamMember;

model! {
    pub struct UpdateTeamMemberRequest {
        /// 只需包含要修改的字段
        optional team_member: TeamMember => "team_member",
    }
}
