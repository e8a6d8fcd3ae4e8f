use super::team_member::TeamMember;

model! {
    pub struct CreateTeamMemberRequest {
        optional idempotency_key: String => "idempotency_key",
        optional team_member: TeamMember => "team_member",
    }
}
