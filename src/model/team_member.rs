use crate::enums::TeamMemberStatus;

use super::team_member_assigned_locations::TeamMemberAssignedLocations;

model! {
    /// 团队成员
    pub struct TeamMember {
        optional id: String => "id",
        /// 外部系统中的 id
        nullable reference_id: String => "reference_id",
        optional is_owner: bool => "is_owner",
        optional status: TeamMemberStatus => "status",
        nullable given_name: String => "given_name",
        nullable family_name: String => "family_name",
        nullable email_address: String => "email_address",
        nullable phone_number: String => "phone_number",
        optional created_at: String => "created_at",
        optional updated_at: String => "updated_at",
        optional assigned_locations: TeamMemberAssignedLocations => "assigned_locations",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        config::SerializerConfig,
        enums::{AssignmentType, TeamMemberStatus},
        model::team_member_assigned_locations::TeamMemberAssignedLocations,
        serializer::JsonSerialize,
    };

    use super::TeamMember;

    #[test]
    fn partial_update_clears_field() {
        let mut member = TeamMember::new();
        member.set_family_name("Doe");
        member.set_email_address_null();
        member.set_status(TeamMemberStatus::Inactive);

        assert_eq!(
            member.json_serialize(true).unwrap(),
            json!({"status": "INACTIVE", "family_name": "Doe"})
        );

        let config = SerializerConfig::builder().keep_explicit_nulls().build();
        assert_eq!(
            member.json_serialize_with(&config).unwrap(),
            json!({"status": "INACTIVE", "family_name": "Doe", "email_address": null})
        );
    }

    #[test]
    fn assigned_locations() {
        let mut locations = TeamMemberAssignedLocations::new();
        locations.set_assignment_type(AssignmentType::ExplicitLocations);
        locations.set_location_ids(vec!["GA2Y9HSJ8KRYT".to_owned(), "YSGH2WBKG94QZ".to_owned()]);

        let mut member = TeamMember::new();
        member.set_given_name("Joe");
        member.set_assigned_locations(locations);

        assert_eq!(
            member.json_serialize(true).unwrap(),
            json!({
                "given_name": "Joe",
                "assigned_locations": {
                    "assignment_type": "EXPLICIT_LOCATIONS",
                    "location_ids": ["GA2Y9HSJ8KRYT", "YSGH2WBKG94QZ"]
                }
            })
        );
    }
}
