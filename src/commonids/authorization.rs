//! Authorization identifiers, which live under an arbitrary scope.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// A role assignment schedule instance at any scope.
    pub struct ScopedRoleAssignmentScheduleInstanceId {
        type_name: "ScopedRoleAssignmentScheduleInstance",
        display_name: "Scoped Role Assignment Schedule Instance",
        segments: [
            Segment::scope("scope"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftAuthorization", "Microsoft.Authorization"),
            Segment::static_segment(
                "staticRoleAssignmentScheduleInstances",
                "roleAssignmentScheduleInstances",
            ),
            Segment::user_specified(
                "roleAssignmentScheduleInstanceName",
                "roleAssignmentScheduleInstanceValue",
            ),
        ],
        fields: {
            scope => "scope",
            role_assignment_schedule_instance_name => "roleAssignmentScheduleInstanceName",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commonids::ResourceGroupId;
    use crate::{ParseError, ResourceId};

    #[test]
    fn test_scope_extraction() {
        let id = ScopedRoleAssignmentScheduleInstanceId::parse(
            "/subscriptions/SUB/resourceGroups/RG/providers/Microsoft.Authorization/roleAssignmentScheduleInstances/NAME",
        )
        .unwrap();
        assert_eq!(id.scope(), "/subscriptions/SUB/resourceGroups/RG");
        assert_eq!(id.role_assignment_schedule_instance_name(), "NAME");

        let scope = ResourceGroupId::parse(id.scope()).unwrap();
        assert_eq!(scope.resource_group_name(), "RG");
    }

    #[test]
    fn test_scope_without_leading_slash_formats_canonically() {
        let id = ScopedRoleAssignmentScheduleInstanceId::new("subscriptions/SUB", "NAME");
        assert_eq!(
            id.id(),
            "/subscriptions/SUB/providers/Microsoft.Authorization/roleAssignmentScheduleInstances/NAME"
        );
    }

    #[test]
    fn test_missing_scope() {
        let error = ScopedRoleAssignmentScheduleInstanceId::parse(
            "/providers/Microsoft.Authorization/roleAssignmentScheduleInstances/NAME",
        )
        .unwrap_err();
        assert_eq!(error, ParseError::ScopeTooShort { segment_name: "scope" });
    }

    #[test]
    fn test_missing_instance_name() {
        let error = ScopedRoleAssignmentScheduleInstanceId::parse(
            "/subscriptions/SUB/resourceGroups/RG/providers/Microsoft.Authorization/roleAssignmentScheduleInstances",
        )
        .unwrap_err();
        assert_eq!(
            error.segment_name(),
            Some("roleAssignmentScheduleInstanceName")
        );
        assert!(matches!(error, ParseError::SegmentNotSpecified { .. }));
    }
}
