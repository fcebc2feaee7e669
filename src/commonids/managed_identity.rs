//! Managed identity identifiers.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// A user-assigned managed identity.
    pub struct UserAssignedIdentityId {
        type_name: "UserAssignedIdentity",
        display_name: "User Assigned Identity",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftManagedIdentity", "Microsoft.ManagedIdentity"),
            Segment::static_segment("staticUserAssignedIdentities", "userAssignedIdentities"),
            Segment::user_specified("userAssignedIdentityName", "userAssignedIdentityValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            user_assigned_identity_name => "userAssignedIdentityName",
        },
    }
}
