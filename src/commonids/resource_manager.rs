//! Identifiers for the Resource Manager hierarchy itself: subscriptions,
//! resource groups, provider registrations and arbitrary scopes.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// A subscription, e.g. `/subscriptions/{subscriptionId}`.
    pub struct SubscriptionId {
        type_name: "Subscription",
        display_name: "Subscription",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
        ],
        fields: {
            subscription_id => "subscriptionId",
        },
    }
}

define_resource_id! {
    /// A resource group within a subscription.
    pub struct ResourceGroupId {
        type_name: "ResourceGroup",
        display_name: "Resource Group",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
        },
    }
}

define_resource_id! {
    /// A resource provider registration within a subscription.
    pub struct ResourceProviderId {
        type_name: "ResourceProvider",
        display_name: "Resource Provider",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::resource_provider("providerName"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            provider_name => "providerName",
        },
    }
}

define_resource_id! {
    /// Any identifier at all, captured as an opaque scope.
    ///
    /// Used where an API accepts "the ID of whatever this is attached to".
    pub struct ScopeId {
        type_name: "Scope",
        display_name: "Scope",
        segments: [
            Segment::scope("scope"),
        ],
        fields: {
            scope => "scope",
        },
    }
}

impl ResourceGroupId {
    /// Returns the subscription containing this resource group.
    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id())
    }
}

impl From<SubscriptionId> for ScopeId {
    fn from(id: SubscriptionId) -> Self {
        Self::new(crate::ResourceId::id(&id))
    }
}

impl From<ResourceGroupId> for ScopeId {
    fn from(id: ResourceGroupId) -> Self {
        Self::new(crate::ResourceId::id(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseError, ResourceId};

    #[test]
    fn test_subscription_round_trip() {
        let id = SubscriptionId::new("12345678-1234-9876-4563-123456789012");
        assert_eq!(id.id(), "/subscriptions/12345678-1234-9876-4563-123456789012");
        assert_eq!(SubscriptionId::parse(&id.id()), Ok(id));
    }

    #[test]
    fn test_resource_group_lowercase_from_api() {
        let id = ResourceGroupId::parse_insensitively("/SUBSCRIPTIONS/sub/resourcegroups/My-RG")
            .unwrap();
        assert_eq!(id.subscription_id(), "sub");
        assert_eq!(id.resource_group_name(), "My-RG");
        assert_eq!(id.to_string(), "/subscriptions/sub/resourceGroups/My-RG");
    }

    #[test]
    fn test_resource_group_rejects_subscription_only() {
        assert_eq!(
            ResourceGroupId::parse("/subscriptions/sub"),
            Err(ParseError::SegmentNotSpecified {
                id_type: "Resource Group",
                segment_name: "staticResourceGroups",
            })
        );
    }

    #[test]
    fn test_resource_group_subscription() {
        let id = ResourceGroupId::new("sub", "rg");
        assert_eq!(id.subscription(), SubscriptionId::new("sub"));
    }

    #[test]
    fn test_resource_provider() {
        let id = ResourceProviderId::parse("/subscriptions/sub/providers/Microsoft.Compute").unwrap();
        assert_eq!(id.provider_name(), "Microsoft.Compute");
        assert_eq!(
            id.description(),
            r#"Resource Provider (Subscription Id: "sub" / Provider Name: "Microsoft.Compute")"#
        );
    }

    #[test]
    fn test_scope_accepts_any_identifier() {
        let id = ScopeId::parse("/subscriptions/sub/resourceGroups/rg").unwrap();
        assert_eq!(id.scope(), "/subscriptions/sub/resourceGroups/rg");
        assert_eq!(ScopeId::from(ResourceGroupId::new("sub", "rg")), id);
        assert_eq!(
            ScopeId::from(SubscriptionId::new("sub")).scope(),
            "/subscriptions/sub"
        );
    }
}
