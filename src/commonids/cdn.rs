//! Content Delivery Network identifiers.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// An origin group of a CDN endpoint.
    pub struct CdnOriginGroupId {
        type_name: "CdnOriginGroup",
        display_name: "Origin Group",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftCDN", "Microsoft.CDN"),
            Segment::static_segment("staticProfiles", "profiles"),
            Segment::user_specified("profileName", "profileValue"),
            Segment::static_segment("staticEndpoints", "endpoints"),
            Segment::user_specified("endpointName", "endpointValue"),
            Segment::static_segment("staticOriginGroups", "originGroups"),
            Segment::user_specified("originGroupName", "originGroupValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            profile_name => "profileName",
            endpoint_name => "endpointName",
            origin_group_name => "originGroupName",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseError, ResourceId};

    const ID: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.CDN/profiles/profileValue/endpoints/endpointValue/originGroups/originGroupValue";

    #[test]
    fn test_parse_origin_group() {
        let id = CdnOriginGroupId::parse(ID).unwrap();
        assert_eq!(id.subscription_id(), "12345678-1234-9876-4563-123456789012");
        assert_eq!(id.resource_group_name(), "example-resource-group");
        assert_eq!(id.profile_name(), "profileValue");
        assert_eq!(id.endpoint_name(), "endpointValue");
        assert_eq!(id.origin_group_name(), "originGroupValue");
        assert_eq!(id.id(), ID);
    }

    #[test]
    fn test_example_id_matches_canonical_example() {
        assert_eq!(CdnOriginGroupId::TEMPLATE.example_id(), ID);
    }

    #[test]
    fn test_lowercase_provider_from_api() {
        let id = CdnOriginGroupId::parse_insensitively(&ID.replace("Microsoft.CDN", "Microsoft.Cdn"))
            .unwrap();
        assert_eq!(id.id(), ID);

        let error = CdnOriginGroupId::parse(&ID.replace("Microsoft.CDN", "Microsoft.Cdn")).unwrap_err();
        assert_eq!(error.segment_name(), Some("staticMicrosoftCDN"));
    }

    #[test]
    fn test_endpoint_without_origin_group() {
        let endpoint = ID.rsplitn(3, '/').nth(2).unwrap();
        assert_eq!(
            CdnOriginGroupId::parse(endpoint),
            Err(ParseError::SegmentNotSpecified {
                id_type: "Origin Group",
                segment_name: "staticOriginGroups",
            })
        );
    }
}
