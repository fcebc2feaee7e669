//! Macros for defining typed resource identifiers.

/// Defines a typed resource identifier record.
///
/// This generates a struct with one `String` field per captured segment and:
/// - an implementation of [`ResourceId`](crate::ResourceId) carrying the template
/// - `new()` for direct construction and one accessor per field
/// - `Display` (the canonical ID) and `FromStr` (strict parsing)
/// - `Serialize` to the canonical ID and `Deserialize` with insensitive parsing
///
/// Fields must be listed in the order their segments appear in the template.
///
/// # Example
///
/// ```rust
/// use resource_ids::{define_resource_id, ResourceId, Segment};
///
/// define_resource_id! {
///     /// A DNS zone.
///     pub struct DnsZoneId {
///         type_name: "DnsZone",
///         display_name: "Dns Zone",
///         segments: [
///             Segment::static_segment("staticSubscriptions", "subscriptions"),
///             Segment::subscription_id("subscriptionId"),
///             Segment::static_segment("staticResourceGroups", "resourceGroups"),
///             Segment::resource_group_name("resourceGroupName"),
///             Segment::static_segment("staticProviders", "providers"),
///             Segment::static_segment("staticMicrosoftNetwork", "Microsoft.Network"),
///             Segment::static_segment("staticDnsZones", "dnsZones"),
///             Segment::user_specified("dnsZoneName", "dnsZoneValue"),
///         ],
///         fields: {
///             subscription_id => "subscriptionId",
///             resource_group_name => "resourceGroupName",
///             dns_zone_name => "dnsZoneName",
///         },
///     }
/// }
///
/// let id = DnsZoneId::new("1234", "rg", "example.com");
/// assert_eq!(
///     id.to_string(),
///     "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.Network/dnsZones/example.com"
/// );
/// let parsed: DnsZoneId = id.to_string().parse().unwrap();
/// assert_eq!(parsed.dns_zone_name(), "example.com");
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            type_name: $type_name:literal,
            display_name: $display_name:literal,
            segments: [$($segment:expr),* $(,)?],
            fields: { $($field:ident => $segment_name:literal),* $(,)? } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name {
            $($field: String,)*
        }

        impl $name {
            /// Creates the identifier from known field values.
            #[must_use]
            pub fn new($($field: impl Into<String>),*) -> Self {
                Self {
                    $($field: $field.into(),)*
                }
            }

            $(
                #[doc = concat!("Returns the `", $segment_name, "` segment.")]
                #[must_use]
                pub fn $field(&self) -> &str {
                    &self.$field
                }
            )*
        }

        impl $crate::ResourceId for $name {
            const TEMPLATE: $crate::IdentifierTemplate =
                $crate::IdentifierTemplate::new($type_name, $display_name, &[$($segment),*]);

            fn from_parse_result(
                result: &$crate::ParseResult,
            ) -> Result<Self, $crate::ParseError> {
                Ok(Self {
                    $($field: result.require($display_name, $segment_name)?.to_string(),)*
                })
            }

            fn segment_values(&self) -> Vec<&str> {
                vec![$(self.$field.as_str()),*]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::ResourceId::id(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::ResourceId>::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&$crate::ResourceId::id(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::ResourceId>::parse_insensitively(&s)
                    .map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}
