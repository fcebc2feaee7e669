//! Untyped key/value identifier parsing.
//!
//! Older code handles identifiers without a template: the path is read as
//! alternating key/value pairs, the well-known keys are pulled out, and the
//! caller pops the rest by name. [`AzureResourceId`] supports that style.
//!
//! # Example
//!
//! ```rust
//! use resource_ids::legacy::AzureResourceId;
//!
//! let mut id = AzureResourceId::parse(
//!     "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.Web/sites/app",
//! )
//! .unwrap();
//!
//! assert_eq!(id.subscription_id(), "1234");
//! assert_eq!(id.resource_group(), Some("rg"));
//! assert_eq!(id.provider(), Some("Microsoft.Web"));
//!
//! let site = id.pop_segment("sites").unwrap();
//! assert_eq!(site, "app");
//! assert!(id.validate_no_remaining_segments("site_id").is_ok());
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors returned by the key/value parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LegacyIdError {
    /// The input was not an absolute path.
    #[error("cannot parse resource ID '{input}': expected an absolute path starting with '/'")]
    NotAbsolute {
        /// The raw input.
        input: String,
    },

    /// The path had an odd number of components.
    #[error("the number of path segments is not divisible by 2 in '{path}'")]
    OddSegmentCount {
        /// The path, without leading and trailing slashes.
        path: String,
    },

    /// A key or value was empty.
    #[error("key/value cannot be empty strings. Key: '{key}', Value: '{value}'")]
    EmptyComponent {
        /// The key of the pair.
        key: String,
        /// The value of the pair.
        value: String,
    },

    /// No `subscriptions` key was present.
    #[error("no subscription ID found in '{path}'")]
    MissingSubscription {
        /// The path, without leading and trailing slashes.
        path: String,
    },

    /// A segment requested with [`AzureResourceId::pop_segment`] was absent.
    #[error("ID was missing the '{name}' element")]
    MissingSegment {
        /// The requested key.
        name: String,
    },

    /// Segments remained after the caller popped everything it expected.
    #[error("ID contained more segments than required: '{source_id}', {remaining:?}")]
    UnexpectedSegments {
        /// The identifier the caller was reading.
        source_id: String,
        /// The keys and values left over.
        remaining: BTreeMap<String, String>,
    },
}

/// An identifier parsed as key/value pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureResourceId {
    subscription_id: String,
    resource_group: Option<String>,
    provider: Option<String>,
    path: BTreeMap<String, String>,
}

impl AzureResourceId {
    /// Parses `input` as alternating key/value components.
    ///
    /// One trailing `/` is tolerated. The first `subscriptions` and
    /// `providers` keys are captured separately; later repeats land in the
    /// path map. `resourceGroups` (or `resourcegroups`) is moved out of the
    /// path map into [`resource_group`](Self::resource_group).
    ///
    /// # Errors
    ///
    /// Returns a [`LegacyIdError`] if the input is not an absolute path, has
    /// an odd number of components, contains an empty key or value, or lacks
    /// a subscription.
    pub fn parse(input: &str) -> Result<Self, LegacyIdError> {
        let Some(path) = input.strip_prefix('/') else {
            return Err(LegacyIdError::NotAbsolute {
                input: input.to_string(),
            });
        };
        let path = path.strip_suffix('/').unwrap_or(path);

        let components: Vec<&str> = path.split('/').collect();
        if components.len() % 2 != 0 {
            return Err(LegacyIdError::OddSegmentCount {
                path: path.to_string(),
            });
        }

        let mut subscription_id = None;
        let mut provider = None;
        let mut map = BTreeMap::new();

        for pair in components.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() || value.is_empty() {
                return Err(LegacyIdError::EmptyComponent {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }

            match key {
                "subscriptions" if subscription_id.is_none() => {
                    subscription_id = Some(value.to_string());
                }
                "providers" if provider.is_none() => provider = Some(value.to_string()),
                _ => {
                    map.insert(key.to_string(), value.to_string());
                }
            }
        }

        let subscription_id = subscription_id.ok_or_else(|| LegacyIdError::MissingSubscription {
            path: path.to_string(),
        })?;
        let resource_group = map
            .remove("resourceGroups")
            .or_else(|| map.remove("resourcegroups"));

        Ok(Self {
            subscription_id,
            resource_group,
            provider,
            path: map,
        })
    }

    /// Returns the subscription ID.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Returns the resource group name, if present.
    #[must_use]
    pub fn resource_group(&self) -> Option<&str> {
        self.resource_group.as_deref()
    }

    /// Returns the first provider namespace, if present.
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns the keys and values not yet popped.
    #[must_use]
    pub const fn path(&self) -> &BTreeMap<String, String> {
        &self.path
    }

    /// Removes and returns the value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LegacyIdError::MissingSegment`] if `name` is absent.
    pub fn pop_segment(&mut self, name: &str) -> Result<String, LegacyIdError> {
        self.path
            .remove(name)
            .ok_or_else(|| LegacyIdError::MissingSegment {
                name: name.to_string(),
            })
    }

    /// Fails if any segments have not been popped.
    ///
    /// # Errors
    ///
    /// Returns [`LegacyIdError::UnexpectedSegments`] naming `source_id` and
    /// the leftover pairs.
    pub fn validate_no_remaining_segments(&self, source_id: &str) -> Result<(), LegacyIdError> {
        if self.path.is_empty() {
            return Ok(());
        }
        Err(LegacyIdError::UnexpectedSegments {
            source_id: source_id.to_string(),
            remaining: self.path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_group() {
        let id = AzureResourceId::parse("/subscriptions/sub/resourceGroups/rg").unwrap();
        assert_eq!(id.subscription_id(), "sub");
        assert_eq!(id.resource_group(), Some("rg"));
        assert_eq!(id.provider(), None);
        assert!(id.path().is_empty());
    }

    #[test]
    fn test_parse_lowercase_resource_groups() {
        let id = AzureResourceId::parse("/subscriptions/sub/resourcegroups/rg/").unwrap();
        assert_eq!(id.resource_group(), Some("rg"));
    }

    #[test]
    fn test_parse_nested_resource() {
        let mut id = AzureResourceId::parse(
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/vnet/subnets/default",
        )
        .unwrap();

        assert_eq!(id.provider(), Some("Microsoft.Network"));
        assert_eq!(id.pop_segment("virtualNetworks").unwrap(), "vnet");
        assert_eq!(id.pop_segment("subnets").unwrap(), "default");
        assert!(id.validate_no_remaining_segments("subnet_id").is_ok());
    }

    #[test]
    fn test_second_provider_lands_in_path() {
        let id = AzureResourceId::parse(
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Web/sites/app/providers/Microsoft.Authorization",
        )
        .unwrap();
        assert_eq!(id.provider(), Some("Microsoft.Web"));
        assert_eq!(
            id.path().get("providers").map(String::as_str),
            Some("Microsoft.Authorization")
        );
    }

    #[test]
    fn test_parse_requires_absolute_path() {
        assert!(matches!(
            AzureResourceId::parse("subscriptions/sub"),
            Err(LegacyIdError::NotAbsolute { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_odd_segment_count() {
        assert_eq!(
            AzureResourceId::parse("/subscriptions/sub/resourceGroups"),
            Err(LegacyIdError::OddSegmentCount {
                path: "subscriptions/sub/resourceGroups".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_empty_values() {
        assert!(matches!(
            AzureResourceId::parse("/subscriptions//resourceGroups/rg"),
            Err(LegacyIdError::EmptyComponent { .. })
        ));
    }

    #[test]
    fn test_parse_requires_subscription() {
        assert!(matches!(
            AzureResourceId::parse("/resourceGroups/rg"),
            Err(LegacyIdError::MissingSubscription { .. })
        ));
    }

    #[test]
    fn test_pop_missing_segment() {
        let mut id = AzureResourceId::parse("/subscriptions/sub/resourceGroups/rg").unwrap();
        let error = id.pop_segment("sites").unwrap_err();
        assert_eq!(error.to_string(), "ID was missing the 'sites' element");
    }

    #[test]
    fn test_remaining_segments_reported() {
        let id = AzureResourceId::parse(
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Web/sites/app",
        )
        .unwrap();
        let error = id.validate_no_remaining_segments("/some/id").unwrap_err();
        match error {
            LegacyIdError::UnexpectedSegments { source_id, remaining } => {
                assert_eq!(source_id, "/some/id");
                assert_eq!(remaining.get("sites").map(String::as_str), Some("app"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
