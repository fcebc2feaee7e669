//! The registry of known identifier templates.
//!
//! The [`Registry`] maps type names to templates. It is used by the
//! [`Recaser`](crate::Recaser) to normalize raw identifier strings without
//! knowing their concrete type.
//!
//! # Global Registry
//!
//! The process-wide registry is built once, on first use, from the explicit
//! startup list in [`commonids::templates`](crate::commonids::templates).
//! Applications that declare their own identifier types add them through
//! [`Registry::init_global`] before anything reads the registry; after that
//! the table is frozen and reads take no lock.
//!
//! # Example
//!
//! ```rust
//! use resource_ids::commonids::ResourceGroupId;
//! use resource_ids::{Registry, ResourceId};
//!
//! let mut registry = Registry::new();
//! registry.register(ResourceGroupId::TEMPLATE).unwrap();
//!
//! // Registering the same type again is a no-op
//! registry.register(ResourceGroupId::TEMPLATE).unwrap();
//! assert_eq!(registry.len(), 1);
//! assert!(registry.get("ResourceGroup").is_some());
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::commonids;
use crate::error::TemplateError;
use crate::parser::{ParseMode, ParseResult, Parser};
use crate::template::IdentifierTemplate;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// A table of identifier templates keyed by type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    templates: BTreeMap<&'static str, IdentifierTemplate>,
}

// Verify Registry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
};

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every template in [`commonids`].
    #[must_use]
    pub fn with_common_ids() -> Self {
        let mut registry = Self::new();
        for template in commonids::templates() {
            if let Err(error) = registry.register(*template) {
                tracing::warn!(%error, "skipping malformed identifier template");
            }
        }
        registry
    }

    /// Returns the process-wide registry, building it on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::with_common_ids)
    }

    /// Builds the process-wide registry, letting `extend` add templates.
    ///
    /// Only the first initialization runs; later calls (and calls after
    /// [`global`](Self::global) has been used) return the existing registry
    /// without invoking `extend`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_ids::{IdentifierTemplate, Registry, Segment};
    ///
    /// const DNS_ZONE: IdentifierTemplate = IdentifierTemplate::new(
    ///     "DnsZone",
    ///     "Dns Zone",
    ///     &[
    ///         Segment::static_segment("staticSubscriptions", "subscriptions"),
    ///         Segment::subscription_id("subscriptionId"),
    ///         Segment::static_segment("staticResourceGroups", "resourceGroups"),
    ///         Segment::resource_group_name("resourceGroupName"),
    ///         Segment::static_segment("staticProviders", "providers"),
    ///         Segment::static_segment("staticMicrosoftNetwork", "Microsoft.Network"),
    ///         Segment::static_segment("staticDnsZones", "dnsZones"),
    ///         Segment::user_specified("dnsZoneName", "dnsZoneValue"),
    ///     ],
    /// );
    ///
    /// let registry = Registry::init_global(|registry| {
    ///     registry.register(DNS_ZONE).unwrap();
    /// });
    /// assert!(registry.get("DnsZone").is_some());
    /// ```
    pub fn init_global<F>(extend: F) -> &'static Self
    where
        F: FnOnce(&mut Self),
    {
        GLOBAL.get_or_init(|| {
            let mut registry = Self::with_common_ids();
            extend(&mut registry);
            tracing::debug!(templates = registry.len(), "initialized identifier registry");
            registry
        })
    }

    /// Adds a template, keyed by its type name.
    ///
    /// Registering a type name that is already present is a no-op. If the
    /// existing template differs, the first registration is kept and a
    /// warning is logged.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the template is malformed.
    pub fn register(&mut self, template: IdentifierTemplate) -> Result<&mut Self, TemplateError> {
        template.validate()?;

        match self.templates.get(template.type_name()) {
            Some(existing) if *existing == template => {
                tracing::trace!(type_name = template.type_name(), "template already registered");
            }
            Some(existing) => {
                tracing::warn!(
                    type_name = template.type_name(),
                    existing = %existing.format_string(),
                    ignored = %template.format_string(),
                    "conflicting template registration ignored"
                );
            }
            None => {
                tracing::debug!(type_name = template.type_name(), "registered template");
                self.templates.insert(template.type_name(), template);
            }
        }

        Ok(self)
    }

    /// Gets a template by type name.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&IdentifierTemplate> {
        self.templates.get(type_name)
    }

    /// Returns true if a template is registered under `type_name`.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.templates.contains_key(type_name)
    }

    /// Returns the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no templates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates over templates in type-name order.
    pub fn templates(&self) -> impl Iterator<Item = &IdentifierTemplate> {
        self.templates.values()
    }

    /// Returns every template `input` parses against, with its parse result.
    ///
    /// Results are in type-name order; ranking is left to the caller.
    #[must_use]
    pub fn matches(&self, input: &str, mode: ParseMode) -> Vec<(&IdentifierTemplate, ParseResult)> {
        self.templates()
            .filter_map(|template| {
                Parser::new(template)
                    .parse(input, mode)
                    .ok()
                    .map(|result| (template, result))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commonids::{ResourceGroupId, SubscriptionId};
    use crate::resource_id::ResourceId;
    use crate::segment::Segment;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = Registry::new();
        registry
            .register(SubscriptionId::TEMPLATE)
            .unwrap()
            .register(ResourceGroupId::TEMPLATE)
            .unwrap()
            .register(SubscriptionId::TEMPLATE)
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Subscription"));
        assert!(registry.contains("ResourceGroup"));
    }

    #[test]
    fn test_conflicting_registration_keeps_first() {
        const IMPOSTOR: IdentifierTemplate = IdentifierTemplate::new(
            "Subscription",
            "Subscription",
            &[Segment::user_specified("name", "nameValue")],
        );

        let mut registry = Registry::new();
        registry.register(SubscriptionId::TEMPLATE).unwrap();
        registry.register(IMPOSTOR).unwrap();

        assert_eq!(registry.get("Subscription"), Some(&SubscriptionId::TEMPLATE));
    }

    #[test]
    fn test_register_rejects_malformed_template() {
        const MALFORMED: IdentifierTemplate = IdentifierTemplate::new("Malformed", "Malformed", &[]);
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register(MALFORMED),
            Err(TemplateError::Empty { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_with_common_ids() {
        let registry = Registry::with_common_ids();
        assert_eq!(registry.len(), commonids::templates().len());
        for template in commonids::templates() {
            assert_eq!(registry.get(template.type_name()), Some(template));
        }
    }

    #[test]
    fn test_templates_in_name_order() {
        let registry = Registry::with_common_ids();
        let names: Vec<_> = registry.templates().map(IdentifierTemplate::type_name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_matches() {
        let registry = Registry::with_common_ids();
        let matches = registry.matches("/subscriptions/sub/resourcegroups/rg", ParseMode::Insensitive);
        let names: Vec<_> = matches.iter().map(|(t, _)| t.type_name()).collect();
        assert_eq!(names, ["ResourceGroup", "Scope"]);

        let matches = registry.matches("/subscriptions/sub/resourcegroups/rg", ParseMode::Strict);
        let names: Vec<_> = matches.iter().map(|(t, _)| t.type_name()).collect();
        assert_eq!(names, ["Scope"]);
    }

    #[test]
    fn test_global_is_shared() {
        let first = Registry::global();
        let second = Registry::init_global(|_| unreachable!("already initialized"));
        assert!(std::ptr::eq(first, second));
        assert!(first.contains("ResourceGroup"));
    }

    #[test]
    fn test_global_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Registry::global().len()))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap() >= commonids::templates().len());
        }
    }
}
