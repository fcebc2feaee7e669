//! The vocabulary of identifier path segments.
//!
//! A [`Segment`] is one positional unit of an identifier template: either a
//! fixed literal or a placeholder for a value supplied by the caller.
//!
//! Segments are plain `const`-constructible data so templates can be declared
//! as constants:
//!
//! ```rust
//! use resource_ids::Segment;
//!
//! const SEGMENTS: &[Segment] = &[
//!     Segment::static_segment("staticSubscriptions", "subscriptions"),
//!     Segment::subscription_id("subscriptionId"),
//!     Segment::static_segment("staticResourceGroups", "resourceGroups"),
//!     Segment::resource_group_name("resourceGroupName"),
//! ];
//!
//! assert_eq!(SEGMENTS.iter().filter(|s| s.is_captured()).count(), 2);
//! ```

use std::fmt;

/// Example value rendered for subscription ID segments.
pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Example value rendered for resource group segments.
pub const EXAMPLE_RESOURCE_GROUP_NAME: &str = "example-resource-group";

/// Example value rendered for resource provider segments.
pub const EXAMPLE_RESOURCE_PROVIDER: &str = "Microsoft.Example";

/// Example value rendered for scope segments.
pub const EXAMPLE_SCOPE: &str =
    "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/some-resource-group";

/// One segment of an identifier template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A fixed literal, always rendered as `value`.
    Static {
        /// Segment name used in diagnostics.
        name: &'static str,
        /// The canonical literal text.
        value: &'static str,
    },
    /// An opaque caller-supplied value, usually a resource name.
    UserSpecified {
        /// Field name.
        name: &'static str,
        /// Value shown in examples and documentation.
        example_value: &'static str,
    },
    /// A subscription ID. Its shape is not checked.
    SubscriptionId {
        /// Field name.
        name: &'static str,
    },
    /// A resource group name.
    ResourceGroupName {
        /// Field name.
        name: &'static str,
    },
    /// A resource provider namespace captured as a value.
    ResourceProvider {
        /// Field name.
        name: &'static str,
    },
    /// A variable-length prefix, itself usually another identifier.
    Scope {
        /// Field name.
        name: &'static str,
    },
    /// A single component restricted to a closed set of values.
    Constant {
        /// Field name.
        name: &'static str,
        /// The declared values, in their canonical case.
        values: &'static [&'static str],
    },
}

/// The kind of a [`Segment`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// See [`Segment::Static`].
    Static,
    /// See [`Segment::UserSpecified`].
    UserSpecified,
    /// See [`Segment::SubscriptionId`].
    SubscriptionId,
    /// See [`Segment::ResourceGroupName`].
    ResourceGroupName,
    /// See [`Segment::ResourceProvider`].
    ResourceProvider,
    /// See [`Segment::Scope`].
    Scope,
    /// See [`Segment::Constant`].
    Constant,
}

impl SegmentKind {
    /// Returns the kind name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::UserSpecified => "user_specified",
            Self::SubscriptionId => "subscription_id",
            Self::ResourceGroupName => "resource_group_name",
            Self::ResourceProvider => "resource_provider",
            Self::Scope => "scope",
            Self::Constant => "constant",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Segment {
    /// Creates a static segment.
    #[must_use]
    pub const fn static_segment(name: &'static str, value: &'static str) -> Self {
        Self::Static { name, value }
    }

    /// Creates a user-specified segment.
    #[must_use]
    pub const fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Self::UserSpecified {
            name,
            example_value,
        }
    }

    /// Creates a subscription ID segment.
    #[must_use]
    pub const fn subscription_id(name: &'static str) -> Self {
        Self::SubscriptionId { name }
    }

    /// Creates a resource group name segment.
    #[must_use]
    pub const fn resource_group_name(name: &'static str) -> Self {
        Self::ResourceGroupName { name }
    }

    /// Creates a resource provider segment.
    #[must_use]
    pub const fn resource_provider(name: &'static str) -> Self {
        Self::ResourceProvider { name }
    }

    /// Creates a scope segment.
    #[must_use]
    pub const fn scope(name: &'static str) -> Self {
        Self::Scope { name }
    }

    /// Creates a constant segment.
    #[must_use]
    pub const fn constant(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::Constant { name, values }
    }

    /// Returns the segment name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Static { name, .. }
            | Self::UserSpecified { name, .. }
            | Self::SubscriptionId { name }
            | Self::ResourceGroupName { name }
            | Self::ResourceProvider { name }
            | Self::Scope { name }
            | Self::Constant { name, .. } => *name,
        }
    }

    /// Returns the segment kind.
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        match self {
            Self::Static { .. } => SegmentKind::Static,
            Self::UserSpecified { .. } => SegmentKind::UserSpecified,
            Self::SubscriptionId { .. } => SegmentKind::SubscriptionId,
            Self::ResourceGroupName { .. } => SegmentKind::ResourceGroupName,
            Self::ResourceProvider { .. } => SegmentKind::ResourceProvider,
            Self::Scope { .. } => SegmentKind::Scope,
            Self::Constant { .. } => SegmentKind::Constant,
        }
    }

    /// Returns true for static segments.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static { .. })
    }

    /// Returns true for scope segments.
    #[must_use]
    pub const fn is_scope(&self) -> bool {
        matches!(self, Self::Scope { .. })
    }

    /// Returns true if the segment captures a value into the parsed field map.
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        !self.is_static()
    }

    /// Returns a representative value for this segment.
    ///
    /// Scope examples carry their leading `/`.
    #[must_use]
    pub const fn example_value(&self) -> &'static str {
        match self {
            Self::Static { value, .. } => *value,
            Self::UserSpecified { example_value, .. } => *example_value,
            Self::SubscriptionId { .. } => EXAMPLE_SUBSCRIPTION_ID,
            Self::ResourceGroupName { .. } => EXAMPLE_RESOURCE_GROUP_NAME,
            Self::ResourceProvider { .. } => EXAMPLE_RESOURCE_PROVIDER,
            Self::Scope { .. } => EXAMPLE_SCOPE,
            Self::Constant { values, .. } => match values.first() {
                Some(value) => *value,
                None => "",
            },
        }
    }
}

/// Turns a camelCase segment name into a label, e.g. `resourceGroupName` into
/// `Resource Group Name`.
pub(crate) fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Segment>();
    assert_send_sync::<SegmentKind>();
};
