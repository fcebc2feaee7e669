//! Identifier templates.
//!
//! An [`IdentifierTemplate`] is the declaration of one identifier type: its
//! name and the ordered segments that make up its canonical path. Templates
//! are `const` values, declared once per type, in the same way REST resources
//! declare their paths.
//!
//! # Example
//!
//! ```rust
//! use resource_ids::{IdentifierTemplate, Segment};
//!
//! const RESOURCE_GROUP: IdentifierTemplate = IdentifierTemplate::new(
//!     "ResourceGroup",
//!     "Resource Group",
//!     &[
//!         Segment::static_segment("staticSubscriptions", "subscriptions"),
//!         Segment::subscription_id("subscriptionId"),
//!         Segment::static_segment("staticResourceGroups", "resourceGroups"),
//!         Segment::resource_group_name("resourceGroupName"),
//!     ],
//! );
//!
//! assert!(RESOURCE_GROUP.validate().is_ok());
//! assert_eq!(
//!     RESOURCE_GROUP.format_string(),
//!     "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}"
//! );
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::error::TemplateError;
use crate::formatter::format_id;
use crate::segment::Segment;

/// The declaration of one identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentifierTemplate {
    type_name: &'static str,
    display_name: &'static str,
    segments: &'static [Segment],
}

impl IdentifierTemplate {
    /// Creates a new template.
    ///
    /// This is a `const fn` so templates can be declared as constants. Call
    /// [`validate`](Self::validate) (or register the template) to check it.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Unique key of the identifier type (e.g. `ResourceGroup`)
    /// * `display_name` - Label used in descriptions (e.g. `Resource Group`)
    /// * `segments` - The ordered path segments
    #[must_use]
    pub const fn new(
        type_name: &'static str,
        display_name: &'static str,
        segments: &'static [Segment],
    ) -> Self {
        Self {
            type_name,
            display_name,
            segments,
        }
    }

    /// Returns the type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Returns the segments in path order.
    #[must_use]
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Returns the segments that capture a value, in path order.
    pub fn captured_segments(&self) -> impl Iterator<Item = &'static Segment> {
        self.segments.iter().filter(|s| s.is_captured())
    }

    /// Returns the number of static segments.
    #[must_use]
    pub fn static_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_static()).count()
    }

    /// Returns true if the template contains a scope segment.
    #[must_use]
    pub fn has_scope(&self) -> bool {
        self.segments.iter().any(Segment::is_scope)
    }

    /// Returns the path pattern with `{name}` placeholders for captured segments.
    #[must_use]
    pub fn format_string(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            match segment {
                Segment::Static { value, .. } => {
                    out.push('/');
                    out.push_str(value);
                }
                other => {
                    out.push_str("/{");
                    out.push_str(other.name());
                    out.push('}');
                }
            }
        }
        out
    }

    /// Returns an example identifier built from each segment's example value.
    #[must_use]
    pub fn example_id(&self) -> String {
        format_id(self, self.captured_segments().map(Segment::example_value))
    }

    /// Checks that the template is well formed.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let type_name = self.type_name;
        if self.segments.is_empty() {
            return Err(TemplateError::Empty { type_name });
        }

        let mut names = HashSet::with_capacity(self.segments.len());
        let mut open_scope: Option<&'static str> = None;

        for segment in self.segments {
            let segment_name = segment.name();
            if !names.insert(segment_name) {
                return Err(TemplateError::DuplicateSegmentName {
                    type_name,
                    segment_name,
                });
            }

            match segment {
                Segment::Static { value, .. } => {
                    if value.is_empty() {
                        return Err(TemplateError::EmptyStaticValue {
                            type_name,
                            segment_name,
                        });
                    }
                    open_scope = None;
                }
                Segment::Constant { values, .. } if values.is_empty() => {
                    return Err(TemplateError::EmptyConstantValues {
                        type_name,
                        segment_name,
                    });
                }
                Segment::Scope { name } => {
                    if let Some(first) = open_scope {
                        return Err(TemplateError::AdjacentScopes {
                            type_name,
                            first,
                            second: *name,
                        });
                    }
                    open_scope = Some(*name);
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl fmt::Display for IdentifierTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.type_name, self.format_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN_GROUP: IdentifierTemplate = IdentifierTemplate::new(
        "OriginGroup",
        "Origin Group",
        &[
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftCDN", "Microsoft.CDN"),
            Segment::static_segment("staticProfiles", "profiles"),
            Segment::user_specified("profileName", "profileValue"),
        ],
    );

    #[test]
    fn test_template_stores_fields_correctly() {
        assert_eq!(ORIGIN_GROUP.type_name(), "OriginGroup");
        assert_eq!(ORIGIN_GROUP.display_name(), "Origin Group");
        assert_eq!(ORIGIN_GROUP.segments().len(), 8);
        assert_eq!(ORIGIN_GROUP.static_count(), 5);
        assert!(!ORIGIN_GROUP.has_scope());
    }

    #[test]
    fn test_captured_segments_in_order() {
        let names: Vec<_> = ORIGIN_GROUP.captured_segments().map(Segment::name).collect();
        assert_eq!(names, ["subscriptionId", "resourceGroupName", "profileName"]);
    }

    #[test]
    fn test_format_string() {
        assert_eq!(
            ORIGIN_GROUP.format_string(),
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.CDN/profiles/{profileName}"
        );
    }

    #[test]
    fn test_example_id() {
        assert_eq!(
            ORIGIN_GROUP.example_id(),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.CDN/profiles/profileValue"
        );
    }

    #[test]
    fn test_validate_rejects_empty() {
        const EMPTY: IdentifierTemplate = IdentifierTemplate::new("Empty", "Empty", &[]);
        assert_eq!(
            EMPTY.validate(),
            Err(TemplateError::Empty { type_name: "Empty" })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        const DUPLICATE: IdentifierTemplate = IdentifierTemplate::new(
            "Duplicate",
            "Duplicate",
            &[
                Segment::user_specified("name", "a"),
                Segment::user_specified("name", "b"),
            ],
        );
        assert!(matches!(
            DUPLICATE.validate(),
            Err(TemplateError::DuplicateSegmentName {
                segment_name: "name",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_unanchored_scopes() {
        const ADJACENT: IdentifierTemplate = IdentifierTemplate::new(
            "Adjacent",
            "Adjacent",
            &[
                Segment::scope("outer"),
                Segment::user_specified("name", "a"),
                Segment::scope("inner"),
            ],
        );
        assert!(matches!(
            ADJACENT.validate(),
            Err(TemplateError::AdjacentScopes {
                first: "outer",
                second: "inner",
                ..
            })
        ));

        const ANCHORED: IdentifierTemplate = IdentifierTemplate::new(
            "Anchored",
            "Anchored",
            &[
                Segment::scope("outer"),
                Segment::static_segment("staticProviders", "providers"),
                Segment::scope("inner"),
            ],
        );
        assert!(ANCHORED.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        const EMPTY_STATIC: IdentifierTemplate =
            IdentifierTemplate::new("EmptyStatic", "Empty", &[Segment::static_segment("s", "")]);
        assert!(matches!(
            EMPTY_STATIC.validate(),
            Err(TemplateError::EmptyStaticValue { .. })
        ));

        const EMPTY_CONSTANT: IdentifierTemplate =
            IdentifierTemplate::new("EmptyConstant", "Empty", &[Segment::constant("c", &[])]);
        assert!(matches!(
            EMPTY_CONSTANT.validate(),
            Err(TemplateError::EmptyConstantValues { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert!(ORIGIN_GROUP.to_string().starts_with("OriginGroup (/subscriptions/"));
    }
}
