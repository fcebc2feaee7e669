//! Typed identifier records.
//!
//! This module provides the [`ResourceId`] trait implemented by every typed
//! identifier, and the validation adapter used by configuration validators.
//!
//! # Construction
//!
//! Records are built either directly, from known field values, or by parsing:
//!
//! ```rust
//! use resource_ids::commonids::ResourceGroupId;
//! use resource_ids::ResourceId;
//!
//! let direct = ResourceGroupId::new("1234", "example");
//! let parsed = ResourceGroupId::parse("/subscriptions/1234/resourceGroups/example").unwrap();
//! assert_eq!(direct, parsed);
//! assert_eq!(direct.id(), "/subscriptions/1234/resourceGroups/example");
//! ```

use std::fmt::Write;

use serde_json::Value;

use crate::error::ParseError;
use crate::formatter::format_id;
use crate::parser::{ParseMode, ParseResult, Parser};
use crate::segment::humanize;
use crate::template::IdentifierTemplate;

/// A typed, immutable identifier record.
///
/// Implementors hold one field per captured segment of [`TEMPLATE`](Self::TEMPLATE),
/// in template order. Most implementations are generated by
/// [`define_resource_id!`](crate::define_resource_id).
pub trait ResourceId: Sized {
    /// The template describing this identifier type.
    const TEMPLATE: IdentifierTemplate;

    /// Builds the record from a parse result.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SegmentNotSpecified`] if a field's segment is
    /// absent from the result.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError>;

    /// Returns the field values in template order.
    fn segment_values(&self) -> Vec<&str>;

    /// Parses an identifier, requiring static segments to match exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `input` does not match the template.
    fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_mode(input, ParseMode::Strict)
    }

    /// Parses an identifier, ignoring the case of static segments.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `input` does not match the template.
    fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_mode(input, ParseMode::Insensitive)
    }

    /// Parses an identifier in the given mode.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `input` does not match the template.
    fn parse_with_mode(input: &str, mode: ParseMode) -> Result<Self, ParseError> {
        let template = Self::TEMPLATE;
        let result = Parser::new(&template).parse(input, mode)?;
        Self::from_parse_result(&result)
    }

    /// Returns the canonical identifier string.
    fn id(&self) -> String {
        format_id(&Self::TEMPLATE, self.segment_values())
    }

    /// Returns a human-readable description of the identifier.
    fn description(&self) -> String {
        describe_id(&Self::TEMPLATE, self.segment_values())
    }
}

/// Describes an identifier as its display name followed by labelled values.
///
/// ```rust
/// use resource_ids::commonids::ResourceGroupId;
/// use resource_ids::ResourceId;
///
/// let id = ResourceGroupId::new("1234", "example");
/// assert_eq!(
///     id.description(),
///     r#"Resource Group (Subscription Id: "1234" / Resource Group Name: "example")"#
/// );
/// ```
pub fn describe_id<'a, I>(template: &IdentifierTemplate, values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let components: Vec<String> = template
        .captured_segments()
        .zip(values)
        .map(|(segment, value)| format!("{}: {value:?}", humanize(segment.name())))
        .collect();
    format!("{} ({})", template.display_name(), components.join(" / "))
}

/// The outcome of validating a configuration value as an identifier.
///
/// Configuration validators want diagnostics rather than a typed result, so
/// the parsed record is discarded and only the error text is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Non-fatal diagnostics.
    pub warnings: Vec<String>,
    /// Fatal diagnostics.
    pub errors: Vec<String>,
}

impl Validation {
    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a configuration value as an identifier of type `T`.
///
/// The value must be a JSON string that parses strictly.
///
/// # Example
///
/// ```rust
/// use resource_ids::commonids::SubscriptionId;
/// use resource_ids::validate_resource_id;
/// use serde_json::json;
///
/// let ok = validate_resource_id::<SubscriptionId>(&json!("/subscriptions/1234"), "scope");
/// assert!(ok.is_valid());
///
/// let bad = validate_resource_id::<SubscriptionId>(&json!(42), "scope");
/// assert_eq!(bad.errors, vec![r#"expected "scope" to be a string"#.to_string()]);
/// ```
#[must_use]
pub fn validate_resource_id<T: ResourceId>(value: &Value, key: &str) -> Validation {
    match value.as_str() {
        Some(input) => validate_resource_id_str::<T>(input, key),
        None => Validation {
            warnings: Vec::new(),
            errors: vec![format!("expected {key:?} to be a string")],
        },
    }
}

/// Validates a string as an identifier of type `T`.
#[must_use]
pub fn validate_resource_id_str<T: ResourceId>(input: &str, key: &str) -> Validation {
    let mut validation = Validation::default();
    if let Err(error) = T::parse(input) {
        let mut message = format!("{key:?}: {error}");
        if error.is_case_mismatch() {
            let _ = write!(
                message,
                " (expected the format {})",
                T::TEMPLATE.format_string()
            );
        }
        validation.errors.push(message);
    }
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct LockId {
        scope: String,
        lock_name: String,
    }

    impl ResourceId for LockId {
        const TEMPLATE: IdentifierTemplate = IdentifierTemplate::new(
            "ScopedLock",
            "Scoped Lock",
            &[
                Segment::scope("scope"),
                Segment::static_segment("staticProviders", "providers"),
                Segment::static_segment("staticMicrosoftAuthorization", "Microsoft.Authorization"),
                Segment::static_segment("staticLocks", "locks"),
                Segment::user_specified("lockName", "lockValue"),
            ],
        );

        fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError> {
            Ok(Self {
                scope: result.require("Scoped Lock", "scope")?.to_string(),
                lock_name: result.require("Scoped Lock", "lockName")?.to_string(),
            })
        }

        fn segment_values(&self) -> Vec<&str> {
            vec![self.scope.as_str(), self.lock_name.as_str()]
        }
    }

    const LOCK: &str = "/subscriptions/sub/providers/Microsoft.Authorization/locks/lock1";

    #[test]
    fn test_parse_and_format() {
        let id = LockId::parse(LOCK).unwrap();
        assert_eq!(id.scope, "/subscriptions/sub");
        assert_eq!(id.lock_name, "lock1");
        assert_eq!(id.id(), LOCK);
    }

    #[test]
    fn test_parse_insensitively_normalizes() {
        let id = LockId::parse_insensitively(
            "/subscriptions/sub/PROVIDERS/microsoft.authorization/Locks/lock1",
        )
        .unwrap();
        assert_eq!(id.id(), LOCK);
    }

    #[test]
    fn test_direct_construction_round_trip() {
        let id = LockId {
            scope: "/subscriptions/sub".to_string(),
            lock_name: "lock1".to_string(),
        };
        assert_eq!(LockId::parse(&id.id()), Ok(id));
    }

    #[test]
    fn test_description() {
        let id = LockId::parse(LOCK).unwrap();
        assert_eq!(
            id.description(),
            r#"Scoped Lock (Scope: "/subscriptions/sub" / Lock Name: "lock1")"#
        );
    }

    #[test]
    fn test_validate_accepts_valid_string() {
        let validation = validate_resource_id::<LockId>(&json!(LOCK), "lock_id");
        assert!(validation.is_valid());
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn test_validate_rejects_non_string() {
        let validation = validate_resource_id::<LockId>(&json!({"id": LOCK}), "lock_id");
        assert_eq!(
            validation.errors,
            vec![r#"expected "lock_id" to be a string"#.to_string()]
        );
    }

    #[test]
    fn test_validate_reports_parse_error_text() {
        let validation = validate_resource_id_str::<LockId>("/subscriptions/sub", "lock_id");
        assert!(!validation.is_valid());
        assert_eq!(validation.errors.len(), 1);
        assert!(validation.errors[0].starts_with(r#""lock_id": "#));
    }

    #[test]
    fn test_validate_suggests_format_for_case_mismatch() {
        let validation = validate_resource_id_str::<LockId>(
            "/subscriptions/sub/providers/Microsoft.Authorization/LOCKS/lock1",
            "lock_id",
        );
        assert!(validation.errors[0].contains("/{scope}/providers/Microsoft.Authorization/locks/{lockName}"));
    }
}
