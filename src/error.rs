//! Error types for the resource identifier engine.
//!
//! This module contains the error types returned while declaring templates,
//! parsing identifiers and building configuration.
//!
//! # Error Handling
//!
//! Parsing never recovers internally: the first problem found (walking the
//! template left to right) is returned to the caller, which decides whether it
//! is a hard failure or a soft validation diagnostic.
//!
//! # Example
//!
//! ```rust
//! use resource_ids::commonids::ResourceGroupId;
//! use resource_ids::{ParseError, ResourceId};
//!
//! let result = ResourceGroupId::parse("/subscriptions/sub/resourcegroups/rg");
//! assert!(matches!(result, Err(ParseError::StaticSegmentMismatch { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while parsing a resource identifier.
///
/// Every variant names the offending segment and/or carries the raw input so
/// diagnostics can point at exactly what was wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input had no path components.
    #[error("resource ID cannot be empty")]
    EmptyInput,

    /// The template expected a component the input did not supply.
    #[error("parsing {id_type} ID: the segment '{segment_name}' was not specified")]
    SegmentNotSpecified {
        /// Display name of the identifier type being parsed.
        id_type: &'static str,
        /// Name of the segment that was missing.
        segment_name: &'static str,
    },

    /// A fixed literal segment did not match.
    #[error("the segment '{segment_name}' should be '{expected}' but got '{actual}'")]
    StaticSegmentMismatch {
        /// Name of the static segment.
        segment_name: &'static str,
        /// The declared (canonical) value.
        expected: &'static str,
        /// The component found in the input.
        actual: String,
    },

    /// A constant segment held a value outside its declared set.
    #[error("the segment '{segment_name}' should be one of {allowed:?} but got '{actual}'")]
    ConstantSegmentMismatch {
        /// Name of the constant segment.
        segment_name: &'static str,
        /// The declared values.
        allowed: &'static [&'static str],
        /// The component found in the input.
        actual: String,
    },

    /// A scope segment would have to consume zero components for the rest of
    /// the template to fit.
    #[error("the scope segment '{segment_name}' is missing or too short")]
    ScopeTooShort {
        /// Name of the scope segment.
        segment_name: &'static str,
    },

    /// The input has more components than the template accounts for.
    #[error("unexpected trailing input '{remaining}'")]
    TrailingInput {
        /// The unconsumed components, joined with `/`.
        remaining: String,
    },

    /// A type hint named a template that is not registered.
    #[error("no resource ID type named '{type_name}' is registered")]
    UnknownIdType {
        /// The requested type name.
        type_name: String,
    },

    /// No registered template matched the input.
    #[error("'{input}' does not match any registered resource ID type")]
    NoMatchingTemplate {
        /// The raw input.
        input: String,
    },
}

impl ParseError {
    /// Returns the name of the segment this error refers to, if any.
    #[must_use]
    pub const fn segment_name(&self) -> Option<&'static str> {
        match self {
            Self::SegmentNotSpecified { segment_name, .. }
            | Self::StaticSegmentMismatch { segment_name, .. }
            | Self::ConstantSegmentMismatch { segment_name, .. }
            | Self::ScopeTooShort { segment_name } => Some(*segment_name),
            _ => None,
        }
    }

    /// Returns true if the error is a literal mismatch that differs only by case.
    ///
    /// Callers use this to suggest parsing insensitively.
    #[must_use]
    pub fn is_case_mismatch(&self) -> bool {
        match self {
            Self::StaticSegmentMismatch {
                expected, actual, ..
            } => crate::parser::eq_fold(expected, actual),
            Self::ConstantSegmentMismatch {
                allowed, actual, ..
            } => allowed.iter().any(|v| crate::parser::eq_fold(v, actual)),
            _ => false,
        }
    }
}

/// Errors raised when an identifier template is malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template declares no segments.
    #[error("template '{type_name}' has no segments")]
    Empty {
        /// The template's type name.
        type_name: &'static str,
    },

    /// Two segments share a name.
    #[error("template '{type_name}' declares the segment '{segment_name}' more than once")]
    DuplicateSegmentName {
        /// The template's type name.
        type_name: &'static str,
        /// The duplicated name.
        segment_name: &'static str,
    },

    /// A static segment has an empty value.
    #[error("template '{type_name}' has an empty static segment '{segment_name}'")]
    EmptyStaticValue {
        /// The template's type name.
        type_name: &'static str,
        /// The offending segment.
        segment_name: &'static str,
    },

    /// A constant segment declares no values.
    #[error("template '{type_name}' has a constant segment '{segment_name}' without values")]
    EmptyConstantValues {
        /// The template's type name.
        type_name: &'static str,
        /// The offending segment.
        segment_name: &'static str,
    },

    /// Two scope segments are not separated by a static anchor.
    #[error("template '{type_name}' has scope segments '{first}' and '{second}' without a static segment between them")]
    AdjacentScopes {
        /// The template's type name.
        type_name: &'static str,
        /// The first scope.
        first: &'static str,
        /// The second scope.
        second: &'static str,
    },
}

/// Errors that can occur while building configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A type name was empty or contained characters other than ASCII letters and digits.
    #[error("Invalid type name '{name}'. Expected a non-empty ASCII alphanumeric name (e.g. 'ResourceGroup').")]
    InvalidTypeName {
        /// The rejected name.
        name: String,
    },

    /// A parse mode string was not recognised.
    #[error("Invalid parse mode '{mode}'. Expected 'strict' or 'insensitive'.")]
    InvalidParseMode {
        /// The rejected mode.
        mode: String,
    },
}
