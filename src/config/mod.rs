//! Configuration for case normalization.
//!
//! # Overview
//!
//! - [`RecaseConfig`]: settings for the [`Recaser`](crate::Recaser)
//! - [`RecaseConfigBuilder`]: a builder for constructing [`RecaseConfig`] instances
//! - [`TypeName`]: a validated identifier type name, used as a registry hint
//!
//! # Example
//!
//! ```rust
//! use resource_ids::{ParseMode, RecaseConfig};
//!
//! let config = RecaseConfig::builder()
//!     .default_mode(ParseMode::Insensitive)
//!     .fallback_recasing(true)
//!     .build();
//!
//! assert_eq!(config.default_mode(), ParseMode::Insensitive);
//! assert!(config.fallback_recasing());
//! ```

mod newtypes;

pub use newtypes::TypeName;

use crate::parser::ParseMode;

/// Settings for the [`Recaser`](crate::Recaser).
///
/// # Thread Safety
///
/// `RecaseConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Fallback Recasing
///
/// When no registered template matches an identifier, normalization fails
/// with [`ParseError::NoMatchingTemplate`](crate::ParseError::NoMatchingTemplate).
/// With `fallback_recasing` enabled, the recaser instead rewrites the
/// well-known keywords (`subscriptions`, `resourceGroups`, `providers`) to
/// their canonical case and leaves the rest of the input untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecaseConfig {
    default_mode: ParseMode,
    fallback_recasing: bool,
    prefer_unscoped: bool,
}

impl RecaseConfig {
    /// Creates a new builder for constructing a `RecaseConfig`.
    #[must_use]
    pub fn builder() -> RecaseConfigBuilder {
        RecaseConfigBuilder::new()
    }

    /// Returns the mode used by [`Recaser::parse`](crate::Recaser::parse).
    #[must_use]
    pub const fn default_mode(&self) -> ParseMode {
        self.default_mode
    }

    /// Returns whether unmatched identifiers get keyword-only recasing.
    #[must_use]
    pub const fn fallback_recasing(&self) -> bool {
        self.fallback_recasing
    }

    /// Returns whether unscoped templates outrank scoped ones.
    #[must_use]
    pub const fn prefer_unscoped(&self) -> bool {
        self.prefer_unscoped
    }
}

impl Default for RecaseConfig {
    fn default() -> Self {
        RecaseConfigBuilder::new().build()
    }
}

// Verify RecaseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RecaseConfig>();
    assert_send_sync::<TypeName>();
};

/// Builder for constructing [`RecaseConfig`] instances.
///
/// # Defaults
///
/// - `default_mode`: [`ParseMode::Strict`]
/// - `fallback_recasing`: `false`
/// - `prefer_unscoped`: `true`
#[derive(Debug, Default)]
pub struct RecaseConfigBuilder {
    default_mode: Option<ParseMode>,
    fallback_recasing: Option<bool>,
    prefer_unscoped: Option<bool>,
}

impl RecaseConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parse mode used when parsing typed records.
    #[must_use]
    pub const fn default_mode(mut self, mode: ParseMode) -> Self {
        self.default_mode = Some(mode);
        self
    }

    /// Sets whether unmatched identifiers get keyword-only recasing.
    #[must_use]
    pub const fn fallback_recasing(mut self, enabled: bool) -> Self {
        self.fallback_recasing = Some(enabled);
        self
    }

    /// Sets whether unscoped templates outrank scoped ones.
    ///
    /// A scoped template matches almost anything ending in its anchor, so a
    /// fully-typed template is usually the better choice.
    #[must_use]
    pub const fn prefer_unscoped(mut self, prefer: bool) -> Self {
        self.prefer_unscoped = Some(prefer);
        self
    }

    /// Builds the [`RecaseConfig`], filling in defaults.
    #[must_use]
    pub fn build(self) -> RecaseConfig {
        RecaseConfig {
            default_mode: self.default_mode.unwrap_or_default(),
            fallback_recasing: self.fallback_recasing.unwrap_or(false),
            prefer_unscoped: self.prefer_unscoped.unwrap_or(true),
        }
    }
}
