//! Case normalization of untyped identifier strings.
//!
//! The remote API frequently returns identifiers whose literal segments are
//! cased inconsistently. [`normalize_case`] finds the registered template
//! that best matches such a string and re-renders it in canonical form.
//!
//! # Candidate Ranking
//!
//! When several templates match, the most specific one wins:
//!
//! 1. Unscoped templates before scoped ones (configurable)
//! 2. More static segments before fewer
//! 3. More segments overall before fewer
//! 4. Type name, so the choice is deterministic
//!
//! Templates without static segments are never candidates: they carry no
//! casing to restore.
//!
//! # Example
//!
//! ```rust
//! use resource_ids::normalize_case;
//!
//! let id = normalize_case(
//!     "/SUBSCRIPTIONS/1234/resourcegroups/rg/providers/microsoft.keyvault/VAULTS/kv1",
//! )
//! .unwrap();
//! assert_eq!(
//!     id,
//!     "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/kv1"
//! );
//! ```

use std::cmp::Reverse;

use crate::config::{RecaseConfig, TypeName};
use crate::error::ParseError;
use crate::formatter::format_id;
use crate::parser::{eq_fold, ParseMode, ParseResult, Parser};
use crate::registry::Registry;
use crate::resource_id::ResourceId;
use crate::template::IdentifierTemplate;

const KEYWORDS: &[&str] = &["subscriptions", "resourceGroups", "providers"];

/// Normalizes an identifier against the global registry.
///
/// # Errors
///
/// Returns [`ParseError::NoMatchingTemplate`] if no registered template
/// matches `raw`.
pub fn normalize_case(raw: &str) -> Result<String, ParseError> {
    Recaser::global().normalize(raw)
}

/// Normalizes an identifier against one named template in the global registry.
///
/// # Errors
///
/// Returns [`ParseError::UnknownIdType`] if `type_name` is not registered, or
/// the template's parse error if `raw` does not match it.
pub fn normalize_case_with_hint(raw: &str, type_name: &str) -> Result<String, ParseError> {
    Recaser::global().normalize_with_hint(raw, type_name)
}

/// Normalizes identifier strings against a registry.
#[derive(Debug, Clone)]
pub struct Recaser<'r> {
    registry: &'r Registry,
    config: RecaseConfig,
}

impl Recaser<'static> {
    /// Creates a recaser over the global registry with default settings.
    #[must_use]
    pub fn global() -> Self {
        Self::new(Registry::global(), RecaseConfig::default())
    }
}

impl<'r> Recaser<'r> {
    /// Creates a recaser over `registry`.
    #[must_use]
    pub const fn new(registry: &'r Registry, config: RecaseConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the registry this recaser searches.
    #[must_use]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Returns the settings.
    #[must_use]
    pub const fn config(&self) -> &RecaseConfig {
        &self.config
    }

    /// Returns the best-matching template for `raw`, with its parse result.
    #[must_use]
    pub fn best_match(&self, raw: &str) -> Option<(&'r IdentifierTemplate, ParseResult)> {
        let prefer_unscoped = self.config.prefer_unscoped();
        let mut candidates: Vec<_> = self
            .registry
            .matches(raw, ParseMode::Insensitive)
            .into_iter()
            .filter(|(template, _)| template.static_count() > 0)
            .collect();

        candidates.sort_by_key(|(template, _)| {
            (
                prefer_unscoped && template.has_scope(),
                Reverse(template.static_count()),
                Reverse(template.segments().len()),
                template.type_name(),
            )
        });

        tracing::trace!(
            candidates = ?candidates.iter().map(|(t, _)| t.type_name()).collect::<Vec<_>>(),
            "ranked recasing candidates"
        );

        candidates.into_iter().next()
    }

    /// Re-renders `raw` in canonical case using the best-matching template.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoMatchingTemplate`] if no template matches and
    /// fallback recasing is disabled.
    pub fn normalize(&self, raw: &str) -> Result<String, ParseError> {
        if let Some((template, result)) = self.best_match(raw) {
            tracing::debug!(type_name = template.type_name(), "normalized identifier case");
            return Ok(self.render(template, &result));
        }

        if self.config.fallback_recasing() && !raw.trim_matches('/').is_empty() {
            tracing::debug!("no template matched, recasing keywords only");
            return Ok(recase_keywords(raw));
        }

        Err(ParseError::NoMatchingTemplate {
            input: raw.to_string(),
        })
    }

    /// Re-renders `raw` in canonical case using the template named `type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownIdType`] if `type_name` is not registered,
    /// or the template's parse error if `raw` does not match it.
    pub fn normalize_with_hint(&self, raw: &str, type_name: &str) -> Result<String, ParseError> {
        let template = self
            .registry
            .get(type_name)
            .ok_or_else(|| ParseError::UnknownIdType {
                type_name: type_name.to_string(),
            })?;
        let result = Parser::new(template).parse(raw, ParseMode::Insensitive)?;
        Ok(self.render(template, &result))
    }

    /// Like [`normalize_with_hint`](Self::normalize_with_hint), with a validated type name.
    ///
    /// # Errors
    ///
    /// See [`normalize_with_hint`](Self::normalize_with_hint).
    pub fn normalize_as(&self, raw: &str, type_name: &TypeName) -> Result<String, ParseError> {
        self.normalize_with_hint(raw, type_name.as_str())
    }

    /// Formats `result` with each scope value normalized in turn.
    ///
    /// A scope is strictly shorter than the identifier that contains it, so
    /// the recursion terminates.
    fn render(&self, template: &IdentifierTemplate, result: &ParseResult) -> String {
        let values: Vec<String> = template
            .captured_segments()
            .map(|segment| {
                let value = result.get(segment.name()).unwrap_or_default();
                if segment.is_scope() {
                    self.normalize(value)
                        .unwrap_or_else(|_| recase_keywords(value))
                } else {
                    value.to_string()
                }
            })
            .collect();
        format_id(template, values.iter().map(String::as_str))
    }

    /// Parses a typed record using the configured default mode.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `raw` does not match `T`'s template.
    pub fn parse<T: ResourceId>(&self, raw: &str) -> Result<T, ParseError> {
        T::parse_with_mode(raw, self.config.default_mode())
    }
}

/// Rewrites the well-known keywords to canonical case, leaving everything else.
fn recase_keywords(raw: &str) -> String {
    raw.split('/')
        .map(|component| {
            KEYWORDS
                .iter()
                .find(|keyword| eq_fold(keyword, component))
                .copied()
                .unwrap_or(component)
        })
        .collect::<Vec<_>>()
        .join("/")
}

// Verify Recaser is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Recaser<'static>>();
};
