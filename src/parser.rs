//! Parsing identifier strings against a template.
//!
//! The [`Parser`] walks a template's segments left to right, consuming the
//! slash-separated components of the input in lock-step. Scope segments are
//! the exception: they consume a variable-length run of components.
//!
//! # Parse Modes
//!
//! - [`ParseMode::Strict`] requires static segments to match exactly. Use it
//!   for identifiers authored by users.
//! - [`ParseMode::Insensitive`] compares static and constant segments without
//!   regard to case. Use it for identifiers returned by the remote API, which
//!   are frequently inconsistent (`resourcegroups` vs `resourceGroups`).
//!
//! # Example
//!
//! ```rust
//! use resource_ids::{IdentifierTemplate, ParseMode, Parser, Segment};
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
//! let parser = Parser::new(&RESOURCE_GROUP);
//! let result = parser
//!     .parse("/subscriptions/1234/resourcegroups/rg1", ParseMode::Insensitive)
//!     .unwrap();
//! assert_eq!(result.get("resourceGroupName"), Some("rg1"));
//!
//! assert!(parser
//!     .parse("/subscriptions/1234/resourcegroups/rg1", ParseMode::Strict)
//!     .is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParseError};
use crate::formatter::format_id;
use crate::segment::Segment;
use crate::template::IdentifierTemplate;

/// How static and constant segments are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Literals must match exactly.
    #[default]
    Strict,
    /// Literals match regardless of case.
    Insensitive,
}

impl ParseMode {
    /// Returns the mode name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Insensitive => "insensitive",
        }
    }

    /// Returns true if `actual` matches the declared `expected` literal.
    #[must_use]
    pub fn matches(&self, expected: &str, actual: &str) -> bool {
        match self {
            Self::Strict => expected == actual,
            Self::Insensitive => eq_fold(expected, actual),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "insensitive" => Ok(Self::Insensitive),
            _ => Err(ConfigError::InvalidParseMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Unicode case-insensitive string comparison.
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// The values captured by a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    raw_input: String,
    parsed: HashMap<&'static str, String>,
}

impl ParseResult {
    /// Returns the input the result was parsed from.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Returns the captured value for a segment.
    #[must_use]
    pub fn get(&self, segment_name: &str) -> Option<&str> {
        self.parsed.get(segment_name).map(String::as_str)
    }

    /// Returns the captured value for a segment, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SegmentNotSpecified`] if nothing was captured
    /// under `segment_name`.
    pub fn require(
        &self,
        id_type: &'static str,
        segment_name: &'static str,
    ) -> Result<&str, ParseError> {
        self.get(segment_name)
            .ok_or(ParseError::SegmentNotSpecified {
                id_type,
                segment_name,
            })
    }

    /// Returns all captured values keyed by segment name.
    #[must_use]
    pub const fn parsed(&self) -> &HashMap<&'static str, String> {
        &self.parsed
    }

    /// Consumes the result, returning the captured values.
    #[must_use]
    pub fn into_parsed(self) -> HashMap<&'static str, String> {
        self.parsed
    }

    /// Renders the canonical identifier for these values.
    #[must_use]
    pub fn format(&self, template: &IdentifierTemplate) -> String {
        format_id(
            template,
            template
                .captured_segments()
                .map(|s| self.get(s.name()).unwrap_or_default()),
        )
    }
}

/// Parses identifier strings against one template.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'t> {
    template: &'t IdentifierTemplate,
}

impl<'t> Parser<'t> {
    /// Creates a parser for `template`.
    #[must_use]
    pub const fn new(template: &'t IdentifierTemplate) -> Self {
        Self { template }
    }

    /// Returns the template this parser matches against.
    #[must_use]
    pub const fn template(&self) -> &'t IdentifierTemplate {
        self.template
    }

    /// Parses `input`, returning the captured values.
    ///
    /// Errors are reported in positional order: the first segment that fails
    /// to match determines the error.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input does not match the template.
    pub fn parse(&self, input: &str, mode: ParseMode) -> Result<ParseResult, ParseError> {
        let components = split_components(input)?;
        let segments = self.template.segments();
        let mut parsed = HashMap::with_capacity(segments.len());
        let mut pos = 0;

        for (index, segment) in segments.iter().enumerate() {
            if let Segment::Scope { name } = segment {
                let take = self.scope_length(index, &components[pos..], mode)?;
                let run = &components[pos..pos + take];
                parsed.insert(*name, format!("/{}", run.join("/")));
                pos += take;
                continue;
            }

            let Some(component) = components.get(pos).copied() else {
                return Err(ParseError::SegmentNotSpecified {
                    id_type: self.template.display_name(),
                    segment_name: segment.name(),
                });
            };

            match segment {
                Segment::Static { name, value } => {
                    if !mode.matches(value, component) {
                        return Err(ParseError::StaticSegmentMismatch {
                            segment_name: *name,
                            expected: *value,
                            actual: component.to_string(),
                        });
                    }
                }
                Segment::Constant { name, values } => {
                    let Some(value) = values.iter().find(|v| mode.matches(v, component)) else {
                        return Err(ParseError::ConstantSegmentMismatch {
                            segment_name: *name,
                            allowed: *values,
                            actual: component.to_string(),
                        });
                    };
                    parsed.insert(*name, (*value).to_string());
                }
                other => {
                    parsed.insert(other.name(), component.to_string());
                }
            }
            pos += 1;
        }

        if pos < components.len() {
            return Err(ParseError::TrailingInput {
                remaining: components[pos..].join("/"),
            });
        }

        Ok(ParseResult {
            raw_input: input.to_string(),
            parsed,
        })
    }

    /// Works out how many components the scope at `index` consumes.
    fn scope_length(
        &self,
        index: usize,
        remaining: &[&str],
        mode: ParseMode,
    ) -> Result<usize, ParseError> {
        let segments = self.template.segments();
        let segment_name = segments[index].name();
        let rest = &segments[index + 1..];
        let too_short = ParseError::ScopeTooShort { segment_name };

        if !rest.iter().any(Segment::is_scope) {
            // The rest of the template is fixed width, so the scope takes
            // whatever is left over.
            let counted = remaining.len().checked_sub(rest.len()).filter(|&take| take > 0);

            if rest.is_empty() {
                if remaining.last().is_some_and(|c| c.is_empty()) {
                    return Err(ParseError::TrailingInput {
                        remaining: String::new(),
                    });
                }
                return counted.ok_or(too_short);
            }

            if !rest.iter().any(Segment::is_static) {
                return counted.ok_or(too_short);
            }

            if let Some(take) =
                counted.filter(|&take| anchors_fit(rest, remaining, take, mode, false))
            {
                tracing::trace!(segment = segment_name, components = take, "resolved scope");
                return Ok(take);
            }

            // Too many or too few components. Line the anchors up so the walk
            // reports the trailing or missing segment.
            let aligned = (1..remaining.len())
                .rev()
                .find(|&take| anchors_fit(rest, remaining, take, mode, false))
                .or_else(|| {
                    (1..remaining.len())
                        .rev()
                        .find(|&take| anchors_fit(rest, remaining, take, mode, true))
                });

            return match aligned.or(counted) {
                Some(take) => {
                    tracing::trace!(
                        segment = segment_name,
                        components = take,
                        "resolved scope at anchor"
                    );
                    Ok(take)
                }
                None => Err(too_short),
            };
        }

        // Another scope follows, so stop at the first place the next static
        // anchor matches.
        let Some((gap, anchor)) = rest.iter().enumerate().find_map(|(i, s)| match s {
            Segment::Static { value, .. } => Some((i, *value)),
            _ => None,
        }) else {
            return Err(too_short);
        };

        (1..remaining.len())
            .take_while(|take| take + gap < remaining.len())
            .find(|take| mode.matches(anchor, remaining[take + gap]))
            .map(|take| {
                tracing::trace!(segment = segment_name, components = take, "resolved scope at anchor");
                take
            })
            .ok_or(too_short)
    }
}

/// Returns true if the static segments of `rest` match the components that
/// follow a scope of `take` components.
///
/// With `partial`, statics past the end of the input are ignored, as long as
/// at least one static is in range.
fn anchors_fit(
    rest: &[Segment],
    remaining: &[&str],
    take: usize,
    mode: ParseMode,
    partial: bool,
) -> bool {
    let mut in_range = false;
    for (offset, segment) in rest.iter().enumerate() {
        let Segment::Static { value, .. } = segment else {
            continue;
        };
        match remaining.get(take + offset) {
            Some(component) if mode.matches(value, component) => in_range = true,
            Some(_) => return false,
            None if partial => {}
            None => return false,
        }
    }
    in_range
}

fn split_components(input: &str) -> Result<Vec<&str>, ParseError> {
    let trimmed = input.strip_prefix('/').unwrap_or(input);
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(trimmed.split('/').collect())
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParseMode>();
    assert_send_sync::<ParseResult>();
    assert_send_sync::<Parser<'static>>();
};
