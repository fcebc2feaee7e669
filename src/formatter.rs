//! Rendering identifiers to their canonical string.
//!
//! The formatter is the single source of truth for the canonical form of an
//! identifier: static segments are always rendered with their declared value,
//! whatever case the identifier was parsed from.

use crate::segment::Segment;
use crate::template::IdentifierTemplate;

/// Renders an identifier from the values of its captured segments.
///
/// `values` supplies one value per captured segment, in template order. A
/// scope value keeps or omits its leading and trailing `/` freely; the
/// formatter folds them into the separators. Missing trailing values render as
/// empty components.
///
/// # Example
///
/// ```rust
/// use resource_ids::{format_id, IdentifierTemplate, Segment};
///
/// const SUBSCRIPTION: IdentifierTemplate = IdentifierTemplate::new(
///     "Subscription",
///     "Subscription",
///     &[
///         Segment::static_segment("staticSubscriptions", "subscriptions"),
///         Segment::subscription_id("subscriptionId"),
///     ],
/// );
///
/// assert_eq!(format_id(&SUBSCRIPTION, ["1234"]), "/subscriptions/1234");
/// ```
pub fn format_id<'a, I>(template: &IdentifierTemplate, values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut values = values.into_iter();
    let mut out = String::new();

    for segment in template.segments() {
        out.push('/');
        match segment {
            Segment::Static { value, .. } => out.push_str(value),
            Segment::Scope { .. } => {
                let value = values.next().unwrap_or_default();
                let value = value.strip_prefix('/').unwrap_or(value);
                out.push_str(value.strip_suffix('/').unwrap_or(value));
            }
            _ => out.push_str(values.next().unwrap_or_default()),
        }
    }

    out
}
