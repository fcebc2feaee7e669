//! # Resource IDs
//!
//! Declarative parsing, formatting and recasing of hierarchical Azure
//! Resource Manager identifiers such as
//! `/subscriptions/{id}/resourceGroups/{name}/providers/Microsoft.Web/sites/{site}`.
//!
//! ## Overview
//!
//! This crate provides:
//! - Identifier templates declared as const data via [`IdentifierTemplate`] and [`Segment`]
//! - A [`Parser`] with strict and case-insensitive modes ([`ParseMode`])
//! - A formatter producing the canonical string ([`format_id`])
//! - Typed records via the [`ResourceId`] trait and [`define_resource_id!`]
//! - Ready-made records for common resources in [`commonids`]
//! - A [`Registry`] of known templates and case normalization via [`normalize_case`]
//! - A key/value parser for untyped identifiers in [`legacy`]
//! - Type-discriminated secret payloads in [`payload`]
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_ids::commonids::CdnOriginGroupId;
//! use resource_ids::ResourceId;
//!
//! let id = CdnOriginGroupId::parse_insensitively(
//!     "/subscriptions/1234/resourcegroups/rg/providers/Microsoft.Cdn/profiles/p/endpoints/e/originGroups/og",
//! )
//! .unwrap();
//!
//! assert_eq!(id.origin_group_name(), "og");
//! assert_eq!(
//!     id.id(),
//!     "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.CDN/profiles/p/endpoints/e/originGroups/og"
//! );
//! ```
//!
//! ## Declaring Identifier Types
//!
//! ```rust
//! use resource_ids::{define_resource_id, ResourceId, Segment};
//!
//! define_resource_id! {
//!     /// A scoped management lock.
//!     pub struct ScopedLockId {
//!         type_name: "ScopedLock",
//!         display_name: "Scoped Lock",
//!         segments: [
//!             Segment::scope("scope"),
//!             Segment::static_segment("staticProviders", "providers"),
//!             Segment::static_segment("staticMicrosoftAuthorization", "Microsoft.Authorization"),
//!             Segment::static_segment("staticLocks", "locks"),
//!             Segment::user_specified("lockName", "lockValue"),
//!         ],
//!         fields: {
//!             scope => "scope",
//!             lock_name => "lockName",
//!         },
//!     }
//! }
//!
//! let id = ScopedLockId::parse(
//!     "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.Authorization/locks/lock1",
//! )
//! .unwrap();
//! assert_eq!(id.scope(), "/subscriptions/1234/resourceGroups/rg");
//! assert_eq!(id.lock_name(), "lock1");
//! ```
//!
//! ## Normalizing Case
//!
//! ```rust
//! use resource_ids::normalize_case;
//!
//! let id = normalize_case("/subscriptions/1234/RESOURCEGROUPS/rg").unwrap();
//! assert_eq!(id, "/subscriptions/1234/resourceGroups/rg");
//! ```
//!
//! ## Design Principles
//!
//! - **Templates are data**: one generic parser and formatter serve every type
//! - **Explicit registration**: the global registry is built from one startup list
//! - **Fail-fast**: the first mismatching segment is reported; nothing is guessed
//! - **Thread-safe**: all types are `Send + Sync` and parsing has no side effects

pub mod commonids;
pub mod config;
pub mod error;
pub mod formatter;
pub mod legacy;
mod macros;
pub mod parser;
pub mod payload;
pub mod recase;
pub mod registry;
pub mod resource_id;
pub mod segment;
pub mod template;

// Re-export public types at crate root for convenience
pub use config::{RecaseConfig, RecaseConfigBuilder, TypeName};
pub use error::{ConfigError, ParseError, TemplateError};
pub use formatter::format_id;
pub use legacy::{AzureResourceId, LegacyIdError};
pub use parser::{ParseMode, ParseResult, Parser};
pub use payload::SecretReference;
pub use recase::{normalize_case, normalize_case_with_hint, Recaser};
pub use registry::Registry;
pub use resource_id::{
    describe_id, validate_resource_id, validate_resource_id_str, ResourceId, Validation,
};
pub use segment::{Segment, SegmentKind};
pub use template::IdentifierTemplate;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
