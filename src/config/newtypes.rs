//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated identifier type name, such as `ResourceGroup`.
///
/// Type names key the [`Registry`](crate::Registry). They must be non-empty
/// and contain only ASCII letters and digits.
///
/// # Serialization
///
/// `TypeName` serializes to and deserializes from its plain string:
///
/// ```rust
/// use resource_ids::TypeName;
///
/// let name = TypeName::new("VirtualMachine").unwrap();
/// let json = serde_json::to_string(&name).unwrap();
/// assert_eq!(json, r#""VirtualMachine""#);
///
/// let result: Result<TypeName, _> = serde_json::from_str(r#""virtual machine""#);
/// assert!(result.is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName(String);

impl TypeName {
    /// Creates a new validated type name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTypeName`] if the name is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidTypeName { name });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TypeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TypeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
