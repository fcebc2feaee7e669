//! Polymorphic payloads discriminated by a `type` field.
//!
//! API payloads embed secrets either inline or as a reference to a key
//! vault. The variant is chosen by the object's `type` string. Types this
//! crate does not know are kept as [`SecretReference::Unknown`] so a payload
//! can be decoded and re-encoded without losing anything.
//!
//! # Example
//!
//! ```rust
//! use resource_ids::payload::SecretReference;
//!
//! let secret: SecretReference = serde_json::from_str(
//!     r#"{"type": "SecureString", "value": "hunter2"}"#,
//! )
//! .unwrap();
//! assert_eq!(secret.kind(), "SecureString");
//!
//! let other: SecretReference = serde_json::from_str(
//!     r#"{"type": "ManagedHsmSecret", "hsm": "h1"}"#,
//! )
//! .unwrap();
//! assert!(other.is_unknown());
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const TYPE_FIELD: &str = "type";

/// A reference to a linked service holding secrets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedServiceReference {
    /// Always `LinkedServiceReference` on the wire.
    #[serde(rename = "type", default = "LinkedServiceReference::default_type")]
    pub kind: String,
    /// The linked service name.
    pub reference_name: String,
    /// Arguments passed to the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
}

impl LinkedServiceReference {
    /// Creates a reference to the named linked service.
    #[must_use]
    pub fn new(reference_name: impl Into<String>) -> Self {
        Self {
            kind: Self::default_type(),
            reference_name: reference_name.into(),
            parameters: None,
        }
    }

    fn default_type() -> String {
        "LinkedServiceReference".to_string()
    }
}

/// A secret, either inline or held in a key vault.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretReference {
    /// A secret value carried inline.
    SecureString {
        /// The secret value.
        value: String,
    },
    /// A secret stored in a key vault behind a linked service.
    AzureKeyVaultSecret {
        /// The linked service holding the vault.
        store: LinkedServiceReference,
        /// The secret's name.
        secret_name: String,
        /// The secret's version; the latest when absent.
        secret_version: Option<String>,
    },
    /// A type this crate does not model.
    Unknown {
        /// The `type` discriminant.
        kind: String,
        /// The remaining fields, verbatim.
        properties: Map<String, Value>,
    },
}

impl SecretReference {
    /// Returns the wire discriminant.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::SecureString { .. } => "SecureString",
            Self::AzureKeyVaultSecret { .. } => "AzureKeyVaultSecret",
            Self::Unknown { kind, .. } => kind,
        }
    }

    /// Returns true for types this crate does not model.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert(TYPE_FIELD.to_string(), Value::String(self.kind().to_string()));
        match self {
            Self::SecureString { value } => {
                object.insert("value".to_string(), Value::String(value.clone()));
            }
            Self::AzureKeyVaultSecret {
                store,
                secret_name,
                secret_version,
            } => {
                // LinkedServiceReference holds only strings and JSON maps
                let store = serde_json::to_value(store).unwrap_or(Value::Null);
                object.insert("store".to_string(), store);
                object.insert("secretName".to_string(), Value::String(secret_name.clone()));
                if let Some(version) = secret_version {
                    object.insert("secretVersion".to_string(), Value::String(version.clone()));
                }
            }
            Self::Unknown { properties, .. } => {
                for (key, value) in properties {
                    object.insert(key.clone(), value.clone());
                }
            }
        }
        object
    }

    fn from_object(mut object: Map<String, Value>) -> Result<Self, String> {
        let kind = match object.remove(TYPE_FIELD) {
            Some(Value::String(kind)) => kind,
            Some(other) => return Err(format!("expected \"type\" to be a string, got {other}")),
            None => return Err("missing field `type`".to_string()),
        };

        match kind.as_str() {
            "SecureString" => {
                let value = take_string(&mut object, "value")?
                    .ok_or_else(|| "missing field `value`".to_string())?;
                Ok(Self::SecureString { value })
            }
            "AzureKeyVaultSecret" => {
                let store = object
                    .remove("store")
                    .ok_or_else(|| "missing field `store`".to_string())?;
                let store = serde_json::from_value(store).map_err(|e| format!("store: {e}"))?;
                let secret_name = take_string(&mut object, "secretName")?
                    .ok_or_else(|| "missing field `secretName`".to_string())?;
                let secret_version = take_string(&mut object, "secretVersion")?;
                Ok(Self::AzureKeyVaultSecret {
                    store,
                    secret_name,
                    secret_version,
                })
            }
            _ => {
                tracing::debug!(kind = %kind, "decoded unknown secret reference type");
                Ok(Self::Unknown {
                    kind,
                    properties: object,
                })
            }
        }
    }
}

fn take_string(object: &mut Map<String, Value>, key: &str) -> Result<Option<String>, String> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(format!("expected {key:?} to be a string, got {other}")),
    }
}

impl fmt::Debug for SecretReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecureString { .. } => f
                .debug_struct("SecureString")
                .field("value", &"*****")
                .finish(),
            Self::AzureKeyVaultSecret {
                store,
                secret_name,
                secret_version,
            } => f
                .debug_struct("AzureKeyVaultSecret")
                .field("store", store)
                .field("secret_name", secret_name)
                .field("secret_version", secret_version)
                .finish(),
            Self::Unknown { kind, properties } => f
                .debug_struct("Unknown")
                .field("kind", kind)
                .field("properties", properties)
                .finish(),
        }
    }
}

impl Serialize for SecretReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::deserialize(deserializer)?;
        Self::from_object(object).map_err(de::Error::custom)
    }
}
