use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// Record field names used by the document format.
pub const KEY_NAME: &str = "Name";
pub const KEY_VALUE: &str = "Value";
pub const KEY_USERNAME: &str = "Username";
pub const KEY_PASSWORD: &str = "Password";
pub const KEY_CERT_PATH: &str = "CertPath";
pub const KEY_CONNECTION_FIELDS: &str = "ValueFields";

/// The asset kinds a document can hold, one top-level key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Variable,
    Credential,
    Connection,
    Certificate,
}

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::Variable,
        AssetType::Credential,
        AssetType::Connection,
        AssetType::Certificate,
    ];

    /// The top-level document key for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Variable => "Variable",
            AssetType::Credential => "Credential",
            AssetType::Connection => "Connection",
            AssetType::Certificate => "Certificate",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown asset type '{}', expected one of: variable, credential, connection, certificate",
                    s
                )
            })
    }
}

/// A credential asset reshaped for callers. Fields are passed through as
/// stored; the password is never shown by `Debug`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub username: Value,
    pub password: Value,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
