use serde_json::Value;
use crate::store::Credential;

pub const REDACTED: &str = "[REDACTED]";

/// A copy of `credential` with the password masked. A null password is kept
/// so output still shows that none is stored.
pub fn redact_password(credential: &Credential) -> Credential {
    let password = if credential.password.is_null() {
        Value::Null
    } else {
        Value::String(REDACTED.to_string())
    };
    Credential {
        username: credential.username.clone(),
        password,
    }
}
