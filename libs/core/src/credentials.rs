use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "***";

/// API key and secret key forwarded to the companion application.
///
/// Values are opaque. They are encoded for transport but never checked for correctness, and an
/// empty value is as valid as any other.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Copy safe to print: a non-empty secret key is replaced by `***`.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret_key: redact(&self.secret_key).to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &redact(&self.secret_key))
            .finish()
    }
}

fn redact(value: &str) -> &str {
    if value.is_empty() { value } else { REDACTED }
}

/// Opaque identifier of the lock device a command targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret_key() {
        let creds = Credentials::new("key-1", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("key-1"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn redacted_keeps_empty_secret_empty() {
        let creds = Credentials::new("", "");
        assert_eq!(creds.redacted(), creds);
        assert_eq!(
            Credentials::new("a", "b").redacted(),
            Credentials::new("a", "***")
        );
    }

    #[test]
    fn device_id_is_transparent_in_json() {
        let id = DeviceId::new("front-door");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"front-door\"");
        assert_eq!(id.to_string(), "front-door");
    }
}
