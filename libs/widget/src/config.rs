//! Widget configuration: every field is optional, and absent values fall back to empty
//! strings (credentials, device) or the companion app scheme.
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use doorlock_core::{Credentials, DeviceId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scheme registered by the Doorlock companion application.
pub const DEFAULT_SCHEME: &str = "com.kishikawakatsumi.Doorlock";

pub const SCHEME_ENV: &str = "DOORLOCK_SCHEME";
pub const API_KEY_ENV: &str = "DOORLOCK_API_KEY";
pub const SECRET_KEY_ENV: &str = "DOORLOCK_SECRET_KEY";
pub const DEVICE_ID_ENV: &str = "DOORLOCK_DEVICE_ID";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid widget config")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_bw::Error,
    },
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetConfig {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
}

impl std::fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("scheme", &self.scheme)
            .field("api_key", &self.api_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("device_id", &self.device_id)
            .finish()
    }
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the `DOORLOCK_*` variables through `lookup`. Empty variables count as set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            scheme: lookup(SCHEME_ENV),
            api_key: lookup(API_KEY_ENV),
            secret_key: lookup(SECRET_KEY_ENV),
            device_id: lookup(DEVICE_ID_ENV),
        }
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, serde_yaml_bw::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_bw::from_str(raw)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded widget config");
        Ok(config)
    }

    /// Layers `overrides` on top of `self`; any value present in `overrides` wins.
    pub fn merge(self, overrides: WidgetConfig) -> Self {
        Self {
            scheme: overrides.scheme.or(self.scheme),
            api_key: overrides.api_key.or(self.api_key),
            secret_key: overrides.secret_key.or(self.secret_key),
            device_id: overrides.device_id.or(self.device_id),
        }
    }

    pub fn scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.api_key.clone().unwrap_or_default(),
            self.secret_key.clone().unwrap_or_default(),
        )
    }

    pub fn device_id(&self) -> DeviceId {
        DeviceId::new(self.device_id.clone().unwrap_or_default())
    }
}
