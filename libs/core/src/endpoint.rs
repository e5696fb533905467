//! Composition and decoding of companion-app deep links.
//!
//! The wire format is fixed by the companion application:
//!
//! ```text
//! <scheme>:///<command>?APIKey=<api key>&secretKey=<secret key>&deviceID=<device id>
//! ```
//!
//! All three parameters are always present, in this order, even when empty.
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::command::Command;
use crate::credentials::{Credentials, DeviceId};
use crate::error::{BuildError, EndpointParseError};
use crate::scheme::Scheme;

pub const API_KEY_PARAM: &str = "APIKey";
pub const SECRET_KEY_PARAM: &str = "secretKey";
pub const DEVICE_ID_PARAM: &str = "deviceID";

const AUTHORITY_SEPARATOR: &str = ":///";

/// A fully composed deep link, ready for a [`crate::LinkDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    /// Composes the link for an already validated scheme. Never fails.
    pub fn compose(
        scheme: &Scheme,
        command: Command,
        credentials: &Credentials,
        device_id: &DeviceId,
    ) -> Self {
        let uri = format!(
            "{scheme}{AUTHORITY_SEPARATOR}{command}?{API_KEY_PARAM}={}&{SECRET_KEY_PARAM}={}&{DEVICE_ID_PARAM}={}",
            urlencoding::encode(&credentials.api_key),
            urlencoding::encode(&credentials.secret_key),
            urlencoding::encode(device_id.as_str()),
        );
        debug!(
            scheme = %scheme,
            command = %command,
            device_id = %device_id,
            "built doorlock endpoint"
        );
        Self(uri)
    }

    /// Decodes a link produced by [`build`]; this is what the companion application reads.
    pub fn parse(uri: &str) -> Result<ParsedEndpoint, EndpointParseError> {
        let (scheme, rest) = uri
            .split_once(AUTHORITY_SEPARATOR)
            .ok_or(EndpointParseError::MissingSeparator)?;
        let scheme = Scheme::parse(scheme)?;
        // Encoded values never contain a raw `#`, so anything after it is a fragment.
        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let command = path.parse::<Command>()?;

        let mut api_key = None;
        let mut secret_key = None;
        let mut device_id = None;
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (slot, param) = match name {
                API_KEY_PARAM => (&mut api_key, API_KEY_PARAM),
                SECRET_KEY_PARAM => (&mut secret_key, SECRET_KEY_PARAM),
                DEVICE_ID_PARAM => (&mut device_id, DEVICE_ID_PARAM),
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode(param, value)?);
            }
        }

        Ok(ParsedEndpoint {
            scheme: scheme.as_str().to_string(),
            command,
            credentials: Credentials {
                api_key: api_key.ok_or(EndpointParseError::MissingParameter(API_KEY_PARAM))?,
                secret_key: secret_key
                    .ok_or(EndpointParseError::MissingParameter(SECRET_KEY_PARAM))?,
            },
            device_id: DeviceId::new(
                device_id.ok_or(EndpointParseError::MissingParameter(DEVICE_ID_PARAM))?,
            ),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The parts recovered from a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEndpoint {
    pub scheme: String,
    pub command: Command,
    pub credentials: Credentials,
    pub device_id: DeviceId,
}

/// Builds the deep link for `command`.
///
/// Fails only when `scheme` is not a valid URI scheme. Credentials and device id are encoded
/// as given, so absent configuration shows up as empty query values.
pub fn build(
    scheme: &str,
    command: Command,
    credentials: &Credentials,
    device_id: &DeviceId,
) -> Result<Endpoint, BuildError> {
    let scheme = Scheme::parse(scheme)?;
    Ok(Endpoint::compose(&scheme, command, credentials, device_id))
}

/// Same as [`build`] for a command supplied as text. The scheme is checked first.
pub fn build_named(
    scheme: &str,
    command: &str,
    credentials: &Credentials,
    device_id: &DeviceId,
) -> Result<Endpoint, BuildError> {
    let scheme = Scheme::parse(scheme)?;
    let command = command.parse::<Command>()?;
    Ok(Endpoint::compose(&scheme, command, credentials, device_id))
}

fn decode(param: &'static str, value: &str) -> Result<String, EndpointParseError> {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| EndpointParseError::InvalidEncoding(param))
}
