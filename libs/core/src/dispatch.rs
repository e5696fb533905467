use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tracing::info;

use crate::command::Command;
use crate::credentials::{Credentials, DeviceId};
use crate::endpoint::{Endpoint, build};

/// Host-side facility that opens a deep link (widget host, OS link opener, ...).
///
/// Whether the companion application actually handled the link is not observable here.
pub trait LinkDispatcher {
    fn dispatch(&self, endpoint: &Endpoint) -> Result<()>;
}

/// Builds the endpoint for `command` and hands it to `dispatcher` exactly once.
pub fn dispatch_command<D: LinkDispatcher + ?Sized>(
    dispatcher: &D,
    scheme: &str,
    command: Command,
    credentials: &Credentials,
    device_id: &DeviceId,
) -> Result<Endpoint> {
    let endpoint = build(scheme, command, credentials, device_id)?;
    dispatcher.dispatch(&endpoint)?;
    info!(%command, device_id = %device_id, "dispatched doorlock command");
    Ok(endpoint)
}

/// Keeps every dispatched endpoint in memory instead of opening it.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<Endpoint>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoints dispatched so far, oldest first.
    pub fn dispatched(&self) -> Vec<Endpoint> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl LinkDispatcher for RecordingDispatcher {
    fn dispatch(&self, endpoint: &Endpoint) -> Result<()> {
        self.sent
            .lock()
            .map_err(|_| anyhow!("recording dispatcher lock poisoned"))?
            .push(endpoint.clone());
        Ok(())
    }
}
