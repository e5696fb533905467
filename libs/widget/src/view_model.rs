use doorlock_core::{BuildError, Command, Endpoint, Scheme};
use serde::Serialize;
use tracing::warn;

use crate::config::WidgetConfig;
use crate::family::{DOORLOCK_WIDGET, WidgetFamily};

/// Template image drawn above the buttons.
pub const KEY_GLYPH: &str = "key-solid";

/// One tappable button; tapping hands `endpoint` to the host's link opener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonModel {
    pub command: Command,
    /// Empty in compact families, where only the icon is shown.
    pub label: String,
    pub system_image: &'static str,
    pub endpoint: Endpoint,
}

/// Content of the widget for one family: a glyph and the Lock and Unlock buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetModel {
    pub family: WidgetFamily,
    pub glyph: &'static str,
    pub buttons: [ButtonModel; 2],
}

impl WidgetModel {
    pub fn new(config: &WidgetConfig, family: WidgetFamily) -> Result<Self, BuildError> {
        if !DOORLOCK_WIDGET.supports(family) {
            warn!(%family, "rendering widget for an unregistered family");
        }
        let scheme = Scheme::parse(config.scheme())?;
        let credentials = config.credentials();
        let device_id = config.device_id();
        let button = |command: Command| ButtonModel {
            command,
            label: if family.is_compact() {
                String::new()
            } else {
                button_title(command).to_string()
            },
            system_image: button_image(command),
            endpoint: Endpoint::compose(&scheme, command, &credentials, &device_id),
        };

        Ok(Self {
            family,
            glyph: KEY_GLYPH,
            buttons: Command::ALL.map(button),
        })
    }

    pub fn button(&self, command: Command) -> Option<&ButtonModel> {
        self.buttons.iter().find(|b| b.command == command)
    }
}

pub fn button_title(command: Command) -> &'static str {
    match command {
        Command::Lock => "Lock",
        Command::Unlock => "Unlock",
    }
}

pub fn button_image(command: Command) -> &'static str {
    match command {
        Command::Lock => "lock.fill",
        Command::Unlock => "lock.open.fill",
    }
}
