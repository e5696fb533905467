use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Size classes a home-screen widget can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetFamily {
    SystemSmall,
    SystemMedium,
    SystemLarge,
}

impl WidgetFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetFamily::SystemSmall => "system_small",
            WidgetFamily::SystemMedium => "system_medium",
            WidgetFamily::SystemLarge => "system_large",
        }
    }

    /// Compact families show icon-only buttons.
    pub fn is_compact(self) -> bool {
        matches!(self, WidgetFamily::SystemSmall)
    }
}

impl fmt::Display for WidgetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown widget family {0:?}")]
pub struct UnknownFamily(pub String);

impl FromStr for WidgetFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system_small" | "small" => Ok(WidgetFamily::SystemSmall),
            "system_medium" | "medium" => Ok(WidgetFamily::SystemMedium),
            "system_large" | "large" => Ok(WidgetFamily::SystemLarge),
            other => Err(UnknownFamily(other.to_string())),
        }
    }
}

/// Static registration data the host shows in its widget gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
    pub kind: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub supported_families: &'static [WidgetFamily],
}

pub const DOORLOCK_WIDGET: WidgetDescriptor = WidgetDescriptor {
    kind: "DoorlockWidget",
    display_name: "Doorlock",
    description: "Configure your API key and device ID",
    supported_families: &[WidgetFamily::SystemMedium, WidgetFamily::SystemLarge],
};

impl WidgetDescriptor {
    pub fn supports(&self, family: WidgetFamily) -> bool {
        self.supported_families.contains(&family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_small_is_compact() {
        assert!(WidgetFamily::SystemSmall.is_compact());
        assert!(!WidgetFamily::SystemMedium.is_compact());
        assert!(!WidgetFamily::SystemLarge.is_compact());
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("small".parse(), Ok(WidgetFamily::SystemSmall));
        assert_eq!("system_large".parse(), Ok(WidgetFamily::SystemLarge));
        assert_eq!(
            "huge".parse::<WidgetFamily>(),
            Err(UnknownFamily("huge".into()))
        );
    }

    #[test]
    fn descriptor_registers_medium_and_large() {
        assert!(!DOORLOCK_WIDGET.supports(WidgetFamily::SystemSmall));
        assert!(DOORLOCK_WIDGET.supports(WidgetFamily::SystemMedium));
        assert!(DOORLOCK_WIDGET.supports(WidgetFamily::SystemLarge));
        assert_eq!(DOORLOCK_WIDGET.kind, "DoorlockWidget");
    }
}
