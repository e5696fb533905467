use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Action requested from the companion application.
///
/// The lowercase name is the path segment of the endpoint, so it is part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Lock,
    Unlock,
}

impl Command {
    /// Every command, in the order the widget presents them.
    pub const ALL: [Command; 2] = [Command::Lock, Command::Unlock];

    pub fn as_str(self) -> &'static str {
        match self {
            Command::Lock => "lock",
            Command::Unlock => "unlock",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = BuildError;

    /// Exact, case-sensitive match on the path literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lock" => Ok(Command::Lock),
            "unlock" => Ok(Command::Unlock),
            other => Err(BuildError::InvalidCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_literals() {
        assert_eq!("lock".parse::<Command>(), Ok(Command::Lock));
        assert_eq!("unlock".parse::<Command>(), Ok(Command::Unlock));
    }

    #[test]
    fn rejects_unknown_and_mixed_case() {
        for input in ["toggle", "Lock", "UNLOCK", "", " lock"] {
            assert_eq!(
                input.parse::<Command>(),
                Err(BuildError::InvalidCommand(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_matches_serde_name() {
        for command in Command::ALL {
            let json = serde_json::to_string(&command).unwrap();
            assert_eq!(json, format!("\"{command}\""));
            let back: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(back, command);
        }
    }
}
