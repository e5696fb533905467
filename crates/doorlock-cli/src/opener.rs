use std::env;
use std::process::{Command as ProcessCommand, Stdio};

use anyhow::{Context, Result, anyhow};
use doorlock_core::{Endpoint, LinkDispatcher};
use tracing::debug;

pub const DRY_RUN_ENV: &str = "DOORLOCK_DRY_RUN";

const NO_ARGS: &[&str] = &[];
// Avoids `cmd /C start`, which would split the link at `&`.
const WINDOWS_OPEN_ARGS: &[&str] = &["url.dll,FileProtocolHandler"];

/// Opens links with the platform's default handler, which routes custom schemes to the
/// application that registered them.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: &'static str,
    prefix_args: &'static [&'static str],
    dry_run: bool,
}

impl SystemOpener {
    pub fn from_env() -> Self {
        let value = env::var(DRY_RUN_ENV).ok();
        Self::for_current_platform(dry_run_enabled(value.as_deref()))
    }

    pub fn for_current_platform(dry_run: bool) -> Self {
        let (program, prefix_args) = if cfg!(target_os = "macos") {
            ("open", NO_ARGS)
        } else if cfg!(windows) {
            ("rundll32", WINDOWS_OPEN_ARGS)
        } else {
            ("xdg-open", NO_ARGS)
        };
        Self {
            program,
            prefix_args,
            dry_run,
        }
    }

    fn command_line(&self, endpoint: &Endpoint) -> String {
        let mut parts: Vec<&str> = vec![self.program];
        parts.extend(self.prefix_args.iter().copied());
        parts.push(endpoint.as_str());
        parts.join(" ")
    }
}

/// Any value other than an empty or false-like one turns dry run on.
fn dry_run_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off"
        )
    })
}

impl LinkDispatcher for SystemOpener {
    fn dispatch(&self, endpoint: &Endpoint) -> Result<()> {
        if self.dry_run {
            println!("(dry-run) {}", self.command_line(endpoint));
            return Ok(());
        }
        debug!(program = self.program, "opening doorlock link");
        let status = ProcessCommand::new(self.program)
            .args(self.prefix_args)
            .arg(endpoint.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to run {}", self.program))?;
        if status.success() {
            Ok(())
        } else {
            Err(anyhow!("{} exited with status {status}", self.program))
        }
    }
}
