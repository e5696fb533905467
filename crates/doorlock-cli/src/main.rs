use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use doorlock_core::{Command, Endpoint, build, dispatch_command};
use doorlock_widget::{WidgetConfig, WidgetFamily, WidgetModel};
use tracing::info;

mod opener;

use opener::SystemOpener;

fn main() -> Result<()> {
    let cli = Cli::parse();
    doorlock_telemetry::install()?;
    match cli.command {
        CliCommand::Link { command } => handle_link(&cli.config, command),
        CliCommand::Open { command } => handle_open(&cli.config, command),
        CliCommand::Widget { family } => handle_widget(&cli.config, family),
        CliCommand::Decode { uri, show_secret } => handle_decode(&uri, show_secret),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "doorlock",
    version,
    about = "Build and open Doorlock lock/unlock deep links"
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(subcommand)]
    command: CliCommand,
}

/// Values layered on top of the config file and `DOORLOCK_*` environment variables.
#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// YAML file with scheme, api_key, secret_key and device_id.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// URI scheme of the companion application.
    #[arg(long, global = true)]
    scheme: Option<String>,
    #[arg(long, global = true)]
    api_key: Option<String>,
    #[arg(long, global = true)]
    secret_key: Option<String>,
    #[arg(long, global = true)]
    device_id: Option<String>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print the deep link for a command
    Link {
        #[arg(value_enum)]
        command: CommandArg,
    },
    /// Hand the deep link to the system link opener
    Open {
        #[arg(value_enum)]
        command: CommandArg,
    },
    /// Print the widget content (glyph, buttons and their links) as JSON
    Widget {
        #[arg(long, value_enum, default_value_t = FamilyArg::Medium)]
        family: FamilyArg,
    },
    /// Decode a deep link the way the companion application reads it
    Decode {
        uri: String,
        /// Print the secret key instead of masking it.
        #[arg(long)]
        show_secret: bool,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CommandArg {
    Lock,
    Unlock,
}

impl From<CommandArg> for Command {
    fn from(value: CommandArg) -> Self {
        match value {
            CommandArg::Lock => Command::Lock,
            CommandArg::Unlock => Command::Unlock,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FamilyArg {
    Small,
    Medium,
    Large,
}

impl From<FamilyArg> for WidgetFamily {
    fn from(value: FamilyArg) -> Self {
        match value {
            FamilyArg::Small => WidgetFamily::SystemSmall,
            FamilyArg::Medium => WidgetFamily::SystemMedium,
            FamilyArg::Large => WidgetFamily::SystemLarge,
        }
    }
}

/// File first, then environment, then flags.
fn resolve_config(args: &ConfigArgs) -> Result<WidgetConfig> {
    let file = match &args.config {
        Some(path) => WidgetConfig::from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => WidgetConfig::default(),
    };
    let flags = WidgetConfig {
        scheme: args.scheme.clone(),
        api_key: args.api_key.clone(),
        secret_key: args.secret_key.clone(),
        device_id: args.device_id.clone(),
    };
    Ok(file.merge(WidgetConfig::from_env()).merge(flags))
}

fn handle_link(args: &ConfigArgs, command: CommandArg) -> Result<()> {
    let config = resolve_config(args)?;
    let endpoint = build(
        config.scheme(),
        command.into(),
        &config.credentials(),
        &config.device_id(),
    )
    .context("cannot build doorlock link")?;
    println!("{endpoint}");
    Ok(())
}

fn handle_open(args: &ConfigArgs, command: CommandArg) -> Result<()> {
    let config = resolve_config(args)?;
    let opener = SystemOpener::from_env();
    let endpoint = dispatch_command(
        &opener,
        config.scheme(),
        command.into(),
        &config.credentials(),
        &config.device_id(),
    )
    .context("cannot open doorlock link")?;
    info!(scheme = config.scheme(), len = endpoint.as_str().len(), "link handed to opener");
    Ok(())
}

fn handle_widget(args: &ConfigArgs, family: FamilyArg) -> Result<()> {
    let config = resolve_config(args)?;
    let model = WidgetModel::new(&config, family.into()).context("cannot render widget")?;
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}

fn handle_decode(uri: &str, show_secret: bool) -> Result<()> {
    let mut parsed = Endpoint::parse(uri).context("not a doorlock link")?;
    if !show_secret {
        parsed.credentials = parsed.credentials.redacted();
    }
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
