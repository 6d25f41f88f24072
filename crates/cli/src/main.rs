mod manifest_commands;

use std::{path::PathBuf, process::ExitCode};

use {
    anyhow::Context,
    clap::{Parser, Subcommand},
    tracing::debug,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "skillpack", about = "Generate and validate skills manifests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Repository root holding the skills directory (defaults to the current directory).
    #[arg(long, global = true, env = "SKILLPACK_ROOT")]
    root: Option<PathBuf>,

    /// Manifest path (overrides config value).
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Write the manifest from the current skills directory.
    Generate,
    /// Check the manifest against the skills directory, ignoring timestamps.
    Validate,
}

/// Initialise tracing on stderr so stdout only carries the command report.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    debug!(version = env!("CARGO_PKG_VERSION"), "skillpack starting");

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let config = skillpack_config::load_from_root(&root)?;
    let manifest_path = cli
        .manifest
        .unwrap_or_else(|| config.manifest_path(&root));

    match cli.command {
        Commands::Generate => {
            manifest_commands::handle_generate(&root, &config, &manifest_path)?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::Validate => {
            if manifest_commands::handle_validate(&root, &config, &manifest_path)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
