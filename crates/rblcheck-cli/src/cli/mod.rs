//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use rblcheck_client::CheckerConfig;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), "loaded configuration");

    // Flags (and their env vars) win over the config file
    let output_format = cli.output.or(config.output_format).unwrap_or_default();
    let checker = checker_config(
        cli.timeout.or(config.timeout_secs),
        cli.concurrency.or(config.concurrency),
        if cli.nameservers.is_empty() {
            config.nameservers.clone()
        } else {
            cli.nameservers
        },
    );

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        explain: cli.explain,
        no_color: cli.no_color,
        checker,
        extra_zones: config.zones,
        config_path,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Check(args) => commands::check::execute(ctx, args).await,
        Commands::Scan(args) => commands::scan::execute(ctx, args).await,
        Commands::Lists => commands::lists::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when run() is driven from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn checker_config(
    timeout_secs: Option<u64>,
    concurrency: Option<usize>,
    nameservers: Vec<std::net::IpAddr>,
) -> CheckerConfig {
    let mut config = CheckerConfig::new().nameservers(nameservers);
    match timeout_secs {
        Some(0) => config = config.no_timeout(),
        Some(secs) => config = config.timeout(Duration::from_secs(secs)),
        None => {}
    }
    if let Some(limit) = concurrency {
        config = config.concurrency(limit);
    }
    config
}
