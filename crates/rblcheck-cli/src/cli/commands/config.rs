//! `rblcheck config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<ExitCode> {
    match args.command {
        ConfigCommands::Show => show_config(ctx)?,
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value)?,
        ConfigCommands::Path => println!("{}", ctx.config_path.display()),
    }
    Ok(ExitCode::SUCCESS)
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load_from(&ctx.config_path)?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        _ => {
            let unset = || "(not set)".dimmed().to_string();
            let list = |items: Vec<String>| {
                if items.is_empty() {
                    unset()
                } else {
                    items.join(", ")
                }
            };

            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!(
                "  {} {}",
                "timeout_secs:".bold(),
                config.timeout_secs.map_or_else(unset, |t| t.to_string())
            );
            println!(
                "  {} {}",
                "concurrency:".bold(),
                config.concurrency.map_or_else(unset, |c| c.to_string())
            );
            println!(
                "  {} {}",
                "nameservers:".bold(),
                list(config.nameservers.iter().map(ToString::to_string).collect())
            );
            println!("  {} {}", "zones:".bold(), list(config.zones.clone()));
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_from(&ctx.config_path)?;
    config.set(key, value)?;
    config.save_to(&ctx.config_path)?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}
