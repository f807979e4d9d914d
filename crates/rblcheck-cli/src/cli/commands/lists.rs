//! `rblcheck lists` - Print the built-in catalog of lists.

use anyhow::Result;
use colored::Colorize;
use rblcheck_core::catalog;
use std::process::ExitCode;

use super::Context;
use crate::education::Explain;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context) -> Result<ExitCode> {
    if ctx.explain {
        Explain::lists().print();
    }

    let zones = catalog::blacklists();

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(zones)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(zones)?);
        }
        OutputFormat::Csv => {
            println!("zone");
            for zone in zones {
                println!("{zone}");
            }
        }
        OutputFormat::Pretty => {
            println!("{}", format!("Known lists ({}):", zones.len()).bold().underline());
            for zone in zones {
                println!("  {zone}");
            }
            if !ctx.extra_zones.is_empty() {
                println!();
                println!("{}", "From config:".bold().underline());
                for zone in &ctx.extra_zones {
                    println!("  {}", zone.cyan());
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
