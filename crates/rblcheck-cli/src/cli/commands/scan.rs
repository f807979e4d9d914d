//! `rblcheck scan` - Check one address against many lists at once.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rblcheck_core::{catalog, parse_address, ZoneName};
use std::collections::HashSet;
use std::process::ExitCode;
use std::time::Duration;
use tracing::warn;

use super::Context;
use crate::cli::args::ScanArgs;
use crate::education::Explain;
use crate::output::{render_reports, OutputFormat};

/// Exit status when `--fail-on-listed` is given and a list has the address.
const LISTED_EXIT: u8 = 2;

pub async fn execute(ctx: Context, args: ScanArgs) -> Result<ExitCode> {
    let address = match parse_address(&args.ip) {
        Ok(address) => address,
        Err(err) => {
            eprintln!("Failed to lookup IP for RBL: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let zones = select_zones(&args.zones, &ctx.extra_zones)?;
    for zone in unknown_zones(&zones) {
        warn!(%zone, "zone is not in the built-in catalog; check the spelling");
    }

    if ctx.explain {
        Explain::scan(&args.ip, zones.len()).print();
    }

    let checker = ctx.checker()?;

    let spinner = (ctx.output_format == OutputFormat::Pretty).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Querying {} lists for {address}...", zones.len()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let mut reports = checker.check_all(&zones, address).await?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let any_listed = reports.iter().any(|r| r.listed);

    if args.listed_only {
        reports.retain(|r| r.listed || r.is_error());
    }

    println!("{}", render_reports(ctx.output_format, &reports, ctx.color())?);

    if args.fail_on_listed && any_listed {
        Ok(ExitCode::from(LISTED_EXIT))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Zones given on the command line, or the catalog plus configured extras.
fn select_zones(requested: &[String], extra: &[String]) -> Result<Vec<ZoneName>> {
    let names: Vec<&str> = if requested.is_empty() {
        catalog::blacklists()
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str))
            .collect()
    } else {
        requested.iter().map(String::as_str).collect()
    };

    let mut seen = HashSet::new();
    let mut zones = Vec::with_capacity(names.len());
    for name in names {
        let zone = ZoneName::new(name)?;
        if seen.insert(zone.as_str().to_ascii_lowercase()) {
            zones.push(zone);
        }
    }
    Ok(zones)
}

/// Zones that aren't in the built-in catalog, usually typos in `--zone`.
fn unknown_zones(zones: &[ZoneName]) -> impl Iterator<Item = &ZoneName> {
    zones.iter().filter(|zone| !catalog::is_known(zone.as_str()))
}
