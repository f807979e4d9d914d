//! `rblcheck check` - Check one address against one list.

use anyhow::Result;
use rblcheck_core::{parse_address, ZoneName};
use std::process::ExitCode;

use super::Context;
use crate::cli::args::CheckArgs;
use crate::education::Explain;
use crate::output::render_outcome;

pub async fn execute(ctx: Context, args: CheckArgs) -> Result<ExitCode> {
    if ctx.explain {
        Explain::check(&args.ip, &args.zone).print();
    }

    // Bad input is reported before any resolver is set up
    let target = parse_address(&args.ip).and_then(|addr| Ok((addr, ZoneName::new(&args.zone)?)));
    let (address, zone) = match target {
        Ok(target) => target,
        Err(err) => return Ok(lookup_failed(&err)),
    };

    let checker = ctx.checker()?;
    match checker.check(&zone, address).await {
        Ok(outcome) => {
            println!(
                "{}",
                render_outcome(ctx.output_format, &args.ip, zone.as_str(), &outcome, ctx.color())?
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(lookup_failed(&err)),
    }
}

fn lookup_failed(err: &dyn std::fmt::Display) -> ExitCode {
    eprintln!("Failed to lookup IP for RBL: {err}");
    ExitCode::FAILURE
}
