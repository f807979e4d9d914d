//! rblcheck - DNS blackhole list checker
//!
//! Looks up an IPv4 address on one or many DNSBL zones.

use anyhow::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    rblcheck_cli::run().await
}
