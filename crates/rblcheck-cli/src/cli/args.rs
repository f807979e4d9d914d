//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Check IPv4 addresses against DNS blackhole lists (DNSBL/RBL)
///
/// Each list is a DNS zone: the address is listed when the zone has a
/// record for its reversed octets. Use --explain on any command to see
/// the queries being made.
#[derive(Parser, Debug)]
#[command(name = "rblcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, env = "RBLCHECK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Per-list deadline in seconds (0 disables it)
    #[arg(long, env = "RBLCHECK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of lists queried at once
    #[arg(long, env = "RBLCHECK_CONCURRENCY", global = true)]
    pub concurrency: Option<usize>,

    /// Nameserver to query instead of the system resolver (repeatable)
    #[arg(
        long = "nameserver",
        env = "RBLCHECK_NAMESERVERS",
        value_delimiter = ',',
        global = true
    )]
    pub nameservers: Vec<IpAddr>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check one address against one list
    Check(CheckArgs),

    /// Check one address against every known list (or the ones given)
    Scan(ScanArgs),

    /// Print the built-in catalog of lists
    Lists,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Check command
// ============================================================================

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// IPv4 address to check
    pub ip: String,

    /// DNSBL zone to query (e.g. zen.spamhaus.org)
    pub zone: String,
}

// ============================================================================
// Scan command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// IPv4 address to check
    pub ip: String,

    /// Zones to query instead of the catalog (comma-separated or repeated)
    #[arg(short, long = "zone", value_delimiter = ',')]
    pub zones: Vec<String>,

    /// Only show lists the address is on (and lists that failed)
    #[arg(long)]
    pub listed_only: bool,

    /// Exit with status 2 if any list has the address
    #[arg(long)]
    pub fail_on_listed: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (output, timeout, concurrency, nameservers, zones)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_scan_zones() {
        let cli = Cli::parse_from([
            "rblcheck",
            "scan",
            "127.0.0.2",
            "--zone",
            "a.test,b.test",
            "-z",
            "c.test",
            "--nameserver",
            "1.1.1.1",
        ]);
        assert_eq!(cli.nameservers, vec!["1.1.1.1".parse::<IpAddr>().unwrap()]);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.ip, "127.0.0.2");
                assert_eq!(args.zones, vec!["a.test", "b.test", "c.test"]);
                assert!(!args.listed_only);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_check() {
        let cli = Cli::parse_from(["rblcheck", "-o", "json", "check", "127.0.0.2", "bl.spamcop.net"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Check(CheckArgs { ref zone, .. }) if zone == "bl.spamcop.net"));
    }
}
