//! Command implementations.

pub mod check;
pub mod config;
pub mod lists;
pub mod scan;

use rblcheck_client::{Checker, CheckerConfig};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Disable colors
    pub no_color: bool,

    /// Lookup engine settings
    pub checker: CheckerConfig,

    /// Zones from the config file added to the catalog for scans
    pub extra_zones: Vec<String>,

    /// Config file in use
    pub config_path: PathBuf,
}

impl Context {
    /// Create a checker with the configured resolver and limits.
    pub fn checker(&self) -> anyhow::Result<Checker> {
        Ok(Checker::from_config(self.checker.clone())?)
    }

    /// Whether pretty output should use colors.
    pub const fn color(&self) -> bool {
        !self.no_color
    }
}
