//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Per-list deadline in seconds.
    pub timeout_secs: Option<u64>,

    /// Maximum number of lists queried at once.
    pub concurrency: Option<usize>,

    /// Nameservers to use instead of the system resolver.
    #[serde(default)]
    pub nameservers: Vec<IpAddr>,

    /// Extra zones added to the built-in catalog for `scan`.
    #[serde(default)]
    pub zones: Vec<String>,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "rblcheck", "rblcheck")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the config path, preferring an explicit override.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        explicit.map_or_else(Self::path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration from a file, returning defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a key from its textual form, as given to `config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output" => {
                self.output_format = Some(value.parse()?);
            }
            "timeout_secs" | "timeout" => {
                self.timeout_secs = Some(value.parse().context("timeout must be whole seconds")?);
            }
            "concurrency" => {
                self.concurrency = Some(value.parse().context("concurrency must be a number")?);
            }
            "nameservers" => {
                self.nameservers = split_list(value)
                    .map(|s| s.parse().with_context(|| format!("invalid nameserver '{s}'")))
                    .collect::<Result<_>>()?;
            }
            "zones" => {
                self.zones = split_list(value).map(String::from).collect();
            }
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     output_format  - Default output format (pretty/json/csv/yaml)\n  \
                     timeout_secs   - Per-list deadline in seconds (0 disables)\n  \
                     concurrency    - Lists queried at once during a scan\n  \
                     nameservers    - Comma-separated nameserver IPs\n  \
                     zones          - Comma-separated extra zones for scan",
                    key
                );
            }
        }
        Ok(())
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}
