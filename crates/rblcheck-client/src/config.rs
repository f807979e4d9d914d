//! Lookup engine configuration.

use std::net::IpAddr;
use std::time::Duration;

/// Default per-zone deadline
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for a [`Checker`](crate::Checker)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Deadline for one zone's lookup (host plus text). `None` waits as
    /// long as the resolver does.
    pub timeout: Option<Duration>,

    /// Maximum zones queried at once during a scan. `None` queries every
    /// zone at once.
    pub concurrency: Option<usize>,

    /// Nameservers to query instead of the system configuration
    pub nameservers: Vec<IpAddr>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckerConfig {
    /// Create a configuration with a 5 second deadline and unbounded fan-out
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            concurrency: None,
            nameservers: Vec::new(),
        }
    }

    /// Set the per-zone deadline
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Remove the per-zone deadline
    #[must_use]
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Limit how many zones are queried at once (minimum 1)
    #[must_use]
    pub fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = Some(limit.max(1));
        self
    }

    /// Query these nameservers instead of the system ones
    #[must_use]
    pub fn nameservers(mut self, servers: impl IntoIterator<Item = IpAddr>) -> Self {
        self.nameservers = servers.into_iter().collect();
        self
    }

    /// Effective number of concurrent lookups for a scan of `zones` zones
    #[must_use]
    pub fn permits_for(&self, zones: usize) -> usize {
        self.concurrency.unwrap_or(zones).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
        assert_eq!(config.concurrency, None);
        assert!(config.nameservers.is_empty());
    }

    #[test]
    fn permits() {
        let config = CheckerConfig::new();
        assert_eq!(config.permits_for(76), 76);
        assert_eq!(config.permits_for(0), 1);

        let config = CheckerConfig::new().concurrency(0);
        assert_eq!(config.concurrency, Some(1));
        assert_eq!(config.permits_for(76), 1);

        let config = CheckerConfig::new().concurrency(10);
        assert_eq!(config.permits_for(76), 10);
    }

    #[test]
    fn builder() {
        let config = CheckerConfig::new()
            .timeout(Duration::from_millis(1500))
            .nameservers(["9.9.9.9".parse().unwrap()]);
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(config.nameservers.len(), 1);
        assert_eq!(CheckerConfig::new().no_timeout().timeout, None);
    }
}
