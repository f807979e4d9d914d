//! The zone query engine and multi-zone fan-out.

use futures_util::future::join_all;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::hickory::HickoryResolver;
use crate::resolver::Resolve;
use rblcheck_core::{
    build_query_name, catalog, parse_address, LookupOutcome, RblError, Result, ZoneName,
    ZoneReport,
};

/// Checks addresses against DNS blackhole lists.
///
/// Holds no per-lookup state, so one checker can serve any number of
/// concurrent queries. Cloning is cheap.
#[derive(Clone)]
pub struct Checker {
    resolver: Arc<dyn Resolve>,
    config: CheckerConfig,
}

impl std::fmt::Debug for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Checker {
    /// Create a checker using the system resolver and default settings
    pub fn from_system() -> Result<Self> {
        Self::from_config(CheckerConfig::default())
    }

    /// Create a checker from configuration, picking the resolver it names
    pub fn from_config(config: CheckerConfig) -> Result<Self> {
        let resolver = if config.nameservers.is_empty() {
            HickoryResolver::from_system()?
        } else {
            HickoryResolver::with_nameservers(&config.nameservers)?
        };
        Ok(Self::with_resolver(resolver, config))
    }

    /// Create a checker over any [`Resolve`] implementation
    #[must_use]
    pub fn with_resolver(resolver: impl Resolve + 'static, config: CheckerConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Parse `raw_ip` and `zone`, then [`check`](Self::check) the zone,
    /// so the configured deadline applies.
    pub async fn lookup(&self, zone: &str, raw_ip: &str) -> Result<LookupOutcome> {
        let address = parse_address(raw_ip)?;
        let zone = ZoneName::new(zone)?;
        self.check(&zone, address).await
    }

    /// Query one zone, applying the configured deadline.
    pub async fn check(&self, zone: &ZoneName, address: IpAddr) -> Result<LookupOutcome> {
        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.query(zone, address))
                .await
                .map_err(|_| RblError::Timeout {
                    zone: zone.to_string(),
                    timeout: limit,
                })?,
            None => self.query(zone, address).await,
        }
    }

    /// Query one zone with no deadline of its own.
    ///
    /// A missing host record means "not listed". Once listed, the TXT
    /// record is fetched for an explanation; a missing or transiently
    /// unavailable TXT record leaves the explanation empty rather than
    /// failing the lookup.
    pub async fn query(&self, zone: &ZoneName, address: IpAddr) -> Result<LookupOutcome> {
        let name = build_query_name(address, zone)?;
        debug!(%zone, %address, name = %name, "querying blackhole list");

        let hosts = match self.resolver.resolve_host(&name).await {
            Ok(hosts) => hosts,
            Err(failure) if failure.is_not_found() => Vec::new(),
            Err(failure) => {
                return Err(RblError::Resolution {
                    name,
                    message: failure.message,
                })
            }
        };

        if hosts.is_empty() {
            debug!(%zone, %address, "not listed");
            return Ok(LookupOutcome::not_listed());
        }

        let text = match self.resolver.resolve_text(&name).await {
            Ok(records) => records.into_iter().next(),
            Err(failure) if failure.is_not_found() => None,
            Err(failure) if failure.is_non_fatal() => {
                warn!(name = %name, error = %failure, "listed, but TXT lookup failed");
                None
            }
            Err(failure) => {
                return Err(RblError::Resolution {
                    name,
                    message: format!("looking up TXT record: {}", failure.message),
                })
            }
        };

        debug!(%zone, %address, ?hosts, "listed");
        Ok(LookupOutcome::listed(text))
    }

    /// Query every zone for `address` concurrently.
    ///
    /// Reports come back in the same order as `zones`. A zone that fails
    /// carries its error in [`ZoneReport::error`] and does not affect the
    /// others. Only an address that can't be reversed fails the whole call.
    pub async fn check_all(&self, zones: &[ZoneName], address: IpAddr) -> Result<Vec<ZoneReport>> {
        if rblcheck_core::reverse(address).is_none() {
            return Err(RblError::InvalidAddress(address.to_string()));
        }

        let semaphore = Arc::new(Semaphore::new(self.config.permits_for(zones.len())));

        let handles = zones.iter().cloned().map(|zone| {
            let sem = Arc::clone(&semaphore);
            let checker = self.clone();
            tokio::spawn(async move {
                let _permit = sem
                    .acquire_owned()
                    .await
                    .map_err(|e| RblError::Internal(e.to_string()))?;
                checker.check(&zone, address).await
            })
        });

        let results = join_all(handles).await;

        let reports: Vec<ZoneReport> = zones
            .iter()
            .zip(results)
            .map(|(zone, joined)| {
                let result = joined.unwrap_or_else(|e| Err(RblError::Internal(e.to_string())));
                if let Err(err) = &result {
                    debug!(%zone, %address, error = %err, "blackhole list lookup failed");
                }
                ZoneReport::from_result(zone.clone(), address, result)
            })
            .collect();

        Ok(reports)
    }

    /// Query every zone in the built-in catalog for `address`.
    pub async fn check_catalog(&self, address: IpAddr) -> Result<Vec<ZoneReport>> {
        let zones = catalog::blacklists()
            .iter()
            .map(|zone| ZoneName::new(*zone))
            .collect::<Result<Vec<_>>>()?;
        self.check_all(&zones, address).await
    }
}
