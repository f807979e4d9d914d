//! In-memory [`Resolve`] implementation for tests.
//!
//! Each zone is given a fixed [`ZoneBehavior`]; any query name under that
//! zone gets the same answer (the longest matching zone wins). Names under no configured zone answer
//! NXDOMAIN.

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use std::time::Duration;

use crate::resolver::{DnsFailure, FailureKind, Resolve};

/// How a scripted zone answers.
#[derive(Debug, Clone)]
pub enum ZoneBehavior {
    /// Always answers `127.0.0.2`, with these TXT records
    Listed(Vec<String>),
    /// Always answers `127.0.0.2`, but the TXT lookup fails
    ListedTextFails(FailureKind),
    /// Always answers NXDOMAIN
    NotFound,
    /// Host lookup fails
    Fails(FailureKind),
    /// Sleeps before answering NXDOMAIN
    Slow(Duration),
}

/// Scripted resolver keyed by zone.
#[derive(Debug, Default)]
pub struct StaticResolver {
    zones: HashMap<String, ZoneBehavior>,
    queries: Mutex<Vec<String>>,
}

impl StaticResolver {
    /// Create a resolver where every name is NXDOMAIN
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the answers for `zone`
    #[must_use]
    pub fn zone(mut self, zone: &str, behavior: ZoneBehavior) -> Self {
        self.zones
            .insert(zone.trim_end_matches('.').to_ascii_lowercase(), behavior);
        self
    }

    /// Every lookup performed so far, as `"A name"` or `"TXT name"`
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    fn record(&self, kind: &str, name: &str) {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(format!("{kind} {name}"));
        }
    }

    fn behavior_for(&self, name: &str) -> Option<&ZoneBehavior> {
        let name = name.trim_end_matches('.').to_ascii_lowercase();
        self.zones
            .iter()
            .filter(|(zone, _)| name.ends_with(&format!(".{zone}")))
            .max_by_key(|(zone, _)| zone.len())
            .map(|(_, behavior)| behavior)
    }
}

#[async_trait]
impl Resolve for StaticResolver {
    async fn resolve_host(&self, name: &str) -> Result<Vec<IpAddr>, DnsFailure> {
        self.record("A", name);
        match self.behavior_for(name) {
            Some(ZoneBehavior::Listed(_) | ZoneBehavior::ListedTextFails(_)) => {
                Ok(vec![IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2))])
            }
            Some(ZoneBehavior::Fails(kind)) => {
                Err(DnsFailure::new(*kind, format!("scripted failure for {name}")))
            }
            Some(ZoneBehavior::Slow(delay)) => {
                tokio::time::sleep(*delay).await;
                Err(DnsFailure::not_found(name))
            }
            Some(ZoneBehavior::NotFound) | None => Err(DnsFailure::not_found(name)),
        }
    }

    async fn resolve_text(&self, name: &str) -> Result<Vec<String>, DnsFailure> {
        self.record("TXT", name);
        match self.behavior_for(name) {
            Some(ZoneBehavior::Listed(records)) => {
                if records.is_empty() {
                    Err(DnsFailure::not_found(name))
                } else {
                    Ok(records.clone())
                }
            }
            Some(ZoneBehavior::ListedTextFails(kind)) => {
                Err(DnsFailure::new(*kind, format!("scripted TXT failure for {name}")))
            }
            _ => Err(DnsFailure::not_found(name)),
        }
    }
}
