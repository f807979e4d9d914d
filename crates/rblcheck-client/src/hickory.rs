//! [`Resolve`] implementation backed by hickory-resolver.

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::Name;
use hickory_resolver::proto::{ProtoError, ProtoErrorKind};
use hickory_resolver::{ResolveError, ResolveErrorKind, TokioResolver};
use std::net::IpAddr;
use tracing::debug;

use crate::resolver::{DnsFailure, FailureKind, Resolve};
use rblcheck_core::{RblError, Result};

/// DNS resolver using the system configuration or explicit nameservers.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HickoryResolver {
    inner: TokioResolver,
}

impl std::fmt::Debug for HickoryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HickoryResolver").finish_non_exhaustive()
    }
}

impl HickoryResolver {
    /// Create a resolver from `/etc/resolv.conf` (or the platform equivalent).
    pub fn from_system() -> Result<Self> {
        let inner = TokioResolver::builder_tokio()
            .map_err(|e| RblError::Resolver(format!("failed to read system DNS config: {e}")))?
            .build();
        Ok(Self { inner })
    }

    /// Create a resolver that only talks to `servers` over UDP/TCP port 53.
    pub fn with_nameservers(servers: &[IpAddr]) -> Result<Self> {
        Self::with_nameservers_on_port(servers, 53)
    }

    /// Create a resolver that only talks to `servers` on `port`.
    pub fn with_nameservers_on_port(servers: &[IpAddr], port: u16) -> Result<Self> {
        if servers.is_empty() {
            return Err(RblError::Resolver("no nameservers given".to_string()));
        }
        let group = NameServerConfigGroup::from_ips_clear(servers, port, true);
        let config = ResolverConfig::from_parts(None, Vec::new(), group);
        let inner =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default()).build();
        Ok(Self { inner })
    }
}

#[async_trait]
impl Resolve for HickoryResolver {
    /// DNSBL zones answer with A records only. A plain A query keeps a
    /// failed lookup from being retried as AAAA, whose NXDOMAIN would
    /// otherwise hide the failure.
    async fn resolve_host(&self, name: &str) -> std::result::Result<Vec<IpAddr>, DnsFailure> {
        let fqdn = fqdn(name)?;
        debug!(name, "resolving A");
        let lookup = self.inner.ipv4_lookup(fqdn).await.map_err(|e| classify(&e))?;
        Ok(lookup.iter().map(|a| IpAddr::V4(a.0)).collect())
    }

    async fn resolve_text(&self, name: &str) -> std::result::Result<Vec<String>, DnsFailure> {
        let fqdn = fqdn(name)?;
        debug!(name, "resolving TXT");
        let lookup = self.inner.txt_lookup(fqdn).await.map_err(|e| classify(&e))?;

        Ok(lookup
            .iter()
            .map(|txt| {
                txt.iter()
                    .map(|data| String::from_utf8_lossy(data).to_string())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect())
    }
}

/// Parse a query name and mark it absolute so search domains aren't tried.
fn fqdn(name: &str) -> std::result::Result<Name, DnsFailure> {
    let mut parsed = Name::from_ascii(name)
        .map_err(|e| DnsFailure::new(FailureKind::Fatal, format!("malformed name {name}: {e}")))?;
    parsed.set_fqdn(true);
    Ok(parsed)
}

/// Map a hickory error onto not-found / transient / fatal.
fn classify(err: &ResolveError) -> DnsFailure {
    let kind = match err.kind() {
        ResolveErrorKind::Proto(proto) => classify_proto(proto),
        _ => FailureKind::Fatal,
    };
    DnsFailure::new(kind, err.to_string())
}

fn classify_proto(err: &ProtoError) -> FailureKind {
    match err.kind() {
        ProtoErrorKind::NoRecordsFound { response_code, .. } => classify_rcode(*response_code),
        ProtoErrorKind::Timeout
        | ProtoErrorKind::Busy
        | ProtoErrorKind::NoConnections
        | ProtoErrorKind::Io(_) => FailureKind::Transient,
        _ => FailureKind::Fatal,
    }
}

/// Negative answers carry the server's response code; only NXDOMAIN and an
/// empty NOERROR mean the record is absent.
const fn classify_rcode(code: ResponseCode) -> FailureKind {
    match code {
        ResponseCode::NoError | ResponseCode::NXDomain => FailureKind::NotFound,
        ResponseCode::ServFail => FailureKind::Transient,
        _ => FailureKind::Fatal,
    }
}
