//! The DNS capability the lookup engine depends on.

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use thiserror::Error;

/// How a DNS lookup failed.
///
/// DNSBLs answer "not listed" with NXDOMAIN, so telling a missing record
/// apart from a broken resolver is what keeps a failed lookup from being
/// reported as a clean address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// NXDOMAIN, or NOERROR with no matching records
    NotFound,
    /// Timeout, SERVFAIL, I/O or busy resolver; may succeed later
    Transient,
    /// Anything else (refused, malformed name, protocol error)
    Fatal,
}

/// A failed DNS lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DnsFailure {
    /// Classification of the failure
    pub kind: FailureKind,
    /// Resolver's description of what went wrong
    pub message: String,
}

impl DnsFailure {
    /// Create a failure of the given kind
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`FailureKind::NotFound`] failure
    #[must_use]
    pub fn not_found(name: &str) -> Self {
        Self::new(FailureKind::NotFound, format!("no records found for {name}"))
    }

    /// Returns true if the record simply doesn't exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, FailureKind::NotFound)
    }

    /// Returns true for failures that don't say anything about the record
    /// itself: missing records and transient resolver trouble.
    #[must_use]
    pub const fn is_non_fatal(&self) -> bool {
        matches!(self.kind, FailureKind::NotFound | FailureKind::Transient)
    }
}

/// Host and text record lookups.
///
/// Names passed in are fully qualified DNSBL query names such as
/// `2.0.0.127.zen.spamhaus.org`; implementations must not append search
/// domains to them.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolve a name to its addresses
    async fn resolve_host(&self, name: &str) -> Result<Vec<IpAddr>, DnsFailure>;

    /// Resolve a name's TXT records, one string per record
    async fn resolve_text(&self, name: &str) -> Result<Vec<String>, DnsFailure>;
}

#[async_trait]
impl<T: Resolve + ?Sized> Resolve for Arc<T> {
    async fn resolve_host(&self, name: &str) -> Result<Vec<IpAddr>, DnsFailure> {
        (**self).resolve_host(name).await
    }

    async fn resolve_text(&self, name: &str) -> Result<Vec<String>, DnsFailure> {
        (**self).resolve_text(name).await
    }
}
