use std::time::Duration;
use thiserror::Error;

/// Result type alias for RBL operations
pub type Result<T> = std::result::Result<T, RblError>;

/// Errors that can occur while checking an address against a blackhole list.
///
/// An address that simply isn't listed is not an error: it comes back as a
/// [`LookupOutcome`](crate::LookupOutcome) with `listed == false`.
#[derive(Error, Debug)]
pub enum RblError {
    /// Input is not a 4-octet IPv4 address
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    /// Zone name is empty
    #[error("invalid zone name: {0:?}")]
    InvalidZone(String),

    /// Host or text resolution failed for a reason other than "not found"
    #[error("DNS resolution of {name} failed: {message}")]
    Resolution {
        /// Fully-qualified query name
        name: String,
        /// Underlying cause reported by the resolver
        message: String,
    },

    /// The caller's deadline expired before the zone answered
    #[error("lookup against {zone} timed out after {timeout:?}")]
    Timeout {
        /// Zone that did not answer in time
        zone: String,
        /// Deadline that was applied
        timeout: Duration,
    },

    /// Resolver could not be constructed
    #[error("resolver setup failed: {0}")]
    Resolver(String),

    /// Lookup task panicked or was cancelled
    #[error("internal error: {0}")]
    Internal(String),
}
