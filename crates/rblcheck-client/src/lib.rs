//! Async DNSBL lookup engine.
//!
//! [`Checker`] answers "is this address listed on that zone?" for one zone
//! or a whole catalog at once. DNS access goes through the [`Resolve`]
//! trait; [`HickoryResolver`] is the production implementation.
//!
//! ```rust,ignore
//! use rblcheck_client::Checker;
//!
//! let checker = Checker::from_system()?;
//! let outcome = checker.lookup("zen.spamhaus.org", "127.0.0.2").await?;
//! println!("listed: {}", outcome.is_listed());
//! ```

#![doc(html_root_url = "https://docs.rs/rblcheck-client/0.3.0")]

mod checker;
mod config;
mod hickory;
mod resolver;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use checker::Checker;
pub use config::{CheckerConfig, DEFAULT_TIMEOUT};
pub use hickory::HickoryResolver;
pub use resolver::{DnsFailure, FailureKind, Resolve};
pub use rblcheck_core::{LookupOutcome, RblError, Result, ZoneName, ZoneReport};
