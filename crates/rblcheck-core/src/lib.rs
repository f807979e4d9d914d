//! Core types for DNS blackhole list (DNSBL) lookups.
//!
//! This crate provides the foundational pieces shared by the resolver
//! client and the command-line front end:
//!
//! - **Address reversal**: [`reverse`] turns `1.2.3.4` into `4.3.2.1`, the
//!   form DNSBL zones are indexed by
//! - **Types**: [`ZoneName`], [`LookupOutcome`] and [`ZoneReport`]
//! - **Catalog**: the compiled-in list of well-known zones in [`catalog`]
//! - **Errors**: [`RblError`] separates "not listed" from real failures
//!
//! # Example
//!
//! ```rust
//! use rblcheck_core::{build_query_name, ZoneName};
//!
//! let zone = ZoneName::new("zen.spamhaus.org").unwrap();
//! let name = build_query_name("127.0.0.2".parse().unwrap(), &zone).unwrap();
//! assert_eq!(name, "2.0.0.127.zen.spamhaus.org");
//! ```

#![doc(html_root_url = "https://docs.rs/rblcheck-core/0.3.0")]

pub mod catalog;
mod error;
pub mod types;

pub use error::{RblError, Result};
pub use types::*;
