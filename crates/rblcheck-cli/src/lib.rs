//! # rblcheck-cli
//!
//! Command-line front end for the `rblcheck` DNSBL lookup engine.
//!
//! ## Features
//!
//! - **Single zone**: `rblcheck check <IP> <ZONE>`
//! - **Catalog scan**: `rblcheck scan <IP>` queries every known list at once
//! - **Educational mode**: `--explain` describes the DNS queries being made
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
