use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::{RblError, ZoneName};

/// Result of checking one address against one zone.
///
/// `text` is only ever present on a listed outcome; the constructors are
/// the only way to build one, so the two fields cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOutcome {
    listed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl LookupOutcome {
    /// The zone has no record for the address
    #[must_use]
    pub const fn not_listed() -> Self {
        Self { listed: false, text: None }
    }

    /// The zone lists the address, optionally with a TXT explanation.
    ///
    /// Blank text is treated as no text.
    #[must_use]
    pub fn listed(text: Option<String>) -> Self {
        Self {
            listed: true,
            text: text.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Whether the address appears in the zone
    #[must_use]
    pub const fn is_listed(&self) -> bool {
        self.listed
    }

    /// TXT explanation published alongside the listing, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Per-zone line of a multi-zone scan.
///
/// A zone that failed to answer carries its error message instead of
/// aborting the rest of the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneReport {
    /// Zone that was queried
    pub zone: ZoneName,
    /// Address that was checked
    pub address: IpAddr,
    /// Whether the address is listed (false when `error` is set)
    pub listed: bool,
    /// TXT explanation, if the zone published one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Why the lookup failed, if it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ZoneReport {
    /// Build a report from the result of a single zone query
    #[must_use]
    pub fn from_result(
        zone: ZoneName,
        address: IpAddr,
        result: std::result::Result<LookupOutcome, RblError>,
    ) -> Self {
        match result {
            Ok(outcome) => Self {
                zone,
                address,
                listed: outcome.listed,
                text: outcome.text,
                error: None,
            },
            Err(err) => Self {
                zone,
                address,
                listed: false,
                text: None,
                error: Some(err.to_string()),
            },
        }
    }

    /// Returns true if the lookup for this zone failed
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
