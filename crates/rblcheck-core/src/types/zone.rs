use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{RblError, Result};

/// A DNS zone publishing one blackhole list, e.g. `zen.spamhaus.org`.
///
/// The only validation is that the name is not blank. A trailing dot is
/// stripped so that query names can be built by plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneName(String);

impl ZoneName {
    /// Create a zone name, rejecting empty input
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return Err(RblError::InvalidZone(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The zone as a string slice, without trailing dot
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZoneName {
    type Err = RblError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ZoneName {
    type Error = RblError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ZoneName> for String {
    fn from(zone: ZoneName) -> Self {
        zone.0
    }
}

impl AsRef<str> for ZoneName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
