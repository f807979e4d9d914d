//! Address reversal for DNSBL query names.
//!
//! DNSBL zones index addresses by their reversed octets: checking
//! `1.2.3.4` against `bl.example.org` queries `4.3.2.1.bl.example.org`.

use std::net::{IpAddr, Ipv4Addr};

use crate::{RblError, Result, ZoneName};

/// Reverse the octets of an IPv4 address.
///
/// `64.233.171.108` becomes `108.171.233.64`. IPv4-mapped IPv6 addresses
/// (`::ffff:a.b.c.d`) are unwrapped first. Returns `None` for any other
/// IPv6 address, since reversal is only defined for four octets.
#[must_use]
pub fn reverse(addr: IpAddr) -> Option<Ipv4Addr> {
    let v4 = match addr {
        IpAddr::V4(v4) => v4,
        IpAddr::V6(v6) => v6.to_ipv4_mapped()?,
    };
    let [a, b, c, d] = v4.octets();
    Some(Ipv4Addr::new(d, c, b, a))
}

/// Parse a textual address into something [`reverse`] accepts.
///
/// Surrounding whitespace is ignored. Anything that is not an IPv4 address
/// (or an IPv4-mapped IPv6 one) is rejected with
/// [`RblError::InvalidAddress`].
pub fn parse_address(raw: &str) -> Result<IpAddr> {
    let trimmed = raw.trim();
    let addr: IpAddr = trimmed
        .parse()
        .map_err(|_| RblError::InvalidAddress(trimmed.to_string()))?;
    if reverse(addr).is_none() {
        return Err(RblError::InvalidAddress(trimmed.to_string()));
    }
    Ok(addr)
}

/// Build the DNSBL query name for an address under a zone.
///
/// Example: `1.2.3.4` under `bl.example.org` -> `"4.3.2.1.bl.example.org"`
pub fn build_query_name(addr: IpAddr, zone: &ZoneName) -> Result<String> {
    let reversed = reverse(addr).ok_or_else(|| RblError::InvalidAddress(addr.to_string()))?;
    Ok(format!("{reversed}.{zone}"))
}
