//! Compiled-in catalog of well-known DNS blackhole lists.

/// Well-known DNSBL zones checked by a full scan.
const BLACKLISTS: &[&str] = &[
    "aspews.ext.sorbs.net",
    "b.barracudacentral.org",
    "bl.deadbeef.com",
    "bl.emailbasura.org",
    "bl.spamcannibal.org",
    "bl.spamcop.net",
    "blackholes.five-ten-sg.com",
    "blacklist.woody.ch",
    "bogons.cymru.com",
    "cbl.abuseat.org",
    "cdl.anti-spam.org.cn",
    "combined.abuse.ch",
    "combined.rbl.msrbl.net",
    "db.wpbl.info",
    "dnsbl-1.uceprotect.net",
    "dnsbl-2.uceprotect.net",
    "dnsbl-3.uceprotect.net",
    "dnsbl.cyberlogic.net",
    "dnsbl.dronebl.org",
    "dnsbl.inps.de",
    "dnsbl.njabl.org",
    "dnsbl.sorbs.net",
    "drone.abuse.ch",
    "duinv.aupads.org",
    "dul.dnsbl.sorbs.net",
    "dul.ru",
    "dyna.spamrats.com",
    "dynip.rothen.com",
    "http.dnsbl.sorbs.net",
    "images.rbl.msrbl.net",
    "ips.backscatterer.org",
    "ix.dnsbl.manitu.net",
    "korea.services.net",
    "misc.dnsbl.sorbs.net",
    "noptr.spamrats.com",
    "ohps.dnsbl.net.au",
    "omrs.dnsbl.net.au",
    "orvedb.aupads.org",
    "osps.dnsbl.net.au",
    "osrs.dnsbl.net.au",
    "owfs.dnsbl.net.au",
    "owps.dnsbl.net.au",
    "phishing.rbl.msrbl.net",
    "probes.dnsbl.net.au",
    "proxy.bl.gweep.ca",
    "proxy.block.transip.nl",
    "psbl.surriel.com",
    "rdts.dnsbl.net.au",
    "relays.bl.gweep.ca",
    "relays.bl.kundenserver.de",
    "relays.nether.net",
    "residential.block.transip.nl",
    "ricn.dnsbl.net.au",
    "rmst.dnsbl.net.au",
    "short.rbl.jp",
    "smtp.dnsbl.sorbs.net",
    "socks.dnsbl.sorbs.net",
    "spam.abuse.ch",
    "spam.dnsbl.sorbs.net",
    "spam.rbl.msrbl.net",
    "spam.spamrats.com",
    "spamlist.or.kr",
    "spamrbl.imp.ch",
    "t3direct.dnsbl.net.au",
    "tor.dnsbl.sectoor.de",
    "torserver.tor.dnsbl.sectoor.de",
    "ubl.lashback.com",
    "ubl.unsubscore.com",
    "virbl.bit.nl",
    "virus.rbl.jp",
    "virus.rbl.msrbl.net",
    "web.dnsbl.sorbs.net",
    "wormrbl.imp.ch",
    "zen.spamhaus.org",
    "zombie.dnsbl.sorbs.net",
    "cidr.bl.mcafee.com",
];

/// The zones a full scan checks, in catalog order.
#[must_use]
pub const fn blacklists() -> &'static [&'static str] {
    BLACKLISTS
}

/// Returns true if `zone` is in the catalog (case-insensitive, trailing dot ignored).
#[must_use]
pub fn is_known(zone: &str) -> bool {
    let zone = zone.trim().trim_end_matches('.');
    BLACKLISTS.iter().any(|known| known.eq_ignore_ascii_case(zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZoneName;
    use std::collections::HashSet;

    #[test]
    fn catalog_entries_are_valid_zones() {
        for zone in blacklists() {
            assert!(ZoneName::new(*zone).is_ok(), "bad catalog entry {zone}");
        }
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let unique: HashSet<_> = blacklists().iter().collect();
        assert_eq!(unique.len(), blacklists().len());
        assert_eq!(blacklists().len(), 76);
    }

    #[test]
    fn known_zones() {
        assert!(is_known("zen.spamhaus.org"));
        assert!(is_known("ZEN.spamhaus.org."));
        assert!(!is_known("bl.example.invalid"));
    }
}
