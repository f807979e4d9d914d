use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use rblcheck_client::testing::{StaticResolver, ZoneBehavior};
use rblcheck_client::{Checker, CheckerConfig, FailureKind, RblError, ZoneName};
use rblcheck_core::catalog;
use tokio_test::{assert_err, assert_ok};

fn test_ip() -> IpAddr {
    "127.0.0.2".parse().unwrap()
}

fn zone(name: &str) -> ZoneName {
    ZoneName::new(name).unwrap()
}

fn checker(resolver: StaticResolver) -> (Checker, Arc<StaticResolver>) {
    let resolver = Arc::new(resolver);
    let checker = Checker::with_resolver(Arc::clone(&resolver), CheckerConfig::default());
    (checker, resolver)
}

#[tokio::test]
async fn listed_zone_reports_listed() {
    let (checker, _) = checker(
        StaticResolver::new().zone("always.listed.test", ZoneBehavior::Listed(vec![])),
    );

    let outcome = assert_ok!(checker.query(&zone("always.listed.test"), test_ip()).await);
    assert!(outcome.is_listed());
    assert_eq!(outcome.text(), None);
}

#[tokio::test]
async fn not_found_zone_reports_not_listed() {
    let (checker, resolver) = checker(
        StaticResolver::new().zone("never.listed.test", ZoneBehavior::NotFound),
    );

    let outcome = assert_ok!(checker.lookup("never.listed.test", "127.0.0.2").await);
    assert!(!outcome.is_listed());
    assert_eq!(outcome.text().unwrap_or(""), "");

    // No TXT lookup once the host check comes back empty
    assert_eq!(resolver.queries(), vec!["A 2.0.0.127.never.listed.test"]);
}

#[tokio::test]
async fn first_txt_record_is_kept() {
    let (checker, resolver) = checker(StaticResolver::new().zone(
        "bl.test",
        ZoneBehavior::Listed(vec!["first reason".into(), "second reason".into()]),
    ));

    let outcome = assert_ok!(checker.query(&zone("bl.test"), test_ip()).await);
    assert!(outcome.is_listed());
    assert_eq!(outcome.text(), Some("first reason"));
    assert_eq!(
        resolver.queries(),
        vec!["A 2.0.0.127.bl.test", "TXT 2.0.0.127.bl.test"]
    );
}

#[tokio::test]
async fn transient_txt_failure_keeps_listing() {
    let (checker, _) = checker(StaticResolver::new().zone(
        "bl.test",
        ZoneBehavior::ListedTextFails(FailureKind::Transient),
    ));

    let outcome = assert_ok!(checker.query(&zone("bl.test"), test_ip()).await);
    assert!(outcome.is_listed());
    assert_eq!(outcome.text(), None);
}

#[tokio::test]
async fn missing_txt_keeps_listing() {
    let (checker, _) = checker(StaticResolver::new().zone(
        "bl.test",
        ZoneBehavior::ListedTextFails(FailureKind::NotFound),
    ));

    let outcome = assert_ok!(checker.query(&zone("bl.test"), test_ip()).await);
    assert!(outcome.is_listed());
    assert_eq!(outcome.text(), None);
}

#[tokio::test]
async fn fatal_txt_failure_is_an_error() {
    let (checker, _) = checker(StaticResolver::new().zone(
        "bl.test",
        ZoneBehavior::ListedTextFails(FailureKind::Fatal),
    ));

    let err = assert_err!(checker.query(&zone("bl.test"), test_ip()).await);
    match err {
        RblError::Resolution { name, message } => {
            assert_eq!(name, "2.0.0.127.bl.test");
            assert!(message.starts_with("looking up TXT record"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn host_failures_are_not_conflated_with_not_listed() {
    for kind in [FailureKind::Fatal, FailureKind::Transient] {
        let (checker, resolver) =
            checker(StaticResolver::new().zone("broken.test", ZoneBehavior::Fails(kind)));

        let err = assert_err!(checker.query(&zone("broken.test"), test_ip()).await);
        assert!(matches!(err, RblError::Resolution { .. }), "{kind:?}: {err:?}");
        assert_eq!(resolver.queries().len(), 1);
    }
}

#[tokio::test]
async fn ipv6_is_rejected_before_resolution() {
    let (checker, resolver) = checker(StaticResolver::new());

    let err = assert_err!(checker.query(&zone("bl.test"), "2001:db8::1".parse().unwrap()).await);
    assert!(matches!(err, RblError::InvalidAddress(_)));

    let err = assert_err!(checker.lookup("bl.test", "not-an-ip").await);
    assert!(matches!(err, RblError::InvalidAddress(_)));

    let err = assert_err!(checker.check_catalog("::1".parse().unwrap()).await);
    assert!(matches!(err, RblError::InvalidAddress(_)));

    assert!(resolver.queries().is_empty());
}

#[tokio::test]
async fn blank_zone_is_rejected() {
    let (checker, _) = checker(StaticResolver::new());
    let err = assert_err!(checker.lookup("  ", "127.0.0.2").await);
    assert!(matches!(err, RblError::InvalidZone(_)));
}

#[tokio::test]
async fn catalog_scan_not_listed_everywhere() {
    let (checker, resolver) = checker(StaticResolver::new());

    let reports = assert_ok!(checker.check_catalog(test_ip()).await);
    assert_eq!(reports.len(), catalog::blacklists().len());

    for (report, expected) in reports.iter().zip(catalog::blacklists()) {
        assert_eq!(report.zone.as_str(), *expected);
        assert_eq!(report.address, test_ip());
        assert!(!report.listed);
        assert!(report.text.is_none());
        assert!(report.error.is_none());
    }
    assert_eq!(resolver.queries().len(), catalog::blacklists().len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_scan_keeps_results_in_their_slots() {
    // Every other zone is listed and names itself in its TXT record
    let mut resolver = StaticResolver::new();
    for (i, name) in catalog::blacklists().iter().enumerate() {
        if i % 2 == 0 {
            resolver = resolver.zone(name, ZoneBehavior::Listed(vec![(*name).to_string()]));
        }
    }
    let (checker, _) = checker(resolver);

    let zones: Vec<ZoneName> = catalog::blacklists().iter().map(|z| zone(z)).collect();
    let reports = assert_ok!(checker.check_all(&zones, test_ip()).await);

    assert_eq!(reports.len(), zones.len());
    for (i, (report, zone)) in reports.iter().zip(&zones).enumerate() {
        assert_eq!(&report.zone, zone);
        if i % 2 == 0 {
            assert!(report.listed, "{zone} should be listed");
            assert_eq!(report.text.as_deref(), Some(zone.as_str()));
        } else {
            assert!(!report.listed, "{zone} should not be listed");
            assert!(report.text.is_none());
        }
    }
}

#[tokio::test]
async fn one_failing_zone_does_not_abort_siblings() {
    let (checker, _) = checker(
        StaticResolver::new()
            .zone("a.test", ZoneBehavior::Listed(vec!["listed on a".into()]))
            .zone("b.test", ZoneBehavior::Fails(FailureKind::Fatal))
            .zone("c.test", ZoneBehavior::NotFound),
    );

    let zones = [zone("a.test"), zone("b.test"), zone("c.test")];
    let reports = assert_ok!(checker.check_all(&zones, test_ip()).await);

    assert!(reports[0].listed);
    assert_eq!(reports[0].text.as_deref(), Some("listed on a"));

    assert!(!reports[1].listed);
    assert!(reports[1].is_error());
    assert!(reports[1]
        .error
        .as_deref()
        .unwrap()
        .contains("2.0.0.127.b.test"));

    assert!(!reports[2].listed);
    assert!(!reports[2].is_error());
}

#[tokio::test]
async fn slow_zone_times_out_alone() {
    let resolver = StaticResolver::new()
        .zone("slow.test", ZoneBehavior::Slow(Duration::from_secs(10)))
        .zone("fast.test", ZoneBehavior::Listed(vec![]));
    let checker = Checker::with_resolver(
        resolver,
        CheckerConfig::new().timeout(Duration::from_millis(50)),
    );

    let zones = [zone("slow.test"), zone("fast.test")];
    let reports = assert_ok!(checker.check_all(&zones, test_ip()).await);

    assert_eq!(
        reports[0].error.as_deref(),
        Some("lookup against slow.test timed out after 50ms")
    );
    assert!(reports[1].listed);
    assert!(!reports[1].is_error());
}

#[tokio::test]
async fn lookup_honours_deadline() {
    let checker = Checker::with_resolver(
        StaticResolver::new().zone("slow.test", ZoneBehavior::Slow(Duration::from_secs(10))),
        CheckerConfig::new().timeout(Duration::from_millis(50)),
    );

    let err = assert_err!(checker.lookup("slow.test", "127.0.0.2").await);
    assert!(matches!(err, RblError::Timeout { ref zone, .. } if zone == "slow.test"));
}

#[tokio::test]
async fn bounded_concurrency_still_answers_every_zone() {
    let checker = Checker::with_resolver(
        StaticResolver::new().zone("x.test", ZoneBehavior::Listed(vec![])),
        CheckerConfig::new().concurrency(1),
    );

    let zones = [zone("x.test"), zone("y.test"), zone("x.test")];
    let reports = assert_ok!(checker.check_all(&zones, test_ip()).await);
    let listed: Vec<bool> = reports.iter().map(|r| r.listed).collect();
    assert_eq!(listed, vec![true, false, true]);
}
