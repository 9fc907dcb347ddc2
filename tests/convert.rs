/*!
End-to-end conversion scenarios, driven the way a presentation layer would
drive the engine: filter the catalog, resolve zone identifiers, interpret
the user's civil time in the source zone and project the instant into the
target zone.
*/

use zonecast::{
    civil::CivilTime,
    format_offset, project, to_instant,
    tz::{ZoneCatalog, ZoneId, ZoneSource},
    Error, Instant,
};

#[test]
fn toronto_noon_is_half_past_nine_in_kolkata() {
    let _ = env_logger::try_init();

    let toronto = ZoneId::new("America/Toronto").unwrap();
    let kolkata = ZoneId::new("Asia/Kolkata").unwrap();

    let entered = CivilTime::new(2024, 7, 1, 12, 0, 0).unwrap();
    let resolved = to_instant(entered, toronto).unwrap();
    assert!(!resolved.is_adjusted());
    assert_eq!(resolved.instant().to_string(), "2024-07-01T16:00:00Z");

    let there = project(resolved.instant(), kolkata).unwrap();
    assert_eq!(there.civil(), CivilTime::new(2024, 7, 1, 21, 30, 0).unwrap());
    assert_eq!(there.offset().minutes(), 330);
    assert_eq!(
        format_offset(kolkata, resolved.instant()).unwrap(),
        "UTC+05:30",
    );
    assert_eq!(
        format_offset(toronto, resolved.instant()).unwrap(),
        "UTC-04:00",
    );
}

#[test]
fn search_box_flow() {
    // Every keystroke filters; the selected entry resolves to a ZoneId.
    let catalog = ZoneCatalog::bundled();
    let hits = catalog.filter("toronto");
    assert_eq!(hits, vec!["America/Toronto"]);
    assert!(!hits.contains(&"Europe/London"));

    let zone = ZoneId::new(hits[0]).unwrap();
    let moment = Instant::UNIX_EPOCH.to_zoned(zone).unwrap();
    assert_eq!(
        moment.civil(),
        CivilTime::new(1969, 12, 31, 19, 0, 0).unwrap(),
    );
    assert_eq!(moment.offset().minutes(), -300);
}

#[test]
fn conversion_survives_a_degraded_catalog() {
    struct Broken;

    impl ZoneSource for Broken {
        fn zone_ids(&self) -> Result<Vec<&'static str>, Error> {
            Err(Error::ZoneDatabaseUnavailable)
        }
    }

    let catalog = ZoneCatalog::load(&Broken);
    assert!(catalog.is_fallback());

    // The fallback catalog is small but every entry still resolves and
    // converts against the full rule database.
    for name in catalog.list() {
        let zone = ZoneId::new(name).unwrap();
        let resolved = CivilTime::new(2024, 7, 1, 12, 0, 0)
            .unwrap()
            .to_instant(zone)
            .unwrap();
        let moment = project(resolved.instant(), zone).unwrap();
        assert_eq!(moment.civil(), CivilTime::new(2024, 7, 1, 12, 0, 0).unwrap());
    }
}

#[test]
fn round_trips_across_zone_pairs() {
    let zones = ["UTC", "America/Toronto", "Europe/Paris", "Asia/Kolkata"]
        .map(|name| ZoneId::new(name).unwrap());
    // A mid-season instant, nowhere near any transition.
    let t = to_instant(
        CivilTime::new(2024, 7, 1, 12, 0, 0).unwrap(),
        ZoneId::UTC,
    )
    .unwrap()
    .instant();

    for source in zones {
        for target in zones {
            let seen_there = project(t, source).unwrap();
            let back = to_instant(seen_there.civil(), source).unwrap();
            assert_eq!(back.instant(), t, "{source} -> {target}");
            let finally = project(back.instant(), target).unwrap();
            assert_eq!(finally.instant(), t);
        }
    }
}

#[test]
fn invalid_inputs_fail_before_any_zone_work() {
    assert!(matches!(
        CivilTime::new(2024, 4, 31, 12, 0, 0),
        Err(Error::InvalidCivilTime { .. }),
    ));
    assert!(matches!(
        ZoneId::new("Atlantis/Sunken_City"),
        Err(Error::UnknownZone { .. }),
    ));
}
