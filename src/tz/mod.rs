/*!
Zone identifiers, offsets and the zone catalog.

This module is the boundary with the zone-rule database. A [`ZoneId`] is a
validated handle for one IANA zone; an [`Offset`] is that zone's distance
from UTC at one particular instant, answered by [`OffsetResolver`]; and
[`ZoneCatalog`] is the queryable list of identifiers a UI can offer.

The rule database itself is the IANA tzdb as compiled into
[`chrono-tz`](https://docs.rs/chrono-tz). It is immutable reference data
baked into the binary: nothing in this module performs I/O, takes locks or
caches, so everything here is safe to call concurrently.
*/

use core::{fmt, str::FromStr};

use chrono::Offset as _;
use chrono::TimeZone as _;
use chrono_tz::{Tz, TZ_VARIANTS};

use crate::{error::Error, instant::Instant};

pub use self::{
    db::{BundledSource, ZoneCatalog, ZoneSource},
    offset::Offset,
};

mod db;
mod offset;

/// A validated IANA time zone identifier, e.g. `America/Toronto`.
///
/// A `ZoneId` can only be constructed for an identifier the rule database
/// knows about, so holding one guarantees that offset resolution cannot fail
/// with an unknown-zone error. Lookup is case-insensitive;
/// [`ZoneId::as_str`] always returns the canonical spelling:
///
/// ```
/// use zonecast::tz::ZoneId;
///
/// let zone = ZoneId::new("america/toronto")?;
/// assert_eq!(zone.as_str(), "America/Toronto");
///
/// assert!(ZoneId::new("America/Torontoo").is_err());
/// # Ok::<(), zonecast::Error>(())
/// ```
///
/// `ZoneId` is a `Copy` handle. It does not embed any rule data; rules are
/// looked up on demand during offset resolution.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ZoneId(Tz);

impl ZoneId {
    /// The UTC zone. Always present, never observes DST.
    pub const UTC: ZoneId = ZoneId(Tz::UTC);

    /// Looks up a zone identifier in the rule database.
    ///
    /// Matching is case-insensitive. The exact-case lookup is a hash
    /// lookup; other casings fall back to a scan of the database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownZone`] when no zone with this identifier
    /// exists.
    pub fn new(name: &str) -> Result<ZoneId, Error> {
        if let Ok(tz) = name.parse::<Tz>() {
            return Ok(ZoneId(tz));
        }
        for tz in &TZ_VARIANTS {
            if tz.name().eq_ignore_ascii_case(name) {
                return Ok(ZoneId(*tz));
            }
        }
        Err(Error::unknown_zone(name))
    }

    /// Returns the canonical identifier for this zone.
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.0.name()
    }

    /// Returns this zone's offset from UTC at the given instant.
    ///
    /// This is a convenience for
    /// [`OffsetResolver::offset_of`](OffsetResolver::offset_of).
    #[inline]
    pub fn to_offset(self, at: Instant) -> Result<Offset, Error> {
        OffsetResolver::new().offset_of(self, at)
    }

    pub(crate) fn tz(self) -> Tz {
        self.0
    }
}

impl FromStr for ZoneId {
    type Err = Error;

    fn from_str(s: &str) -> Result<ZoneId, Error> {
        ZoneId::new(s)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZoneId({})", self.as_str())
    }
}

/// Resolves a zone's UTC offset at a given instant.
///
/// The resolver consults the zone's full transition history and its
/// currently scheduled future rules, so the answer for a DST-observing zone
/// depends on the instant:
///
/// ```
/// use zonecast::{civil::CivilTime, tz::{OffsetResolver, ZoneId}, Instant};
///
/// let resolver = OffsetResolver::new();
/// let toronto = ZoneId::new("America/Toronto")?;
///
/// let winter = Instant::from_utc(CivilTime::new(2024, 1, 15, 12, 0, 0)?);
/// let summer = Instant::from_utc(CivilTime::new(2024, 7, 15, 12, 0, 0)?);
/// assert_eq!(resolver.offset_of(toronto, winter)?.minutes(), -300);
/// assert_eq!(resolver.offset_of(toronto, summer)?.minutes(), -240);
/// # Ok::<(), zonecast::Error>(())
/// ```
///
/// Resolution is referentially transparent: the same `(zone, instant)` pair
/// always yields the same offset, and no state is read other than the
/// immutable rule database. The resolver itself is a zero-sized handle; it
/// exists so that callers (and tests) can name the component they depend
/// on.
#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetResolver(());

impl OffsetResolver {
    /// Creates a new resolver over the compiled-in rule database.
    #[inline]
    pub const fn new() -> OffsetResolver {
        OffsetResolver(())
    }

    /// Returns the UTC offset of `zone` at the instant `at`.
    ///
    /// For a zone with no DST and no historical changes the answer is
    /// constant across all instants. Sub-minute historical offsets are
    /// rounded to the nearest minute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InstantOutOfRange`] when `at` cannot be represented
    /// in the supported civil range. Unknown zones are ruled out by
    /// [`ZoneId`] construction.
    pub fn offset_of(&self, zone: ZoneId, at: Instant) -> Result<Offset, Error> {
        let utc = at.to_utc_datetime()?;
        let seconds =
            zone.tz().offset_from_utc_datetime(&utc).fix().local_minus_utc();
        let offset = Offset::from_seconds_rounded(seconds);
        trace!("resolved offset of {zone} at {at} to {offset}");
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::CivilTime;

    fn instant(
        year: i16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Instant {
        Instant::from_utc(
            CivilTime::new(year, month, day, hour, minute, second).unwrap(),
        )
    }

    #[test]
    fn dst_zone_differs_by_an_hour_between_seasons() {
        let toronto = ZoneId::new("America/Toronto").unwrap();
        let resolver = OffsetResolver::new();
        let winter =
            resolver.offset_of(toronto, instant(2024, 1, 15, 12, 0, 0)).unwrap();
        let summer =
            resolver.offset_of(toronto, instant(2024, 7, 15, 12, 0, 0)).unwrap();
        assert_eq!(winter.minutes(), -300);
        assert_eq!(summer.minutes(), -240);
        assert_eq!(summer.minutes() - winter.minutes(), 60);
    }

    #[test]
    fn utc_is_invariant() {
        let resolver = OffsetResolver::new();
        for t in [
            Instant::from_millis(i64::from(i32::MIN) * 1_000),
            Instant::UNIX_EPOCH,
            instant(2024, 3, 10, 7, 0, 0),
            instant(9999, 12, 31, 0, 0, 0),
        ] {
            assert_eq!(resolver.offset_of(ZoneId::UTC, t).unwrap(), Offset::UTC);
        }
    }

    #[test]
    fn half_hour_zone_without_dst_is_invariant() {
        let kolkata = ZoneId::new("Asia/Kolkata").unwrap();
        let resolver = OffsetResolver::new();
        for t in [
            instant(1990, 1, 1, 0, 0, 0),
            instant(2024, 1, 15, 12, 0, 0),
            instant(2024, 7, 15, 12, 0, 0),
        ] {
            assert_eq!(resolver.offset_of(kolkata, t).unwrap().minutes(), 330);
        }
    }

    #[test]
    fn unknown_zone_is_rejected_at_construction() {
        let err = ZoneId::new("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownZone { name: "Mars/Olympus_Mons".to_string() }
        );
    }

    #[test]
    fn lookup_is_case_insensitive_and_canonicalizing() {
        let zone = ZoneId::new("AMERICA/toronto").unwrap();
        assert_eq!(zone.as_str(), "America/Toronto");
        assert_eq!(zone, ZoneId::new("America/Toronto").unwrap());
        assert_eq!("utc".parse::<ZoneId>().unwrap(), ZoneId::UTC);
    }

    #[test]
    fn offsets_of_all_zones_are_sane() {
        // Real-world offsets since the epoch all fall in [-12:00, +14:00].
        let resolver = OffsetResolver::new();
        let catalog = ZoneCatalog::bundled();
        let samples = [
            Instant::UNIX_EPOCH,
            instant(2000, 6, 1, 0, 0, 0),
            instant(2024, 1, 15, 12, 0, 0),
            instant(2024, 7, 15, 12, 0, 0),
        ];
        for name in catalog.list() {
            let zone = ZoneId::new(name).unwrap();
            for &t in &samples {
                let offset = resolver.offset_of(zone, t).unwrap();
                assert!(
                    (-720..=840).contains(&offset.minutes()),
                    "{name} at {t}: {offset}",
                );
            }
        }
    }
}
