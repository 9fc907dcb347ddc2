use core::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{civil::CivilTime, error::Error, tz::ZoneId, zoned::ZonedMoment};

/// An absolute point in time, independent of any time zone.
///
/// An `Instant` is a count of milliseconds since the Unix epoch,
/// `1970-01-01T00:00:00Z`. Instants before the epoch are negative. Instants
/// are totally ordered and immutable.
///
/// An `Instant` has no civil (calendar) meaning on its own. To get one, it
/// must be projected through a time zone, either with
/// [`Instant::to_zoned`] or [`project`](crate::project):
///
/// ```
/// use zonecast::{tz::ZoneId, Instant};
///
/// let zone = ZoneId::new("Asia/Kolkata")?;
/// let moment = Instant::UNIX_EPOCH.to_zoned(zone)?;
/// assert_eq!(moment.civil().to_string(), "1970-01-01T05:30:00");
/// # Ok::<(), zonecast::Error>(())
/// ```
///
/// # Display format
///
/// Instants display as the corresponding UTC civil time followed by a `Z`
/// designator, e.g. `2024-07-01T16:00:00Z`. Sub-second precision is shown
/// only when non-zero.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    /// The instant corresponding to `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: Instant = Instant { millis: 0 };

    /// Creates an instant from a count of milliseconds since the Unix
    /// epoch.
    ///
    /// This constructor accepts any `i64`, but instants whose UTC civil
    /// year falls outside `-9999..=9999` will fail with
    /// [`Error::InstantOutOfRange`] when projected into a zone.
    #[inline]
    pub const fn from_millis(millis: i64) -> Instant {
        Instant { millis }
    }

    /// Returns this instant as a count of milliseconds since the Unix
    /// epoch.
    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Creates an instant by reading a civil time as UTC.
    ///
    /// This is the degenerate zone-free interpretation: no offset rules are
    /// consulted, and the mapping is one-to-one.
    ///
    /// ```
    /// use zonecast::{civil::CivilTime, Instant};
    ///
    /// let civil = CivilTime::new(2024, 7, 1, 16, 0, 0)?;
    /// assert_eq!(Instant::from_utc(civil).to_string(), "2024-07-01T16:00:00Z");
    /// # Ok::<(), zonecast::Error>(())
    /// ```
    #[inline]
    pub fn from_utc(civil: CivilTime) -> Instant {
        Instant { millis: civil.to_naive().and_utc().timestamp_millis() }
    }

    /// Projects this instant into the given zone.
    ///
    /// This is a convenience for [`project`](crate::project). Projection is
    /// deterministic and never ambiguous; it fails only when the instant is
    /// outside the supported civil range.
    #[inline]
    pub fn to_zoned(self, zone: ZoneId) -> Result<ZonedMoment, Error> {
        crate::zoned::project(self, zone)
    }

    /// Returns this instant as a UTC `NaiveDateTime`, or an error if it is
    /// outside chrono's representable range.
    pub(crate) fn to_utc_datetime(self) -> Result<NaiveDateTime, Error> {
        DateTime::<Utc>::from_timestamp_millis(self.millis)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| Error::instant_out_of_range(self.millis))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_utc_datetime() {
            Ok(dt) if self.millis % 1_000 == 0 => {
                write!(f, "{}Z", dt.format("%Y-%m-%dT%H:%M:%S"))
            }
            Ok(dt) => write!(f, "{}Z", dt.format("%Y-%m-%dT%H:%M:%S%.3f")),
            // The instant has no civil rendering. Fall back to something
            // unambiguous rather than panicking inside Display.
            Err(_) => write!(f, "<instant {}ms>", self.millis),
        }
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_display() {
        assert_eq!(Instant::UNIX_EPOCH.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn sub_second_display() {
        let t = Instant::from_millis(1_500);
        assert_eq!(t.to_string(), "1970-01-01T00:00:01.500Z");
    }

    #[test]
    fn negative_millis_are_before_the_epoch() {
        let t = Instant::from_millis(-1_000);
        assert!(t < Instant::UNIX_EPOCH);
        assert_eq!(t.to_string(), "1969-12-31T23:59:59Z");
    }

    #[test]
    fn from_utc_round_trips_through_millis() {
        let civil = CivilTime::new(2024, 7, 1, 16, 0, 0).unwrap();
        let t = Instant::from_utc(civil);
        assert_eq!(t.as_millis(), 1_719_849_600_000);
        assert_eq!(t.to_string(), "2024-07-01T16:00:00Z");
    }

    #[test]
    fn total_order() {
        let a = Instant::from_millis(1);
        let b = Instant::from_millis(2);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }
}
