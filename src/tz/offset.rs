use core::fmt;

/// A time zone's offset from UTC at some instant, in signed whole minutes.
///
/// Negative offsets correspond to zones west of the prime meridian, positive
/// offsets to zones east of it. In all cases, `civil-time - offset = UTC`.
///
/// An offset is always derived from a `(ZoneId, Instant)` pair via
/// [`OffsetResolver::offset_of`](crate::tz::OffsetResolver::offset_of) (or
/// carried inside a [`ZonedMoment`](crate::ZonedMoment)); it is never stored
/// independently, because it can change from one instant to the next within
/// the same zone.
///
/// Real-world offsets are not all whole hours: half-hour and 45-minute
/// offsets exist (UTC+05:30, UTC+05:45, UTC+12:45). All modern offsets are
/// whole minutes; the handful of sub-minute offsets in the historical record
/// (pre-standardization local mean time) are rounded to the nearest minute
/// when resolved through this crate.
///
/// # Display format
///
/// Offsets display as `UTC±HH:MM` with the sign always present (`+` for
/// zero) and both fields zero-padded to two digits:
///
/// ```
/// use zonecast::tz::Offset;
///
/// assert_eq!(Offset::from_minutes(0).to_string(), "UTC+00:00");
/// assert_eq!(Offset::from_minutes(-300).to_string(), "UTC-05:00");
/// assert_eq!(Offset::from_minutes(330).to_string(), "UTC+05:30");
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Offset {
    minutes: i16,
}

impl Offset {
    /// The offset corresponding to UTC. That is, no offset at all.
    pub const UTC: Offset = Offset { minutes: 0 };

    /// Creates an offset from a count of signed minutes from UTC.
    #[inline]
    pub const fn from_minutes(minutes: i16) -> Offset {
        Offset { minutes }
    }

    /// Returns this offset as signed minutes from UTC.
    #[inline]
    pub const fn minutes(self) -> i16 {
        self.minutes
    }

    /// Returns this offset as signed seconds from UTC.
    #[inline]
    pub const fn seconds(self) -> i32 {
        self.minutes as i32 * 60
    }

    /// Creates an offset from signed seconds, rounding to the nearest
    /// minute (half-minutes round away from zero).
    ///
    /// The tzdb's local-mean-time entries are the only source of sub-minute
    /// values, e.g. America/Toronto's LMT of -05:17:32.
    pub(crate) fn from_seconds_rounded(seconds: i32) -> Offset {
        let half = if seconds < 0 { -30 } else { 30 };
        Offset { minutes: ((seconds + half) / 60) as i16 }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let magnitude = self.minutes.unsigned_abs();
        write!(f, "UTC{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({self})")
    }
}
