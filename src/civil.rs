/*!
Zone-naive civil date/time.

A civil time is a calendar date and a time of day with no attached UTC
offset. On its own it is ambiguous: `2024-03-10T02:30:00` names a different
point on the timeline (or, on a DST transition day, possibly no point at
all) depending on which zone reads it. A civil time becomes meaningful only
when interpreted in a zone via [`to_instant`](crate::to_instant), or when
produced by projecting an [`Instant`](crate::Instant) through a zone.
*/

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::{error::Error, tz::ZoneId, zoned::Resolved};

/// The minimum supported civil year.
pub(crate) const YEAR_MIN: i16 = -9999;
/// The maximum supported civil year.
pub(crate) const YEAR_MAX: i16 = 9999;

/// A civil date/time in the proleptic Gregorian calendar.
///
/// Every `CivilTime` value is guaranteed to be calendar-valid: `2023-02-29`
/// and `2024-04-31` are rejected at construction. The supported year range
/// is `-9999..=9999`. Precision is whole seconds, matching what a user can
/// enter in a date/time form.
///
/// A `CivilTime` carries no zone and no offset. Two civil times compare by
/// calendar order, which says nothing about the order of the instants they
/// might denote in any particular zone.
///
/// # Example
///
/// ```
/// use zonecast::civil::CivilTime;
///
/// let civil = CivilTime::new(2024, 7, 1, 12, 0, 0)?;
/// assert_eq!(civil.year(), 2024);
/// assert_eq!(civil.to_string(), "2024-07-01T12:00:00");
///
/// // Not a date in any year:
/// assert!(CivilTime::new(2024, 4, 31, 0, 0, 0).is_err());
/// // Only a date in leap years:
/// assert!(CivilTime::new(2024, 2, 29, 0, 0, 0).is_ok());
/// assert!(CivilTime::new(2023, 2, 29, 0, 0, 0).is_err());
/// # Ok::<(), zonecast::Error>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CivilTime(NaiveDateTime);

impl CivilTime {
    /// Creates a new civil time from its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCivilTime`] when the components do not form
    /// a valid calendar date (respecting month lengths and leap years), a
    /// valid time of day (`00:00:00` through `23:59:59`), or when the year
    /// is outside `-9999..=9999`.
    pub fn new(
        year: i16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<CivilTime, Error> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(Error::invalid_civil_time(format!(
                "year {year} is not in the supported range {YEAR_MIN}..={YEAR_MAX}",
            )));
        }
        let date = NaiveDate::from_ymd_opt(
            i32::from(year),
            u32::from(month),
            u32::from(day),
        )
        .ok_or_else(|| {
            Error::invalid_civil_time(format!(
                "{year:04}-{month:02}-{day:02} is not a valid calendar date",
            ))
        })?;
        let datetime = date
            .and_hms_opt(
                u32::from(hour),
                u32::from(minute),
                u32::from(second),
            )
            .ok_or_else(|| {
                Error::invalid_civil_time(format!(
                    "{hour:02}:{minute:02}:{second:02} is not a valid time of day",
                ))
            })?;
        Ok(CivilTime(datetime))
    }

    /// Returns the year. Guaranteed to be in `-9999..=9999`.
    #[inline]
    pub fn year(self) -> i16 {
        // Always in range per the construction invariant.
        self.0.year() as i16
    }

    /// Returns the month. Guaranteed to be in `1..=12`.
    #[inline]
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day of the month. Guaranteed to be valid for the
    /// year/month.
    #[inline]
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the hour. Guaranteed to be in `0..=23`.
    #[inline]
    pub fn hour(self) -> u8 {
        self.0.hour() as u8
    }

    /// Returns the minute. Guaranteed to be in `0..=59`.
    #[inline]
    pub fn minute(self) -> u8 {
        self.0.minute() as u8
    }

    /// Returns the second. Guaranteed to be in `0..=59`.
    #[inline]
    pub fn second(self) -> u8 {
        self.0.second() as u8
    }

    /// Interprets this civil time as a wall-clock reading in the given
    /// zone.
    ///
    /// This is a convenience for [`to_instant`](crate::to_instant), which
    /// documents the DST gap and overlap policies.
    #[inline]
    pub fn to_instant(self, zone: ZoneId) -> Result<Resolved, Error> {
        crate::zoned::to_instant(self, zone)
    }

    /// Wraps an already-validated `NaiveDateTime`.
    ///
    /// Callers must ensure the year is within `YEAR_MIN..=YEAR_MAX`.
    pub(crate) fn from_naive(datetime: NaiveDateTime) -> CivilTime {
        debug_assert!(
            (i32::from(YEAR_MIN)..=i32::from(YEAR_MAX))
                .contains(&datetime.year()),
            "civil year out of range: {}",
            datetime.year(),
        );
        CivilTime(datetime)
    }

    pub(crate) fn to_naive(self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

impl fmt::Debug for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CivilTime({self})")
    }
}
