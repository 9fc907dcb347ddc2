/*!
The conversion engine: civil time in, instant out, and back again.

The two directions are deliberately asymmetric:

* **Interpretation** ([`to_instant`]) reads a [`CivilTime`] as a wall-clock
  reading in a zone. Around DST transitions this mapping is partial (a
  spring-forward gap skips readings) and multivalued (a fall-back overlap
  repeats them), so interpretation carries an explicit policy for both
  cases.
* **Projection** ([`project`]) renders an [`Instant`] on a zone's wall
  clock. This direction is total and never ambiguous: every instant has
  exactly one offset and therefore exactly one civil reading.
*/

use core::fmt;

use chrono::{Duration, LocalResult, TimeZone as _};

use crate::{
    civil::{self, CivilTime},
    error::Error,
    instant::Instant,
    tz::{Offset, OffsetResolver, ZoneId},
};

/// The policy for civil times that occur twice in a zone.
///
/// During a fall-back transition the clock is set backwards, so every
/// reading in the repeated range names two instants: one under the
/// pre-transition offset and one under the post-transition offset. The
/// default is [`Disambiguation::Earlier`], the first occurrence; a caller
/// that wants the repeat asks for [`Disambiguation::Later`] explicitly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Disambiguation {
    /// Pick the first occurrence (the pre-transition offset).
    #[default]
    Earlier,
    /// Pick the second occurrence (the post-transition offset).
    Later,
}

/// The result of interpreting a civil time in a zone.
///
/// Interpretation always yields an instant, but the instant may be the
/// product of a documented adjustment: a civil time falling into a
/// spring-forward gap names no instant at all, and is shifted forward by
/// the length of the gap instead of being rejected.
/// [`Resolved::is_adjusted`] reports when that happened, so a caller can
/// surface it to the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolved {
    instant: Instant,
    adjusted: bool,
}

impl Resolved {
    /// The interpreted instant.
    #[inline]
    pub fn instant(self) -> Instant {
        self.instant
    }

    /// Returns true when the civil time fell into a spring-forward gap and
    /// was shifted forward to the other side of the transition.
    #[inline]
    pub fn is_adjusted(self) -> bool {
        self.adjusted
    }
}

/// An instant dressed in one zone's civil clothing.
///
/// A `ZonedMoment` is what [`project`] returns: the instant itself, the
/// zone it was projected through, and the resulting civil reading and
/// offset. It is a per-request value meant to flow straight to
/// presentation, not to be cached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ZonedMoment {
    instant: Instant,
    zone: ZoneId,
    civil: CivilTime,
    offset: Offset,
}

impl ZonedMoment {
    /// The projected instant, unchanged.
    #[inline]
    pub fn instant(self) -> Instant {
        self.instant
    }

    /// The zone the instant was projected through.
    #[inline]
    pub fn zone(self) -> ZoneId {
        self.zone
    }

    /// The instant's wall-clock reading in [`ZonedMoment::zone`].
    #[inline]
    pub fn civil(self) -> CivilTime {
        self.civil
    }

    /// The zone's UTC offset at [`ZonedMoment::instant`].
    #[inline]
    pub fn offset(self) -> Offset {
        self.offset
    }
}

impl fmt::Display for ZonedMoment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} [{}]", self.civil, self.offset, self.zone)
    }
}

/// Interprets a civil time as a wall-clock reading in the given zone,
/// using the default [`Disambiguation::Earlier`] overlap policy.
///
/// See [`to_instant_with`] for the full contract.
///
/// ```
/// use zonecast::{civil::CivilTime, to_instant, tz::ZoneId};
///
/// let toronto = ZoneId::new("America/Toronto")?;
/// let civil = CivilTime::new(2024, 7, 1, 12, 0, 0)?;
/// let resolved = to_instant(civil, toronto)?;
/// assert_eq!(resolved.instant().to_string(), "2024-07-01T16:00:00Z");
/// assert!(!resolved.is_adjusted());
/// # Ok::<(), zonecast::Error>(())
/// ```
#[inline]
pub fn to_instant(civil: CivilTime, zone: ZoneId) -> Result<Resolved, Error> {
    to_instant_with(civil, zone, Disambiguation::default())
}

/// Interprets a civil time as a wall-clock reading in the given zone.
///
/// Calendar validity was already enforced when the [`CivilTime`] was
/// constructed, and zone validity when the [`ZoneId`] was, so the only
/// work left is resolving the wall-clock reading against the zone's
/// transition rules:
///
/// * For an unambiguous reading, the instant is `civil - offset`.
/// * For a reading in a fall-back overlap, the occurrence is chosen by
///   `disambiguation`. This is deterministic either way.
/// * For a reading in a spring-forward gap, the engine finds the two
///   offsets bounding the skipped range with a two-pass probe: a
///   *provisional* resolution of the reading taken at offset zero, then a
///   *refining* re-resolution at the instant the first pass produced. (The
///   offset near a transition depends on the instant being resolved, which
///   is why a single pass cannot be trusted; the two probes land on
///   opposite sides of the transition.) The reading is then mapped through
///   the smaller of the two offsets, which is equivalent to sliding it
///   forward by the length of the gap: interpreting `02:30` across a
///   `02:00 -> 03:00` jump yields the instant whose local reading is
///   `03:30`. The result is flagged via [`Resolved::is_adjusted`].
///
/// # Errors
///
/// None in practice: every civil time in the supported range resolves.
/// The fallible signature matches the other engine operations, which can
/// be handed instants outside the supported range.
pub fn to_instant_with(
    civil: CivilTime,
    zone: ZoneId,
    disambiguation: Disambiguation,
) -> Result<Resolved, Error> {
    let local = civil.to_naive();
    match zone.tz().offset_from_local_datetime(&local) {
        LocalResult::Single(offset) => Ok(Resolved {
            instant: subtract_offset(
                Instant::from_utc(civil),
                rounded_offset(&offset),
            ),
            adjusted: false,
        }),
        LocalResult::Ambiguous(earlier, later) => {
            trace!(
                "{civil} occurs twice in {zone}, \
                 resolving to the {disambiguation:?} occurrence",
            );
            let offset = match disambiguation {
                Disambiguation::Earlier => earlier,
                Disambiguation::Later => later,
            };
            Ok(Resolved {
                instant: subtract_offset(
                    Instant::from_utc(civil),
                    rounded_offset(&offset),
                ),
                adjusted: false,
            })
        }
        LocalResult::None => {
            let resolver = OffsetResolver::new();
            let provisional = Instant::from_utc(civil);
            let first = resolver.offset_of(zone, provisional)?;
            let refined = subtract_offset(provisional, first);
            let second = resolver.offset_of(zone, refined)?;
            // The probes straddle the transition, so `first` and `second`
            // are the offsets on either side of the gap. Mapping through
            // the smaller one slides the reading forward out of the gap.
            let chosen = first.min(second);
            debug!(
                "{civil} does not exist in {zone} \
                 (gap between {a} and {b}), adjusting forward",
                a = chosen,
                b = first.max(second),
            );
            Ok(Resolved {
                instant: subtract_offset(provisional, chosen),
                adjusted: true,
            })
        }
    }
}

/// Projects an instant into the given zone's civil representation.
///
/// Projection is total and never ambiguous: the zone's offset at `instant`
/// is resolved, added to the instant, and the sum decomposed on the
/// proleptic Gregorian calendar.
///
/// ```
/// use zonecast::{project, tz::ZoneId, Instant};
///
/// let kolkata = ZoneId::new("Asia/Kolkata")?;
/// let instant = Instant::from_millis(1_719_849_600_000); // 2024-07-01T16:00:00Z
/// let moment = project(instant, kolkata)?;
/// assert_eq!(moment.civil().to_string(), "2024-07-01T21:30:00");
/// assert_eq!(moment.offset().minutes(), 330);
/// # Ok::<(), zonecast::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InstantOutOfRange`] when the local reading falls
/// outside civil years `-9999..=9999`.
pub fn project(instant: Instant, zone: ZoneId) -> Result<ZonedMoment, Error> {
    use chrono::Datelike;

    let offset = OffsetResolver::new().offset_of(zone, instant)?;
    // Decompose with the rounded offset, not the database's raw seconds,
    // so the (civil, offset) pair in the result is internally consistent
    // even for sub-minute historical offsets.
    let local = instant
        .to_utc_datetime()?
        .checked_add_signed(Duration::seconds(i64::from(offset.seconds())))
        .ok_or_else(|| Error::instant_out_of_range(instant.as_millis()))?;
    let year_range =
        i32::from(civil::YEAR_MIN)..=i32::from(civil::YEAR_MAX);
    if !year_range.contains(&local.year()) {
        return Err(Error::instant_out_of_range(instant.as_millis()));
    }
    Ok(ZonedMoment {
        instant,
        zone,
        civil: CivilTime::from_naive(local),
        offset,
    })
}

/// Formats the given zone's offset at the given instant as `UTC±HH:MM`.
///
/// The sign is `+` for zero and positive offsets, and hours and minutes are
/// both zero-padded to two digits, across the full range of real-world
/// offsets including the half-hour and 45-minute ones.
///
/// ```
/// use zonecast::{format_offset, tz::ZoneId, Instant};
///
/// let kathmandu = ZoneId::new("Asia/Kathmandu")?;
/// let t = Instant::from_millis(1_719_849_600_000); // 2024-07-01T16:00:00Z
/// assert_eq!(format_offset(kathmandu, t)?, "UTC+05:45");
/// # Ok::<(), zonecast::Error>(())
/// ```
pub fn format_offset(zone: ZoneId, at: Instant) -> Result<String, Error> {
    Ok(OffsetResolver::new().offset_of(zone, at)?.to_string())
}

/// Rounds the rule database's exact offset to this crate's whole-minute
/// [`Offset`]. Interpretation and projection must apply the same rounding,
/// or readings under sub-minute historical offsets would not round-trip.
fn rounded_offset<O: chrono::Offset>(offset: &O) -> Offset {
    Offset::from_seconds_rounded(offset.fix().local_minus_utc())
}

fn subtract_offset(instant: Instant, offset: Offset) -> Instant {
    Instant::from_millis(
        instant.as_millis() - i64::from(offset.seconds()) * 1_000,
    )
}
