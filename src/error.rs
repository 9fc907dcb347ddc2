/// An error that can occur in this crate.
///
/// Every fallible operation in this crate reports one of the variants below.
/// Two of them deserve special mention:
///
/// * [`Error::UnknownZone`] is reported eagerly, when a [`ZoneId`] is
/// constructed, rather than lazily at conversion time. Once a `ZoneId`
/// exists, it is guaranteed to name a zone the rule database knows about.
/// * [`Error::ZoneDatabaseUnavailable`] is never returned by
/// [`ZoneCatalog::load`] itself. Instead, a failing [`ZoneSource`] causes the
/// catalog to degrade to a fixed fallback list. The variant exists so that
/// `ZoneSource` implementations have a way to report the failure.
///
/// Note that a civil time falling into a DST spring-forward gap is *not* an
/// error. It is reported as a soft condition on a successful result; see
/// [`Resolved::is_adjusted`](crate::Resolved::is_adjusted).
///
/// [`ZoneId`]: crate::tz::ZoneId
/// [`ZoneCatalog::load`]: crate::tz::ZoneCatalog::load
/// [`ZoneSource`]: crate::tz::ZoneSource
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The given identifier does not name a zone in the rule database.
    #[error("unknown time zone identifier `{name}`")]
    UnknownZone {
        /// The identifier as given by the caller.
        name: String,
    },
    /// The given components do not form a valid Gregorian calendar
    /// date/time.
    #[error("invalid civil time: {reason}")]
    InvalidCivilTime {
        /// A human readable description of what was wrong.
        reason: String,
    },
    /// The zone-rule database could not be loaded.
    #[error("time zone database unavailable")]
    ZoneDatabaseUnavailable,
    /// The instant is outside the range supported by this crate's calendar
    /// arithmetic (civil years `-9999..=9999`).
    #[error("instant with {millis} milliseconds since the Unix epoch is outside the supported range")]
    InstantOutOfRange {
        /// The out-of-range instant, in milliseconds since the Unix epoch.
        millis: i64,
    },
}

impl Error {
    pub(crate) fn unknown_zone(name: &str) -> Error {
        Error::UnknownZone { name: name.to_string() }
    }

    pub(crate) fn invalid_civil_time(reason: impl Into<String>) -> Error {
        Error::InvalidCivilTime { reason: reason.into() }
    }

    pub(crate) fn instant_out_of_range(millis: i64) -> Error {
        Error::InstantOutOfRange { millis }
    }
}
