/*!
A time zone conversion engine.

This crate answers one question well: *given a wall-clock date/time in one
named IANA zone, what does the wall clock say in another?* It does so in two
composable steps around an absolute [`Instant`]:

1. [`to_instant`] interprets a zone-naive [`CivilTime`](civil::CivilTime)
   as a wall-clock reading in a source zone, applying that zone's full
   historical and scheduled DST transition rules.
2. [`project`] renders the resulting instant on a target zone's wall clock,
   yielding a [`ZonedMoment`] carrying the civil reading and the offset in
   effect.

Around these sit the supporting queries a zone-picker UI needs: the
[`ZoneCatalog`](tz::ZoneCatalog) of valid identifiers with substring search,
per-instant offset lookup via [`OffsetResolver`](tz::OffsetResolver), and
[`format_offset`] for `UTC±HH:MM` labels.

```
use zonecast::{civil::CivilTime, format_offset, project, to_instant, tz::ZoneId};

let toronto = ZoneId::new("America/Toronto")?;
let kolkata = ZoneId::new("Asia/Kolkata")?;

// Noon in Toronto on a summer day...
let entered = CivilTime::new(2024, 7, 1, 12, 0, 0)?;
let resolved = to_instant(entered, toronto)?;
assert_eq!(resolved.instant().to_string(), "2024-07-01T16:00:00Z");

// ...is half past nine in the evening in Kolkata.
let there = project(resolved.instant(), kolkata)?;
assert_eq!(there.civil().to_string(), "2024-07-01T21:30:00");
assert_eq!(format_offset(kolkata, resolved.instant())?, "UTC+05:30");
# Ok::<(), zonecast::Error>(())
```

# DST edge cases

Interpreting a civil time is partial and multivalued around DST
transitions, so the engine carries an explicit policy rather than
inheriting whatever the underlying date library happens to do:

* A reading skipped by a spring-forward jump is shifted forward by the
  length of the gap (`02:30` across a `02:00 -> 03:00` jump becomes
  `03:30`), and the result is flagged via [`Resolved::is_adjusted`] so a
  caller can tell the user.
* A reading repeated by a fall-back set-back resolves to the **first**
  occurrence, deterministically; [`to_instant_with`] and
  [`Disambiguation::Later`] select the repeat.

Projection has no such subtlety: every instant has exactly one civil
reading per zone.

# The rule database

Zone rules come from the IANA tzdb as compiled into
[`chrono-tz`](https://docs.rs/chrono-tz); this crate deliberately does not
implement its own tzdb. The database is immutable data in the binary, so
every operation here is a pure function, safe to call from any thread with
no locking, caching or I/O.

# Crate features

* **logging** - emits a few `trace`/`debug`/`warn` messages through the
  [`log`](https://docs.rs/log) crate (transition edge cases taken, catalog
  degradation). When disabled, all logging is compiled out.
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub use crate::{
    error::Error,
    instant::Instant,
    zoned::{
        format_offset, project, to_instant, to_instant_with, Disambiguation,
        Resolved, ZonedMoment,
    },
};

#[macro_use]
mod logging;

pub mod civil;
mod error;
mod instant;
pub mod tz;
mod zoned;
