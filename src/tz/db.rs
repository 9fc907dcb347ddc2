use chrono_tz::TZ_VARIANTS;

use crate::error::Error;

/// A provider of zone identifiers: the "zone database" collaborator.
///
/// The catalog does not hard-code where identifiers come from. Production
/// code injects [`BundledSource`]; tests inject doubles, including failing
/// ones, to exercise the degradation path. A source reports failure with
/// [`Error::ZoneDatabaseUnavailable`].
pub trait ZoneSource {
    /// Returns all canonical zone identifiers, in stable order.
    fn zone_ids(&self) -> Result<Vec<&'static str>, Error>;
}

/// The zone identifiers compiled into the binary with the rule database.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledSource;

impl ZoneSource for BundledSource {
    fn zone_ids(&self) -> Result<Vec<&'static str>, Error> {
        Ok(TZ_VARIANTS.iter().map(|tz| tz.name()).collect())
    }
}

/// The minimal catalog used when the zone database is unavailable.
///
/// One well-known zone per region plus UTC. Every entry is a canonical IANA
/// identifier, so zone resolution keeps working against a degraded catalog.
const FALLBACK_ZONES: &[&str] = &[
    "UTC",
    "Africa/Cairo",
    "America/Los_Angeles",
    "America/New_York",
    "America/Sao_Paulo",
    "America/Toronto",
    "Asia/Kolkata",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Europe/London",
    "Europe/Paris",
    "Pacific/Auckland",
];

/// The set of valid zone identifiers, with substring search.
///
/// The catalog is read-only process-wide reference data: build one at
/// startup, share it by reference, and query it freely from any thread. It
/// is the source of choices for a zone-picker UI; resolution itself goes
/// through [`ZoneId`](crate::tz::ZoneId), which consults the rule database
/// directly.
///
/// # Degradation
///
/// Loading never fails. If the injected [`ZoneSource`] reports an error (or
/// yields nothing), the catalog degrades to a fixed, documented list of
/// well-known identifiers, rather than being empty or erroring on every
/// later call. The degradation is observable via
/// [`ZoneCatalog::is_fallback`].
///
/// # Example
///
/// ```
/// use zonecast::tz::ZoneCatalog;
///
/// let catalog = ZoneCatalog::bundled();
/// let hits = catalog.filter("toronto");
/// assert_eq!(hits, vec!["America/Toronto"]);
/// ```
#[derive(Clone, Debug)]
pub struct ZoneCatalog {
    ids: Vec<&'static str>,
    fallback: bool,
}

impl ZoneCatalog {
    /// Loads the catalog from the given source, degrading to the fixed
    /// fallback list if the source fails or is empty.
    pub fn load(source: &dyn ZoneSource) -> ZoneCatalog {
        match source.zone_ids() {
            Ok(ids) if !ids.is_empty() => {
                ZoneCatalog { ids, fallback: false }
            }
            _result => {
                warn!(
                    "zone database unavailable ({_result:?}), \
                     degrading to the fixed fallback catalog",
                );
                ZoneCatalog { ids: FALLBACK_ZONES.to_vec(), fallback: true }
            }
        }
    }

    /// Loads the catalog from the compiled-in zone database.
    pub fn bundled() -> ZoneCatalog {
        ZoneCatalog::load(&BundledSource)
    }

    /// Returns all identifiers in this catalog, in stable order.
    ///
    /// The bundled source yields the tzdb's identifiers in lexical order.
    #[inline]
    pub fn list(&self) -> &[&'static str] {
        &self.ids
    }

    /// Returns the identifiers containing `query`, case-insensitively,
    /// preserving [`list`](ZoneCatalog::list) order.
    ///
    /// An empty query matches everything. There is no pattern syntax; the
    /// query is a literal substring, which is what a search-as-you-type box
    /// wants.
    pub fn filter(&self, query: &str) -> Vec<&'static str> {
        if query.is_empty() {
            return self.ids.clone();
        }
        let query = query.to_ascii_lowercase();
        self.ids
            .iter()
            .copied()
            .filter(|id| id.to_ascii_lowercase().contains(&query))
            .collect()
    }

    /// Returns true when `name` is in this catalog, compared
    /// case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.iter().any(|id| id.eq_ignore_ascii_case(name))
    }

    /// Returns true when this catalog is the fixed fallback list rather
    /// than the injected source's data.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnavailableSource;

    impl ZoneSource for UnavailableSource {
        fn zone_ids(&self) -> Result<Vec<&'static str>, Error> {
            Err(Error::ZoneDatabaseUnavailable)
        }
    }

    struct EmptySource;

    impl ZoneSource for EmptySource {
        fn zone_ids(&self) -> Result<Vec<&'static str>, Error> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn bundled_catalog_is_not_fallback() {
        let catalog = ZoneCatalog::bundled();
        assert!(!catalog.is_fallback());
        assert!(catalog.contains("UTC"));
        assert!(catalog.contains("America/Toronto"));
        assert!(catalog.list().len() > 100);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = ZoneCatalog::bundled();
        let hits = catalog.filter("toronto");
        assert_eq!(hits, vec!["America/Toronto"]);
        assert!(!catalog.filter("TORONTO").is_empty());
        assert!(!catalog.filter("kolk").contains(&"Europe/London"));
    }

    #[test]
    fn filter_preserves_list_order() {
        let catalog = ZoneCatalog::bundled();
        let hits = catalog.filter("america/n");
        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| {
                catalog.list().iter().position(|id| id == hit).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_query_returns_everything() {
        let catalog = ZoneCatalog::bundled();
        assert_eq!(catalog.filter(""), catalog.list());
    }

    #[test]
    fn unavailable_source_degrades_to_fallback() {
        let catalog = ZoneCatalog::load(&UnavailableSource);
        assert!(catalog.is_fallback());
        assert!(catalog.contains("UTC"));
        assert_eq!(catalog.filter("toronto"), vec!["America/Toronto"]);
    }

    #[test]
    fn empty_source_degrades_to_fallback() {
        let catalog = ZoneCatalog::load(&EmptySource);
        assert!(catalog.is_fallback());
        assert!(!catalog.list().is_empty());
    }

    #[test]
    fn fallback_zones_all_resolve() {
        for name in FALLBACK_ZONES {
            assert!(
                crate::tz::ZoneId::new(name).is_ok(),
                "fallback zone {name} must exist in the rule database",
            );
        }
    }
}
