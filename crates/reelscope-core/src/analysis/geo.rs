/// Per-country, per-type grouping for the world-map view.
use crate::model::{Catalog, TitleKind, UNKNOWN};

use compact_str::{CompactString, ToCompactString};
use serde::Serialize;
use std::collections::BTreeMap;

/// Title count for one (country, type) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryTypeCount {
    pub country: CompactString,
    pub kind: TitleKind,
    pub count: u64,
}

/// Group titles by primary production country and type.
///
/// Only the first comma-separated country on each row counts —
/// co-production countries beyond the first are ignored for the map.
/// Groups whose country is the `"Unknown"` sentinel are excluded entirely.
/// Rows with an unparseable type are skipped (there is no type to group
/// under).
///
/// Output order is country ascending, then type ascending, so a renderer
/// keyed on the type dimension (e.g. an animation frame per type) gets a
/// deterministic sequence.
pub fn counts_by_country_and_type(catalog: &Catalog) -> Vec<CountryTypeCount> {
    let mut groups: BTreeMap<(CompactString, TitleKind), u64> = BTreeMap::new();

    for entry in catalog.entries() {
        let Some(kind) = entry.kind else { continue };
        // `country` is never empty after cleaning, so `next()` always yields.
        let first = entry.country.split(',').next().unwrap_or("").trim();
        if first.is_empty() || first == UNKNOWN {
            continue;
        }
        *groups.entry((first.to_compact_string(), kind)).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|((country, kind), count)| CountryTypeCount {
            country,
            kind,
            count,
        })
        .collect()
}
