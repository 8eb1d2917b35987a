/// Exact-value counting for categorical columns (no splitting).
use crate::analysis::{sort_ranked, AnalysisError, LabelCount};
use crate::model::{Catalog, Column};

use compact_str::{CompactString, ToCompactString};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Count distinct values of a categorical column.
///
/// Applies to `type`, `rating`, and `year_added`. Values are counted
/// verbatim; no splitting or trimming beyond what cleaning already did.
/// A missing `type` is bucketed under `"Unknown"` (the cleaning pass
/// coerces the label, so absence is itself a category); missing ratings
/// and years are skipped, matching the source dashboard's counting.
///
/// Ordering is count-descending with first-seen tie-break. `limit`
/// truncates to the top entries when given; `None` returns every distinct
/// label.
pub fn count_by(
    catalog: &Catalog,
    column: Column,
    limit: Option<usize>,
) -> Result<Vec<LabelCount>, AnalysisError> {
    if !column.is_categorical() {
        return Err(AnalysisError::InvalidColumn {
            column,
            expected: "a categorical column",
        });
    }

    let mut index: HashMap<CompactString, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();

    for entry in catalog.entries() {
        let label: Option<CompactString> = match column {
            Column::Kind => Some(match entry.kind {
                Some(kind) => CompactString::const_new(kind.label()),
                None => CompactString::const_new(crate::model::UNKNOWN),
            }),
            Column::Rating => entry.rating.clone(),
            Column::YearAdded => entry.year_added.map(|y| y.to_compact_string()),
            // Unreachable: is_categorical() admits only the three above.
            _ => None,
        };
        let Some(label) = label else { continue };

        match index.get(label.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push(LabelCount { label, count: 1 });
            }
        }
    }

    sort_ranked(&mut counts);
    if let Some(n) = limit {
        counts.truncate(n);
    }
    Ok(counts)
}

/// Titles added per calendar year, ordered by year ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

/// Count titles per `year_added`, ascending by year.
///
/// Same counting contract as [`count_by`] on the `year_added` column; only
/// the presentation order differs (chronological instead of ranked). Rows
/// with no parseable added-date are skipped.
pub fn counts_per_year(catalog: &Catalog) -> Vec<YearCount> {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for entry in catalog.entries() {
        if let Some(year) = entry.year_added {
            *by_year.entry(year).or_insert(0) += 1;
        }
    }
    by_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
