/// Exploded top-N ranking over comma-separated list columns.
use crate::analysis::{sort_ranked, AnalysisError, LabelCount};
use crate::model::{Catalog, Column};

use compact_str::{CompactString, ToCompactString};
use std::collections::HashMap;

/// Rank the `n` most frequent values of an exploded list column.
///
/// Each row's field is split on commas and trimmed; every piece contributes
/// one count, so a row listing three countries increments three labels. The
/// `"Unknown"` sentinel counts like any other label. Rows where the field is
/// absent contribute nothing, and the row itself is never dropped from the
/// catalog for having many values.
///
/// Ordering is count-descending with ties broken by first appearance in the
/// table (row order, left-to-right within a field). `n == 0` yields an empty
/// vec; fewer than `n` distinct labels yields them all.
///
/// Errors with [`AnalysisError::InvalidColumn`] when `column` is not one of
/// the four list-valued columns.
pub fn top_n(catalog: &Catalog, column: Column, n: usize) -> Result<Vec<LabelCount>, AnalysisError> {
    if !column.is_list() {
        return Err(AnalysisError::InvalidColumn {
            column,
            expected: "a comma-separated list column",
        });
    }

    // `counts` stays in first-seen order; `index` maps label → position.
    let mut index: HashMap<CompactString, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();

    for entry in catalog.entries() {
        let Some(field) = entry.list_value(column) else {
            continue;
        };
        for piece in field.split(',') {
            let label = piece.trim();
            if label.is_empty() {
                continue;
            }
            match index.get(label) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(label.to_compact_string(), counts.len());
                    counts.push(LabelCount::new(label, 1));
                }
            }
        }
    }

    sort_ranked(&mut counts);
    counts.truncate(n);
    Ok(counts)
}
