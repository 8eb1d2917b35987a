/// Aggregation queries over the cleaned catalog.
///
/// Every function here is a pure, idempotent read of the immutable
/// [`Catalog`](crate::model::Catalog): same table and parameters always
/// produce the same output, including tie order. A failed aggregation
/// never touches the shared table, so other views are unaffected.
pub mod correlation;
pub mod count_by;
pub mod geo;
pub mod missing;
pub mod slice;
pub mod top_n;

use crate::model::Column;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use count_by::{count_by, counts_per_year, YearCount};
pub use geo::{counts_by_country_and_type, CountryTypeCount};
pub use missing::{missingness, Missingness};
pub use slice::{numeric_column, slice_by_type};
pub use top_n::top_n;

use compact_str::CompactString;
use serde::Serialize;

/// An aggregation request that does not fit the named column's shape.
///
/// This is a rejected request, not a recoverable condition: the caller
/// picked the wrong column for the aggregator, so there is nothing to retry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("column `{column}` is not {expected}")]
    InvalidColumn {
        column: Column,
        expected: &'static str,
    },
}

/// One label with its occurrence count, the output shape shared by the
/// ranked aggregators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: CompactString,
    pub count: u64,
}

impl LabelCount {
    pub fn new(label: impl Into<CompactString>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Sort label counts descending by count, keeping first-seen order for ties.
///
/// Callers build the vec in first-seen order, so a stable sort on the count
/// alone is exactly the required tie-break.
pub(crate) fn sort_ranked(counts: &mut [LabelCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}
