/// Type-filtered slices and numeric projections.
///
/// Behind the duration-distribution views: movies project their runtime in
/// minutes, shows their season count, both from the same derived column.
use crate::analysis::AnalysisError;
use crate::model::{Catalog, CatalogEntry, Column, TitleKind};

/// Borrow the rows of one title type, preserving table order.
///
/// A type with no rows yields an empty slice, never an error.
pub fn slice_by_type(catalog: &Catalog, kind: TitleKind) -> Vec<&CatalogEntry> {
    catalog
        .entries()
        .iter()
        .filter(|e| e.kind == Some(kind))
        .collect()
}

/// Project a numeric column from a row slice, dropping absent values.
///
/// Errors with [`AnalysisError::InvalidColumn`] for non-numeric columns.
pub fn numeric_column(rows: &[&CatalogEntry], column: Column) -> Result<Vec<f64>, AnalysisError> {
    if !column.is_numeric() {
        return Err(AnalysisError::InvalidColumn {
            column,
            expected: "a numeric column",
        });
    }
    Ok(rows.iter().filter_map(|e| e.numeric_value(column)).collect())
}
