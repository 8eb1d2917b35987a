/// Per-cell absence map behind the missing-data view.
use crate::model::{Catalog, Column};

use serde::Serialize;

/// Boolean absence flags for every (row, column) cell of the cleaned table.
///
/// A generic shape: renderers may draw it as a heatmap or reduce it to
/// per-column totals. Sentinel-filled columns are never absent after
/// cleaning, so their flags are uniformly `false`.
#[derive(Debug, Clone, Serialize)]
pub struct Missingness {
    pub columns: Vec<Column>,
    /// `rows[r][c]` is `true` when `columns[c]` is absent on row `r`.
    pub rows: Vec<Vec<bool>>,
}

impl Missingness {
    /// Number of absent cells per column, in `columns` order.
    pub fn column_totals(&self) -> Vec<(Column, usize)> {
        self.columns
            .iter()
            .enumerate()
            .map(|(c, &column)| (column, self.rows.iter().filter(|r| r[c]).count()))
            .collect()
    }
}

/// Flag every absent cell across all columns of the cleaned table.
pub fn missingness(catalog: &Catalog) -> Missingness {
    let columns: Vec<Column> = Column::ALL.to_vec();
    let rows = catalog
        .entries()
        .iter()
        .map(|e| columns.iter().map(|&c| e.is_missing(c)).collect())
        .collect();
    Missingness { columns, rows }
}
