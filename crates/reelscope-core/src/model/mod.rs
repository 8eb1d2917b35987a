/// Data model for the cleaned catalog table.
///
/// Re-exports the row/column types and the immutable [`Catalog`].
pub mod catalog;
pub mod entry;

pub use catalog::{Catalog, CleaningReport, UNKNOWN};
pub use entry::{CatalogEntry, Column, RawEntry, TitleKind};
