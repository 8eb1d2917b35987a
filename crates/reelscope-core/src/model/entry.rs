/// A single catalog entry (one row of the dataset).
///
/// Entries exist in two forms: [`RawEntry`], deserialized straight from the
/// CSV export with every field optional, and [`CatalogEntry`], the cleaned
/// form produced once by the cleaning pass and never mutated afterwards.
use chrono::NaiveDate;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Whether an entry is a film or an episodic series.
///
/// The dataset uses exactly two type labels; anything else is treated as
/// unparseable and degrades to `None` during cleaning rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TitleKind {
    Movie,
    TvShow,
}

impl TitleKind {
    /// Human-readable label, matching the dataset's own spelling.
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
        }
    }

    /// Parse the dataset's type label. Returns `None` for anything that is
    /// not exactly one of the two known labels (after trimming).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Movie" => Some(Self::Movie),
            "TV Show" => Some(Self::TvShow),
            _ => None,
        }
    }
}

impl std::fmt::Display for TitleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Column identifiers for the cleaned table.
///
/// Aggregators take a `Column` and reject shapes they cannot handle
/// (e.g. an exploded top-N over a numeric column), so the classification
/// helpers below are the single source of truth for which aggregator
/// accepts which column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Kind,
    Title,
    Director,
    Cast,
    Country,
    DateAdded,
    ReleaseYear,
    Rating,
    Duration,
    ListedIn,
    // Derived during cleaning.
    YearAdded,
    DurationNum,
}

impl Column {
    /// All columns of the cleaned table, base columns first, derived last.
    pub const ALL: [Column; 12] = [
        Column::Kind,
        Column::Title,
        Column::Director,
        Column::Cast,
        Column::Country,
        Column::DateAdded,
        Column::ReleaseYear,
        Column::Rating,
        Column::Duration,
        Column::ListedIn,
        Column::YearAdded,
        Column::DurationNum,
    ];

    /// Snake-case column name as it appears in the source dataset.
    pub fn name(self) -> &'static str {
        match self {
            Self::Kind => "type",
            Self::Title => "title",
            Self::Director => "director",
            Self::Cast => "cast",
            Self::Country => "country",
            Self::DateAdded => "date_added",
            Self::ReleaseYear => "release_year",
            Self::Rating => "rating",
            Self::Duration => "duration",
            Self::ListedIn => "listed_in",
            Self::YearAdded => "year_added",
            Self::DurationNum => "duration_num",
        }
    }

    /// `true` for text columns that pack several comma-separated values into
    /// one field and must be exploded before counting.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Self::Director | Self::Cast | Self::Country | Self::ListedIn
        )
    }

    /// `true` for columns counted by exact value (no splitting).
    pub fn is_categorical(self) -> bool {
        matches!(self, Self::Kind | Self::Rating | Self::YearAdded)
    }

    /// `true` for numeric-or-absent columns usable in correlations and
    /// numeric projections.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::ReleaseYear | Self::YearAdded | Self::DurationNum)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row exactly as it comes off the CSV export.
///
/// Every field is optional: the loader maps empty cells to `None`, and the
/// cleaning pass decides per-field whether absence becomes a sentinel value
/// or stays absent. Unknown extra columns in the file (e.g. `show_id`) are
/// ignored by the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
}

/// A cleaned catalog row.
///
/// Produced once by [`Catalog::from_raw`](crate::model::Catalog::from_raw)
/// and immutable from then on — every view reads the same snapshot.
///
/// Invariants upheld by the cleaning pass:
/// - `director`, `cast`, `country` are never absent; missing input becomes
///   the literal `"Unknown"` sentinel.
/// - `release_year` and `year_added` are numeric or absent, never a
///   non-numeric string.
/// - `duration_num` is a non-negative number or absent.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// `None` when the type cell was missing or not a known label.
    pub kind: Option<TitleKind>,
    pub title: CompactString,
    /// Comma-separated director names, `"Unknown"` when missing.
    pub director: CompactString,
    /// Comma-separated cast names, `"Unknown"` when missing.
    pub cast: CompactString,
    /// Comma-separated production countries, `"Unknown"` when missing.
    pub country: CompactString,
    /// Date the title was added to the catalog, absent when unparseable.
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    /// Maturity rating code (e.g. `TV-MA`), absent when missing.
    pub rating: Option<CompactString>,
    /// Original free-text duration, e.g. `"90 min"` or `"3 Seasons"`.
    pub duration: Option<CompactString>,
    /// Comma-separated genre names, absent when missing.
    pub listed_in: Option<CompactString>,
    /// Calendar year of `date_added`, derived during cleaning.
    pub year_added: Option<i32>,
    /// Leading numeric quantity of `duration` (minutes for movies, season
    /// count for shows), derived during cleaning.
    pub duration_num: Option<f64>,
}

impl CatalogEntry {
    /// The raw comma-separated text behind a list-valued column, or `None`
    /// if the field is absent on this row.
    ///
    /// Returns `None` for non-list columns; callers validate the column
    /// shape with [`Column::is_list`] before counting.
    pub fn list_value(&self, column: Column) -> Option<&str> {
        match column {
            Column::Director => Some(&self.director),
            Column::Cast => Some(&self.cast),
            Column::Country => Some(&self.country),
            Column::ListedIn => self.listed_in.as_deref(),
            _ => None,
        }
    }

    /// The numeric value behind a numeric column, or `None` if absent on
    /// this row (or if the column is not numeric).
    pub fn numeric_value(&self, column: Column) -> Option<f64> {
        match column {
            Column::ReleaseYear => self.release_year.map(f64::from),
            Column::YearAdded => self.year_added.map(f64::from),
            Column::DurationNum => self.duration_num,
            _ => None,
        }
    }

    /// Whether the given column is absent on this row.
    ///
    /// The sentinel-filled columns (`director`, `cast`, `country`) are never
    /// missing after cleaning; their flag is always `false`.
    pub fn is_missing(&self, column: Column) -> bool {
        match column {
            Column::Kind => self.kind.is_none(),
            Column::Title => self.title.is_empty(),
            Column::Director | Column::Cast | Column::Country => false,
            Column::DateAdded => self.date_added.is_none(),
            Column::ReleaseYear => self.release_year.is_none(),
            Column::Rating => self.rating.is_none(),
            Column::Duration => self.duration.is_none(),
            Column::ListedIn => self.listed_in.is_none(),
            Column::YearAdded => self.year_added.is_none(),
            Column::DurationNum => self.duration_num.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_kind_parses_known_labels() {
        assert_eq!(TitleKind::parse("Movie"), Some(TitleKind::Movie));
        assert_eq!(TitleKind::parse("TV Show"), Some(TitleKind::TvShow));
        assert_eq!(TitleKind::parse("  Movie "), Some(TitleKind::Movie));
    }

    /// Unknown labels must degrade to `None`, not to an arbitrary variant.
    #[test]
    fn title_kind_rejects_unknown_labels() {
        assert_eq!(TitleKind::parse("movie"), None);
        assert_eq!(TitleKind::parse("Documentary"), None);
        assert_eq!(TitleKind::parse(""), None);
    }

    /// Movies sort before TV shows so grouped output has a stable type order.
    #[test]
    fn title_kind_orders_movie_first() {
        assert!(TitleKind::Movie < TitleKind::TvShow);
    }

    #[test]
    fn column_classification_is_disjoint_for_aggregators() {
        for col in Column::ALL {
            assert!(
                !(col.is_list() && col.is_categorical()),
                "{col} classified as both list and categorical"
            );
            assert!(
                !(col.is_list() && col.is_numeric()),
                "{col} classified as both list and numeric"
            );
        }
    }

    #[test]
    fn list_columns_are_exactly_the_exploded_four() {
        let list: Vec<Column> = Column::ALL.into_iter().filter(|c| c.is_list()).collect();
        assert_eq!(
            list,
            vec![
                Column::Director,
                Column::Cast,
                Column::Country,
                Column::ListedIn
            ]
        );
    }
}
