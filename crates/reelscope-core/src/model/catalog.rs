/// The cleaned, immutable catalog table and the cleaning pass that builds it.
///
/// Cleaning is total and deterministic: malformed fields never fail the
/// pass, they degrade to `"Unknown"` or to an absent value. The table keeps
/// the input's row count and order, and once built it is read-only — views
/// share one snapshot (plain reference or `Arc`) with no mutation path.
use crate::model::entry::{CatalogEntry, RawEntry, TitleKind};

use chrono::{Datelike, NaiveDate};
use compact_str::{CompactString, ToCompactString};
use serde::Serialize;
use tracing::info;

/// Sentinel substituted for missing director/cast/country values.
pub const UNKNOWN: &str = "Unknown";

/// Tallies gathered while cleaning, for the data-cleaning summary view.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CleaningReport {
    /// Total rows cleaned (always equals the catalog length).
    pub rows: usize,
    /// Rows whose director/cast/country was filled with the sentinel.
    pub filled_director: usize,
    pub filled_cast: usize,
    pub filled_country: usize,
    /// Rows whose `date_added` was present but unparseable.
    pub unparsed_dates: usize,
    /// Rows whose `release_year` was present but non-numeric.
    pub unparsed_release_years: usize,
    /// Rows whose `duration` contained no digits.
    pub unparsed_durations: usize,
}

/// The cleaned table. Field access goes through [`Catalog::entries`]; there
/// is deliberately no mutable accessor.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    report: CleaningReport,
}

impl Catalog {
    /// Run the cleaning pass over raw rows.
    ///
    /// Never fails: every malformed field is recovered locally per the
    /// rules on [`CatalogEntry`]. Output row count and order match the
    /// input exactly; no rows are dropped here.
    pub fn from_raw(raw: Vec<RawEntry>) -> Self {
        let mut report = CleaningReport {
            rows: raw.len(),
            ..CleaningReport::default()
        };

        let entries: Vec<CatalogEntry> = raw.into_iter().map(|r| clean_row(r, &mut report)).collect();

        info!(
            rows = report.rows,
            filled_director = report.filled_director,
            filled_cast = report.filled_cast,
            filled_country = report.filled_country,
            unparsed_dates = report.unparsed_dates,
            "catalog cleaned"
        );

        Self { entries, report }
    }

    /// The cleaned rows, in input order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Tallies from the cleaning pass.
    pub fn report(&self) -> &CleaningReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Clean a single row, updating the report tallies.
fn clean_row(raw: RawEntry, report: &mut CleaningReport) -> CatalogEntry {
    let director = fill_unknown(raw.director, &mut report.filled_director);
    let cast = fill_unknown(raw.cast, &mut report.filled_cast);
    let country = fill_unknown(raw.country, &mut report.filled_country);

    let date_added = match raw.date_added.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => {
            let parsed = parse_date_lenient(s);
            if parsed.is_none() {
                report.unparsed_dates += 1;
            }
            parsed
        }
    };

    let release_year = match raw.release_year.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => {
            let parsed = parse_year(s);
            if parsed.is_none() {
                report.unparsed_release_years += 1;
            }
            parsed
        }
    };

    let duration = non_empty(raw.duration);
    let duration_num = match duration.as_deref() {
        None => None,
        Some(s) => {
            let parsed = first_digit_run(s);
            if parsed.is_none() {
                report.unparsed_durations += 1;
            }
            parsed
        }
    };

    CatalogEntry {
        kind: raw.kind.as_deref().and_then(TitleKind::parse),
        title: raw
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .into(),
        director,
        cast,
        country,
        date_added,
        release_year,
        rating: non_empty(raw.rating),
        duration,
        listed_in: non_empty(raw.listed_in),
        year_added: date_added.map(|d| d.year()),
        duration_num,
    }
}

/// Missing or whitespace-only becomes the `"Unknown"` sentinel.
fn fill_unknown(value: Option<String>, filled: &mut usize) -> CompactString {
    match value.as_deref().map(str::trim) {
        None | Some("") => {
            *filled += 1;
            CompactString::const_new(UNKNOWN)
        }
        Some(s) => s.to_compact_string(),
    }
}

/// Missing or whitespace-only becomes `None`; otherwise trimmed.
fn non_empty(value: Option<String>) -> Option<CompactString> {
    match value.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.to_compact_string()),
    }
}

/// Lenient calendar-date parser for the `date_added` column.
///
/// The export's native format is `"September 9, 2019"` (sometimes with a
/// stray leading space); ISO and US slash dates are accepted as well since
/// re-exports through spreadsheets rewrite the column. Anything else is
/// unparseable and the field stays absent.
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 4] = ["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d %B %Y"];

    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Coerce a year cell to an integer.
///
/// Accepts plain integers and float spellings like `"2019.0"` (spreadsheet
/// round-trips produce those); everything else is absent.
pub fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f.trunc() as i32)
    } else {
        None
    }
}

/// Extract the first contiguous run of ASCII digits as a number.
///
/// `"90 min"` → 90, `"3 Seasons"` → 3, `"Season 1"` → 1. `None` when the
/// string contains no digits.
pub fn first_digit_run(s: &str) -> Option<f64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = &s[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().ok()
}
