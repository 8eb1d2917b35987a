/// Text rendering for each view data shape.
use crate::chart::{bar, histogram, value_counts};

use reelscope_core::analysis::{CorrelationMatrix, CountryTypeCount, LabelCount, Missingness, YearCount};
use reelscope_core::model::{CatalogEntry, CleaningReport};
use reelscope_core::views::{ChartKind, ViewData, ViewOutput};

use std::io::{self, Write};

/// Render a view output as aligned text with bar glyphs.
pub fn render_text(out: &ViewOutput, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{}", out.chart.title)?;
    writeln!(w, "{}", "─".repeat(out.chart.title.chars().count()))?;

    match &out.data {
        ViewData::Preview(entries) => preview(entries, w)?,
        ViewData::Cleaning(report) => cleaning(report, w)?,
        ViewData::Missing(missing) => missing_map(missing, w)?,
        ViewData::Counts(counts) => label_counts(counts, w)?,
        ViewData::YearCounts(years) => year_counts(years, w)?,
        ViewData::Series(series) => series_chart(series, out.chart.kind, w)?,
        ViewData::Matrix(matrix) => heatmap(matrix, w)?,
        ViewData::Geo(groups) => geo_table(groups, w)?,
    }

    if let (Some(x), Some(y)) = (out.chart.x_label, out.chart.y_label) {
        writeln!(w, "\n  x: {x}   y: {y}")?;
    } else if let Some(x) = out.chart.x_label {
        writeln!(w, "\n  x: {x}")?;
    }
    Ok(())
}

/// Absent cell placeholder.
const NONE_CELL: &str = "-";

/// Truncate long cells so the preview stays one terminal line per row.
fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_owned()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Format a numeric value, dropping a trailing `.0` for whole numbers.
fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

fn preview(entries: &[CatalogEntry], w: &mut impl Write) -> io::Result<()> {
    writeln!(
        w,
        "{:<8} {:<24} {:<20} {:<20} {:<12} {:<5} {:<7} {:<10}",
        "type", "title", "director", "country", "date_added", "year", "rating", "duration"
    )?;
    for e in entries {
        writeln!(
            w,
            "{:<8} {:<24} {:<20} {:<20} {:<12} {:<5} {:<7} {:<10}",
            e.kind.map_or(NONE_CELL, |k| k.label()),
            clip(&e.title, 24),
            clip(&e.director, 20),
            clip(&e.country, 20),
            e.date_added
                .map_or_else(|| NONE_CELL.to_owned(), |d| d.to_string()),
            e.release_year
                .map_or_else(|| NONE_CELL.to_owned(), |y| y.to_string()),
            e.rating.as_deref().unwrap_or(NONE_CELL),
            e.duration.as_deref().unwrap_or(NONE_CELL),
        )?;
    }
    Ok(())
}

fn cleaning(report: &CleaningReport, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "rows cleaned:              {}", report.rows)?;
    writeln!(w, "director filled 'Unknown': {}", report.filled_director)?;
    writeln!(w, "cast filled 'Unknown':     {}", report.filled_cast)?;
    writeln!(w, "country filled 'Unknown':  {}", report.filled_country)?;
    writeln!(w, "unparseable dates:         {}", report.unparsed_dates)?;
    writeln!(w, "non-numeric release years: {}", report.unparsed_release_years)?;
    writeln!(w, "durations without digits:  {}", report.unparsed_durations)?;
    Ok(())
}

fn missing_map(missing: &Missingness, w: &mut impl Write) -> io::Result<()> {
    let rows = missing.rows.len();
    for (column, total) in missing.column_totals() {
        let pct = if rows > 0 {
            total as f64 / rows as f64 * 100.0
        } else {
            0.0
        };
        writeln!(
            w,
            "{:<14} {:>6}  ({pct:>5.1}%)  {}",
            column.name(),
            total,
            bar(total as f64, rows as f64),
        )?;
    }
    Ok(())
}

fn label_counts(counts: &[LabelCount], w: &mut impl Write) -> io::Result<()> {
    let width = counts
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0) as f64;
    for c in counts {
        writeln!(
            w,
            "{:<width$} {:>6}  {}",
            c.label,
            c.count,
            bar(c.count as f64, max),
        )?;
    }
    Ok(())
}

fn year_counts(years: &[YearCount], w: &mut impl Write) -> io::Result<()> {
    let max = years.iter().map(|y| y.count).max().unwrap_or(0) as f64;
    for y in years {
        writeln!(w, "{:<6} {:>6}  {}", y.year, y.count, bar(y.count as f64, max))?;
    }
    Ok(())
}

fn series_chart(series: &[f64], kind: ChartKind, w: &mut impl Write) -> io::Result<()> {
    if series.is_empty() {
        writeln!(w, "(no data)")?;
        return Ok(());
    }
    match kind {
        ChartKind::Histogram { bins } => {
            let bins = histogram(series, bins);
            let max = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
            for b in &bins {
                writeln!(
                    w,
                    "[{:>6} – {:>6}) {:>6}  {}",
                    num(b.lo),
                    num(b.hi),
                    b.count,
                    bar(b.count as f64, max),
                )?;
            }
        }
        _ => {
            // Count-plot fallback: one line per distinct value.
            let counts = value_counts(series);
            let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0) as f64;
            for (value, count) in &counts {
                writeln!(w, "{:<6} {:>6}  {}", num(*value), count, bar(*count as f64, max))?;
            }
        }
    }
    Ok(())
}

fn heatmap(matrix: &CorrelationMatrix, w: &mut impl Write) -> io::Result<()> {
    write!(w, "{:<14}", "")?;
    for column in &matrix.columns {
        write!(w, "{:>14}", column.name())?;
    }
    writeln!(w)?;
    for (i, row) in matrix.values.iter().enumerate() {
        write!(w, "{:<14}", matrix.columns[i].name())?;
        for &v in row {
            if v.is_nan() {
                write!(w, "{:>14}", NONE_CELL)?;
            } else {
                write!(w, "{v:>14.3}")?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

fn geo_table(groups: &[CountryTypeCount], w: &mut impl Write) -> io::Result<()> {
    let width = groups
        .iter()
        .map(|g| g.country.chars().count())
        .max()
        .unwrap_or(0);
    let max = groups.iter().map(|g| g.count).max().unwrap_or(0) as f64;
    for g in groups {
        writeln!(
            w,
            "{:<width$} {:<8} {:>6}  {}",
            g.country,
            g.kind.label(),
            g.count,
            bar(g.count as f64, max),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelscope_core::model::{Catalog, RawEntry};
    use reelscope_core::views::{run_view, View, ViewParams};

    fn sample() -> Catalog {
        Catalog::from_raw(vec![
            RawEntry {
                kind: Some("Movie".into()),
                title: Some("Alpha".into()),
                country: Some("France".into()),
                duration: Some("90 min".into()),
                listed_in: Some("Drama".into()),
                ..RawEntry::default()
            },
            RawEntry {
                kind: Some("TV Show".into()),
                title: Some("Beta".into()),
                country: Some("India".into()),
                duration: Some("2 Seasons".into()),
                listed_in: Some("Drama, Crime".into()),
                ..RawEntry::default()
            },
        ])
    }

    fn rendered(view: View) -> String {
        let out = run_view(&sample(), view, ViewParams::default()).unwrap();
        let mut buf = Vec::new();
        render_text(&out, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Every view must render without panicking or erroring.
    #[test]
    fn all_views_render_as_text() {
        for view in View::ALL {
            let text = rendered(view);
            assert!(!text.is_empty(), "{view} rendered nothing");
        }
    }

    #[test]
    fn ranked_bars_scale_to_the_top_count() {
        let text = rendered(View::TopGenres);
        let drama = text.lines().find(|l| l.starts_with("Drama")).unwrap();
        assert!(
            drama.matches('█').count() == crate::chart::MAX_BAR_WIDTH,
            "top label must draw a full-width bar: {drama:?}"
        );
    }

    #[test]
    fn preview_substitutes_placeholders_for_absent_cells() {
        let text = rendered(View::DatasetPreview);
        // Neither row has a date_added, so the placeholder must appear.
        assert!(text.contains(" - "), "expected absent-cell placeholder:\n{text}");
    }

    /// An empty catalog renders every view without dividing by zero.
    #[test]
    fn empty_catalog_renders_without_panic() {
        let catalog = Catalog::from_raw(Vec::new());
        for view in View::ALL {
            let out = run_view(&catalog, view, ViewParams::default()).unwrap();
            let mut buf = Vec::new();
            render_text(&out, &mut buf).unwrap();
        }
    }

    #[test]
    fn json_format_is_valid_and_tagged() {
        let out = run_view(&sample(), View::TopGenres, ViewParams::default()).unwrap();
        let mut buf = Vec::new();
        crate::render(&out, crate::OutputFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["data"]["shape"], "counts");
    }
}
