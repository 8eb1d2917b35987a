/// The fourteen dashboard views and their dispatch table.
///
/// Each view resolves to one pure aggregation over the shared [`Catalog`]
/// plus a [`ChartSpec`] describing how a frontend should draw the result.
/// There is no conditional chain per view in the frontends: they consume
/// the generic [`ViewData`] shapes and the descriptor, nothing else.
use crate::analysis::{
    correlation_matrix, count_by, counts_by_country_and_type, counts_per_year, missingness,
    numeric_column, slice_by_type, top_n, AnalysisError, CorrelationMatrix, CountryTypeCount,
    LabelCount, Missingness, YearCount,
};
use crate::model::{Catalog, CatalogEntry, CleaningReport, Column, TitleKind};

use serde::Serialize;
use tracing::debug;

/// Rows shown by the dataset-preview view.
const PREVIEW_ROWS: usize = 5;

/// Numeric columns fed to the correlation view.
const CORRELATION_COLUMNS: [Column; 3] =
    [Column::ReleaseYear, Column::YearAdded, Column::DurationNum];

/// Identifier for one of the fourteen dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    DatasetPreview,
    DataCleaning,
    MissingMap,
    MoviesVsShows,
    TitlesPerYear,
    TopGenres,
    TopCountries,
    Ratings,
    MovieDurations,
    ShowSeasons,
    TopActors,
    TopDirectors,
    Correlation,
    WorldMap,
}

impl View {
    /// All views, in the dashboard's menu order.
    pub const ALL: [View; 14] = [
        View::DatasetPreview,
        View::DataCleaning,
        View::MissingMap,
        View::MoviesVsShows,
        View::TitlesPerYear,
        View::TopGenres,
        View::TopCountries,
        View::Ratings,
        View::MovieDurations,
        View::ShowSeasons,
        View::TopActors,
        View::TopDirectors,
        View::Correlation,
        View::WorldMap,
    ];

    /// Stable kebab-case identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Self::DatasetPreview => "dataset-preview",
            Self::DataCleaning => "data-cleaning",
            Self::MissingMap => "missing-map",
            Self::MoviesVsShows => "movies-vs-shows",
            Self::TitlesPerYear => "titles-per-year",
            Self::TopGenres => "top-genres",
            Self::TopCountries => "top-countries",
            Self::Ratings => "ratings",
            Self::MovieDurations => "movie-durations",
            Self::ShowSeasons => "show-seasons",
            Self::TopActors => "top-actors",
            Self::TopDirectors => "top-directors",
            Self::Correlation => "correlation",
            Self::WorldMap => "world-map",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error for a view name that matches no slug.
#[derive(Debug, thiserror::Error)]
#[error("unknown view `{0}` (try one of: {views})", views = View::ALL.map(View::slug).join(", "))]
pub struct UnknownView(pub String);

impl std::str::FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.slug() == s)
            .ok_or_else(|| UnknownView(s.to_owned()))
    }
}

/// Per-request knobs. Only the ranked views read `top_n`.
#[derive(Debug, Clone, Copy)]
pub struct ViewParams {
    pub top_n: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

/// How a frontend should draw a view's data. Purely descriptive — no
/// rendering technology leaks into this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Plain rows, no chart.
    Table,
    /// Key/value summary text.
    Summary,
    /// Row-by-column boolean heatmap.
    MissingMap,
    /// Vertical bars, one per label.
    Bar,
    /// Horizontal bars, one per label (ranked views).
    BarHorizontal,
    /// Binned distribution of a numeric series.
    Histogram { bins: usize },
    /// One bar per distinct value of a small numeric series.
    CountPlot,
    /// Numeric matrix with colour-coded cells.
    Heatmap,
    /// World map shaded per country, one frame per title type.
    Choropleth,
}

/// Rendering descriptor attached to every view output.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<&'static str>,
    pub y_label: Option<&'static str>,
}

/// The generic data shapes a view can produce.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum ViewData {
    Preview(Vec<CatalogEntry>),
    Cleaning(CleaningReport),
    Missing(Missingness),
    Counts(Vec<LabelCount>),
    YearCounts(Vec<YearCount>),
    Series(Vec<f64>),
    Matrix(CorrelationMatrix),
    Geo(Vec<CountryTypeCount>),
}

/// One rendered-ready view result: data plus chart descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct ViewOutput {
    pub view: View,
    pub data: ViewData,
    pub chart: ChartSpec,
}

/// Resolve a view against the shared catalog.
///
/// Pure and idempotent: the catalog is read-only, so repeated calls with
/// the same parameters give identical output, and a failing view cannot
/// affect any other view's data.
pub fn run_view(
    catalog: &Catalog,
    view: View,
    params: ViewParams,
) -> Result<ViewOutput, AnalysisError> {
    debug!(view = %view, top_n = params.top_n, rows = catalog.len(), "running view");
    let n = params.top_n;

    let (data, chart) = match view {
        View::DatasetPreview => (
            ViewData::Preview(catalog.entries().iter().take(PREVIEW_ROWS).cloned().collect()),
            spec(ChartKind::Table, "Dataset Preview".into(), None, None),
        ),
        View::DataCleaning => (
            ViewData::Cleaning(catalog.report().clone()),
            spec(ChartKind::Summary, "Data Cleaning".into(), None, None),
        ),
        View::MissingMap => (
            ViewData::Missing(missingness(catalog)),
            spec(
                ChartKind::MissingMap,
                "Missing Data Heatmap".into(),
                None,
                None,
            ),
        ),
        View::MoviesVsShows => (
            ViewData::Counts(count_by(catalog, Column::Kind, None)?),
            spec(
                ChartKind::Bar,
                "Movies vs TV Shows".into(),
                Some("Type"),
                Some("Number of Titles"),
            ),
        ),
        View::TitlesPerYear => (
            ViewData::YearCounts(counts_per_year(catalog)),
            spec(
                ChartKind::Bar,
                "Titles Added Per Year".into(),
                Some("Year Added"),
                Some("Number of Titles"),
            ),
        ),
        View::TopGenres => (
            ViewData::Counts(top_n(catalog, Column::ListedIn, n)?),
            spec(
                ChartKind::BarHorizontal,
                format!("Top {n} Genres"),
                Some("Number of Titles"),
                None,
            ),
        ),
        View::TopCountries => (
            ViewData::Counts(top_n(catalog, Column::Country, n)?),
            spec(
                ChartKind::BarHorizontal,
                format!("Top {n} Countries"),
                Some("Number of Titles"),
                None,
            ),
        ),
        View::Ratings => (
            ViewData::Counts(count_by(catalog, Column::Rating, Some(n))?),
            spec(
                ChartKind::BarHorizontal,
                "Ratings Distribution".into(),
                Some("Number of Titles"),
                None,
            ),
        ),
        View::MovieDurations => {
            let movies = slice_by_type(catalog, TitleKind::Movie);
            (
                ViewData::Series(numeric_column(&movies, Column::DurationNum)?),
                spec(
                    ChartKind::Histogram { bins: 30 },
                    "Distribution of Movie Durations".into(),
                    Some("Duration (minutes)"),
                    Some("Count"),
                ),
            )
        }
        View::ShowSeasons => {
            let shows = slice_by_type(catalog, TitleKind::TvShow);
            (
                ViewData::Series(numeric_column(&shows, Column::DurationNum)?),
                spec(
                    ChartKind::CountPlot,
                    "Number of Seasons in TV Shows".into(),
                    Some("Seasons"),
                    Some("Count"),
                ),
            )
        }
        View::TopActors => (
            ViewData::Counts(top_n(catalog, Column::Cast, n)?),
            spec(
                ChartKind::BarHorizontal,
                format!("Top {n} Actors"),
                Some("Number of Appearances"),
                None,
            ),
        ),
        View::TopDirectors => (
            ViewData::Counts(top_n(catalog, Column::Director, n)?),
            spec(
                ChartKind::BarHorizontal,
                format!("Top {n} Directors"),
                Some("Number of Titles Directed"),
                None,
            ),
        ),
        View::Correlation => (
            ViewData::Matrix(correlation_matrix(catalog, &CORRELATION_COLUMNS)?),
            spec(ChartKind::Heatmap, "Correlation Heatmap".into(), None, None),
        ),
        View::WorldMap => (
            ViewData::Geo(counts_by_country_and_type(catalog)),
            spec(
                ChartKind::Choropleth,
                "Global Distribution of Movies and TV Shows".into(),
                None,
                None,
            ),
        ),
    };

    Ok(ViewOutput { view, data, chart })
}

fn spec(
    kind: ChartKind,
    title: String,
    x_label: Option<&'static str>,
    y_label: Option<&'static str>,
) -> ChartSpec {
    ChartSpec {
        kind,
        title,
        x_label,
        y_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawEntry;

    fn sample_catalog() -> Catalog {
        let rows = vec![
            RawEntry {
                kind: Some("Movie".into()),
                title: Some("A".into()),
                cast: Some("Actor One, Actor Two".into()),
                country: Some("United States".into()),
                date_added: Some("September 9, 2019".into()),
                release_year: Some("2019".into()),
                rating: Some("PG-13".into()),
                duration: Some("90 min".into()),
                listed_in: Some("Drama, Comedy".into()),
                ..RawEntry::default()
            },
            RawEntry {
                kind: Some("TV Show".into()),
                title: Some("B".into()),
                country: Some("India, United States".into()),
                date_added: Some("March 2, 2018".into()),
                release_year: Some("2017".into()),
                rating: Some("TV-MA".into()),
                duration: Some("3 Seasons".into()),
                listed_in: Some("Drama".into()),
                ..RawEntry::default()
            },
        ];
        Catalog::from_raw(rows)
    }

    /// Every slug must parse back to its view (the CLI contract).
    #[test]
    fn slugs_round_trip() {
        for view in View::ALL {
            assert_eq!(view.slug().parse::<View>().unwrap(), view);
        }
    }

    #[test]
    fn unknown_slug_is_rejected_with_candidates() {
        let err = "nope".parse::<View>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`nope`"), "must echo the rejected name: {msg}");
        // The full menu is joined into the message, first slug to last.
        assert!(msg.contains("dataset-preview"));
        assert!(msg.contains("world-map"));
    }

    /// The whole menu must resolve on a small catalog without error.
    #[test]
    fn every_view_runs() {
        let catalog = sample_catalog();
        for view in View::ALL {
            let out = run_view(&catalog, view, ViewParams::default())
                .unwrap_or_else(|e| panic!("view {view} failed: {e}"));
            assert_eq!(out.view, view);
        }
    }

    #[test]
    fn ranked_views_respect_top_n() {
        let catalog = sample_catalog();
        let out = run_view(&catalog, View::TopGenres, ViewParams { top_n: 1 }).unwrap();
        match out.data {
            ViewData::Counts(counts) => {
                assert_eq!(counts.len(), 1);
                assert_eq!(counts[0].label, "Drama");
            }
            other => panic!("expected counts, got {other:?}"),
        }
        assert_eq!(out.chart.kind, ChartKind::BarHorizontal);
    }

    #[test]
    fn preview_is_capped_at_five_rows() {
        let rows = (0..20)
            .map(|i| RawEntry {
                kind: Some("Movie".into()),
                title: Some(format!("t{i}")),
                ..RawEntry::default()
            })
            .collect();
        let catalog = Catalog::from_raw(rows);
        let out = run_view(&catalog, View::DatasetPreview, ViewParams::default()).unwrap();
        match out.data {
            ViewData::Preview(entries) => assert_eq!(entries.len(), 5),
            other => panic!("expected preview rows, got {other:?}"),
        }
    }

    /// The duration views slice by type before projecting.
    #[test]
    fn duration_views_split_movies_from_shows() {
        let catalog = sample_catalog();
        let movies = run_view(&catalog, View::MovieDurations, ViewParams::default()).unwrap();
        let shows = run_view(&catalog, View::ShowSeasons, ViewParams::default()).unwrap();
        match (movies.data, shows.data) {
            (ViewData::Series(m), ViewData::Series(s)) => {
                assert_eq!(m, vec![90.0]);
                assert_eq!(s, vec![3.0]);
            }
            other => panic!("expected two series, got {other:?}"),
        }
    }

    /// Views must be serializable for the JSON output path.
    #[test]
    fn output_serializes_to_json() {
        let catalog = sample_catalog();
        let out = run_view(&catalog, View::WorldMap, ViewParams::default()).unwrap();
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("choropleth"), "chart kind tag missing: {json}");
    }
}
