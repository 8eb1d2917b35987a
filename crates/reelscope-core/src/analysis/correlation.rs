/// Pairwise Pearson correlation over the numeric columns.
use crate::analysis::AnalysisError;
use crate::model::{Catalog, Column};

use serde::Serialize;

/// Symmetric matrix of Pearson coefficients, one row/column per requested
/// column. Undefined pairs (fewer than two jointly-present observations,
/// or a zero-variance column) hold `NaN`, never zero.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<Column>,
    /// `values[i][j]` is the coefficient between `columns[i]` and
    /// `columns[j]`. Diagonal entries are 1.0 for columns with at least two
    /// present values.
    pub values: Vec<Vec<f64>>,
}

/// Compute pairwise-complete Pearson correlations.
///
/// Each pair uses exactly the rows where *both* of its columns are present,
/// independent of the other columns' completeness (so a row missing
/// `duration_num` still contributes to the release-year/year-added pair).
///
/// Errors with [`AnalysisError::InvalidColumn`] if any requested column is
/// not numeric.
pub fn correlation_matrix(
    catalog: &Catalog,
    columns: &[Column],
) -> Result<CorrelationMatrix, AnalysisError> {
    for &column in columns {
        if !column.is_numeric() {
            return Err(AnalysisError::InvalidColumn {
                column,
                expected: "a numeric column",
            });
        }
    }

    let k = columns.len();
    let mut values = vec![vec![f64::NAN; k]; k];

    for i in 0..k {
        for j in i..k {
            let pairs: Vec<(f64, f64)> = catalog
                .entries()
                .iter()
                .filter_map(|e| {
                    let x = e.numeric_value(columns[i])?;
                    let y = e.numeric_value(columns[j])?;
                    Some((x, y))
                })
                .collect();

            let r = if i == j {
                // Diagonal: defined as exactly 1.0 whenever the column has
                // enough data to correlate at all.
                if pairs.len() >= 2 { 1.0 } else { f64::NAN }
            } else {
                pearson(&pairs)
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    })
}

/// Pearson coefficient of paired observations; `NaN` when undefined
/// (fewer than two pairs, or zero variance on either side).
fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }
    let nf = n as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawEntry;

    const NUMERIC: [Column; 3] = [Column::ReleaseYear, Column::YearAdded, Column::DurationNum];

    fn row(release_year: Option<&str>, date_added: Option<&str>, duration: Option<&str>) -> RawEntry {
        RawEntry {
            kind: Some("Movie".into()),
            release_year: release_year.map(String::from),
            date_added: date_added.map(String::from),
            duration: duration.map(String::from),
            ..RawEntry::default()
        }
    }

    #[test]
    fn perfectly_correlated_columns_give_one() {
        // release_year and year_added move in lockstep here.
        let c = Catalog::from_raw(vec![
            row(Some("2015"), Some("January 1, 2016"), Some("100 min")),
            row(Some("2016"), Some("January 1, 2017"), Some("90 min")),
            row(Some("2017"), Some("January 1, 2018"), Some("80 min")),
        ]);
        let m = correlation_matrix(&c, &NUMERIC).unwrap();
        assert!((m.values[0][1] - 1.0).abs() < 1e-12);
    }

    /// Diagonal must be exactly 1.0 for any column with ≥2 present values.
    #[test]
    fn diagonal_is_one_for_populated_columns() {
        let c = Catalog::from_raw(vec![
            row(Some("2015"), Some("January 1, 2016"), Some("100 min")),
            row(Some("2016"), Some("February 1, 2017"), Some("90 min")),
        ]);
        let m = correlation_matrix(&c, &NUMERIC).unwrap();
        for i in 0..3 {
            assert_eq!(m.values[i][i], 1.0, "diagonal [{i}][{i}]");
        }
    }

    #[test]
    fn matrix_is_symmetric() {
        let c = Catalog::from_raw(vec![
            row(Some("2010"), Some("January 1, 2016"), Some("130 min")),
            row(Some("2016"), Some("February 1, 2017"), Some("90 min")),
            row(Some("2012"), Some("March 1, 2015"), Some("110 min")),
        ]);
        let m = correlation_matrix(&c, &NUMERIC).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.values[i][j].to_bits(), m.values[j][i].to_bits());
            }
        }
    }

    /// Rows missing one column still count for pairs they are complete on:
    /// pairwise-complete, not row-wise-complete.
    #[test]
    fn pairwise_complete_uses_partial_rows() {
        let c = Catalog::from_raw(vec![
            row(Some("2010"), Some("January 1, 2011"), None),
            row(Some("2012"), Some("January 1, 2013"), None),
            row(Some("2014"), Some("January 1, 2015"), None),
        ]);
        let m = correlation_matrix(&c, &NUMERIC).unwrap();
        // release_year / year_added pair is fully defined...
        assert!((m.values[0][1] - 1.0).abs() < 1e-12);
        // ...while every duration pair is undefined, reported as NaN.
        assert!(m.values[0][2].is_nan());
        assert!(m.values[2][2].is_nan());
    }

    /// Fewer than two joint observations → NaN, never zero.
    #[test]
    fn single_joint_observation_is_undefined() {
        let c = Catalog::from_raw(vec![
            row(Some("2010"), None, Some("100 min")),
            row(Some("2012"), Some("January 1, 2013"), None),
        ]);
        let m = correlation_matrix(&c, &NUMERIC).unwrap();
        assert!(m.values[0][2].is_nan());
        assert!(m.values[1][2].is_nan());
    }

    /// A constant column has zero variance; its off-diagonal coefficients
    /// are undefined.
    #[test]
    fn zero_variance_column_is_undefined() {
        let c = Catalog::from_raw(vec![
            row(Some("2015"), Some("January 1, 2016"), Some("90 min")),
            row(Some("2015"), Some("January 1, 2017"), Some("100 min")),
        ]);
        let m = correlation_matrix(&c, &NUMERIC).unwrap();
        assert!(m.values[0][1].is_nan(), "constant release_year");
        assert_eq!(m.values[0][0], 1.0, "diagonal still pinned to 1.0");
    }

    #[test]
    fn non_numeric_column_is_invalid() {
        let c = Catalog::from_raw(Vec::new());
        assert!(correlation_matrix(&c, &[Column::ReleaseYear, Column::Cast]).is_err());
    }
}
