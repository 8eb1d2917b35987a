/// Bar scaling and histogram binning for terminal charts.

/// Widest bar drawn, in glyphs.
pub const MAX_BAR_WIDTH: usize = 40;

/// A proportional bar of `█` glyphs.
///
/// Scaled so the largest value in the chart fills [`MAX_BAR_WIDTH`];
/// any non-zero value draws at least one glyph so small counts stay
/// visible next to large ones.
pub fn bar(value: f64, max: f64) -> String {
    if value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let width = ((value / max) * MAX_BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}

/// One histogram bin: half-open range `[lo, hi)` and its count.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: u64,
}

/// Bin a numeric series into `bins` equal-width buckets.
///
/// The last bin is closed on both ends so the series maximum lands inside
/// it instead of falling off the edge. An empty series (or `bins == 0`)
/// yields no bins. A constant series collapses to a single bin holding
/// every value.
pub fn histogram(series: &[f64], bins: usize) -> Vec<Bin> {
    if series.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![Bin {
            lo: min,
            hi: max,
            count: series.len() as u64,
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lo: min + width * i as f64,
            hi: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &v in series {
        let i = (((v - min) / width) as usize).min(bins - 1);
        out[i].count += 1;
    }
    out
}

/// Count distinct values of a small numeric series, ascending by value.
///
/// Backs the count-plot chart (e.g. season counts). Values are compared
/// through their bit patterns after rounding to whole numbers is *not*
/// assumed — exact distinct values are counted.
pub fn value_counts(series: &[f64]) -> Vec<(f64, u64)> {
    let mut sorted: Vec<f64> = series.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut out: Vec<(f64, u64)> = Vec::new();
    for v in sorted {
        match out.last_mut() {
            Some((last, count)) if *last == v => *count += 1,
            _ => out.push((v, 1)),
        }
    }
    out
}
