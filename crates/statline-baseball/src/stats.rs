// Aggregates over table views: means, radar normalization, correlation.

use serde::Serialize;

use crate::stat::{Stat, COUNTING_RADAR_DIVISOR};
use crate::table::{RowRef, TableView};

/// Threshold below which a variance is treated as zero.
const VARIANCE_EPSILON: f64 = 1e-12;

/// Arithmetic mean of the present values. `None` when nothing is present.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Mean of one named column over a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMean {
    pub name: String,
    pub mean: Option<f64>,
}

/// Per-column means over `view`. Names that are not numeric columns of the
/// table are left out; present columns with no values yield `mean: None`.
pub fn column_means<S: AsRef<str>>(view: &TableView<'_>, names: &[S]) -> Vec<ColumnMean> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let values = view.values(name)?;
            Some(ColumnMean {
                name: name.to_string(),
                mean: mean(values),
            })
        })
        .collect()
}

/// Scale a value onto the radar's unit ring: `value / divisor`, capped at 1.
pub fn normalize_for_radar(name: &str, value: f64) -> f64 {
    let divisor = Stat::from_column_name(name)
        .map(|s| s.radar_divisor())
        .unwrap_or(COUNTING_RADAR_DIVISOR);
    (value / divisor).min(1.0)
}

/// Doubles + triples + home runs. Missing components count as zero.
pub fn extra_base_hits(row: &RowRef<'_>) -> f64 {
    [Stat::Doubles, Stat::Triples, Stat::HomeRuns]
        .iter()
        .filter_map(|s| row.number(s.column_name()))
        .sum()
}

/// Pearson correlation over the positions where both series have a value.
///
/// Returns `None` with fewer than two complete pairs or when either side has
/// zero variance.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x < VARIANCE_EPSILON || var_y < VARIANCE_EPSILON {
        return None;
    }
    let r = cov / (var_x.sqrt() * var_y.sqrt());
    Some(r.clamp(-1.0, 1.0))
}

/// Square correlation matrix; `values[i][j]` pairs `labels[i]` with
/// `labels[j]`. Undefined entries are `None` (serialized as `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        self.values[i][j]
    }
}

/// Pairwise Pearson correlation of every numeric column of the view,
/// `Season` included, in file order.
pub fn correlation_matrix(view: &TableView<'_>) -> CorrelationMatrix {
    let labels: Vec<String> = view
        .table()
        .numeric_column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let series: Vec<Vec<Option<f64>>> = labels
        .iter()
        .map(|name| view.values(name).unwrap_or_default())
        .collect();

    let n = labels.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&series[i], &series[j]);
            // Exact 1.0 on the diagonal wherever the column varies.
            let r = if i == j { r.map(|_| 1.0) } else { r };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { labels, values }
}
