// Season-stats table loading.
//
// The whole CSV is read once into an immutable column-oriented table. Column
// kinds are inferred: a column is numeric when every non-empty cell parses as
// a float. All later views are row-index subsets; nothing mutates the table.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::stat::{canonical_column_name, PLAYER_COLUMN, SEASON_COLUMN};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Cell storage for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Missing, empty and non-finite cells are `None`.
    Numeric(Vec<Option<f64>>),
    Text(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

impl Column {
    pub fn is_numeric(&self) -> bool {
        matches!(self.values, ColumnValues::Numeric(_))
    }
}

/// The loaded season table. Columns keep their file order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl StatTable {
    /// Build a table from already-typed columns. All columns must have the
    /// same length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let row_count = columns.first().map(column_len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| column_len(c) != row_count) {
            return Err(TableError::Validation(format!(
                "column `{}` has {} rows, expected {}",
                bad.name,
                column_len(bad),
                row_count
            )));
        }
        Ok(StatTable { columns, row_count })
    }

    /// Parse CSV text from any reader. Malformed records are skipped.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);

        let headers = reader.headers()?.clone();
        let mut names: Vec<String> = Vec::with_capacity(headers.len());
        // Index into `headers` for each kept column.
        let mut source_index: Vec<usize> = Vec::with_capacity(headers.len());
        let mut seen = BTreeSet::new();
        for (i, raw) in headers.iter().enumerate() {
            let name = canonical_column_name(raw);
            if name.is_empty() {
                warn!("skipping unnamed column at position {}", i + 1);
                continue;
            }
            if !seen.insert(name.clone()) {
                warn!("skipping duplicate column '{}' (header '{}')", name, raw);
                continue;
            }
            names.push(name);
            source_index.push(i);
        }

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); names.len()];
        for result in reader.records() {
            match result {
                Ok(record) => {
                    for (col, &src) in source_index.iter().enumerate() {
                        cells[col].push(record.get(src).unwrap_or("").to_string());
                    }
                }
                Err(e) => {
                    warn!("skipping malformed row: {}", e);
                }
            }
        }

        let row_count = cells.first().map(Vec::len).unwrap_or(0);
        let columns = names
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| infer_column(name, raw))
            .collect();

        Ok(StatTable { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Cells of a numeric column; `None` if absent or text.
    pub fn numeric(&self, name: &str) -> Option<&[Option<f64>]> {
        match &self.column(name)?.values {
            ColumnValues::Numeric(v) => Some(v),
            ColumnValues::Text(_) => None,
        }
    }

    /// Cells of a text column; `None` if absent or numeric.
    pub fn text(&self, name: &str) -> Option<&[String]> {
        match &self.column(name)?.values {
            ColumnValues::Text(v) => Some(v),
            ColumnValues::Numeric(_) => None,
        }
    }

    /// Names of all numeric columns in file order.
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Sorted distinct player names, or `None` without a `Player` column.
    /// Blank names are left out.
    pub fn players(&self) -> Option<Vec<String>> {
        let names = self.text(PLAYER_COLUMN)?;
        let unique: BTreeSet<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|n| !n.is_empty())
            .collect();
        Some(unique.into_iter().map(str::to_string).collect())
    }

    /// Whole-year bounds covering every season present, or `None` without
    /// seasons. Fractional seasons widen the bounds outward.
    pub fn season_bounds(&self) -> Option<(i32, i32)> {
        let seasons = self.numeric(SEASON_COLUMN)?;
        let mut bounds: Option<(i32, i32)> = None;
        for season in seasons.iter().flatten() {
            let (lo, hi) = (season.floor() as i32, season.ceil() as i32);
            bounds = Some(match bounds {
                None => (lo, hi),
                Some((min, max)) => (min.min(lo), max.max(hi)),
            });
        }
        bounds
    }

    /// Distinct seasons present, rounded to whole years and sorted.
    pub fn seasons(&self) -> Option<Vec<i32>> {
        let seasons = self.numeric(SEASON_COLUMN)?;
        let unique: BTreeSet<i32> = seasons
            .iter()
            .flatten()
            .map(|s| s.round() as i32)
            .collect();
        Some(unique.into_iter().collect())
    }

    /// A view over every row.
    pub fn view_all(&self) -> TableView<'_> {
        TableView {
            table: self,
            rows: (0..self.row_count).collect(),
        }
    }
}

fn column_len(column: &Column) -> usize {
    match &column.values {
        ColumnValues::Numeric(v) => v.len(),
        ColumnValues::Text(v) => v.len(),
    }
}

/// Decide the kind of one column from its raw cells.
fn infer_column(name: String, raw: Vec<String>) -> Column {
    let force_text = name == PLAYER_COLUMN;
    let parsed: Option<Vec<Option<f64>>> = if force_text {
        None
    } else {
        raw.iter().map(|cell| parse_cell(cell)).collect()
    };

    match parsed {
        Some(values) => Column {
            name,
            values: ColumnValues::Numeric(values),
        },
        None => {
            if name == SEASON_COLUMN {
                warn!("Season column is not numeric; season filtering disabled");
                return Column {
                    name: format!("{SEASON_COLUMN} (text)"),
                    values: ColumnValues::Text(raw),
                };
            }
            Column {
                name,
                values: ColumnValues::Text(raw),
            }
        }
    }
}

/// `Some(None)` for a missing value, `Some(Some(v))` for a number, `None`
/// when the cell is not numeric at all.
fn parse_cell(cell: &str) -> Option<Option<f64>> {
    if cell.is_empty() {
        return Some(None);
    }
    let value: f64 = cell.parse().ok()?;
    Some(value.is_finite().then_some(value))
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A subset of table rows, kept in file order.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a StatTable,
    rows: Vec<usize>,
}

impl<'a> TableView<'a> {
    pub fn table(&self) -> &'a StatTable {
        self.table
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only rows matching `keep`.
    pub fn filter<F>(&self, mut keep: F) -> TableView<'a>
    where
        F: FnMut(RowRef<'a>) -> bool,
    {
        let table = self.table;
        TableView {
            table,
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|&index| keep(RowRef { table, index }))
                .collect(),
        }
    }

    /// Values of a numeric column for the rows in this view, or `None` if
    /// the column is absent or text.
    pub fn values(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let column = self.table.numeric(name)?;
        Some(self.rows.iter().map(|&i| column[i]).collect())
    }

    pub fn row(&self, position: usize) -> Option<RowRef<'a>> {
        let index = *self.rows.get(position)?;
        Some(RowRef {
            table: self.table,
            index,
        })
    }

    pub fn first(&self) -> Option<RowRef<'a>> {
        self.row(0)
    }

    /// The most recent row in file order.
    pub fn last(&self) -> Option<RowRef<'a>> {
        self.rows.len().checked_sub(1).and_then(|p| self.row(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = RowRef<'a>> + '_ {
        let table = self.table;
        self.rows.iter().map(move |&index| RowRef { table, index })
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    table: &'a StatTable,
    index: usize,
}

impl<'a> RowRef<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Numeric cell value; `None` when the column is absent, text, or the
    /// cell is missing.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.table.numeric(name)?[self.index]
    }

    /// Text cell value; `None` when the column is absent or numeric.
    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.table.text(name).map(|v| v[self.index].as_str())
    }

    pub fn season(&self) -> Option<i32> {
        self.number(SEASON_COLUMN).map(|s| s.round() as i32)
    }

    pub fn player(&self) -> Option<&'a str> {
        self.text(PLAYER_COLUMN)
    }
}

// ---------------------------------------------------------------------------
// Path-based loader
// ---------------------------------------------------------------------------

/// Load the season table from a CSV file.
pub fn load_table(path: &Path) -> Result<StatTable, TableError> {
    let file = std::fs::File::open(path).map_err(|e| TableError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let table = StatTable::from_reader(file).map_err(|e| TableError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    if table.columns().is_empty() {
        return Err(TableError::Validation(format!(
            "{} has no header row",
            path.display()
        )));
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
