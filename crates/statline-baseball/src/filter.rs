// Row selection by season range and player.

use serde::{Deserialize, Serialize};

use crate::stat::{PLAYER_COLUMN, SEASON_COLUMN};
use crate::table::{StatTable, TableView};

/// Inclusive season interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRange {
    pub min: i32,
    pub max: i32,
}

impl SeasonRange {
    /// Build a range, swapping the bounds if they arrive reversed.
    pub fn new(a: i32, b: i32) -> Self {
        SeasonRange {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// The same range with `min <= max` guaranteed.
    pub fn normalized(self) -> Self {
        SeasonRange::new(self.min, self.max)
    }

    /// Whether a raw season cell lies inside the range, without rounding.
    pub fn contains(&self, season: f64) -> bool {
        season >= f64::from(self.min) && season <= f64::from(self.max)
    }

    /// Every season in the range, for fallback slider marks.
    pub fn seasons(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

/// Rows whose season falls inside `range`.
///
/// Without a `Season` column every row is kept. Rows with a missing season
/// never match.
pub fn season_filtered(table: &StatTable, range: SeasonRange) -> TableView<'_> {
    let all = table.view_all();
    if !table.has_column(SEASON_COLUMN) {
        return all;
    }
    let range = range.normalized();
    all.filter(|row| {
        row.number(SEASON_COLUMN)
            .is_some_and(|s| range.contains(s))
    })
}

/// Rows of `view` belonging to `player`.
///
/// Without a `Player` column the view is returned unchanged, so every row
/// counts as the selected player's.
pub fn player_rows<'a>(view: &TableView<'a>, player: &str) -> TableView<'a> {
    if !view.table().has_column(PLAYER_COLUMN) {
        return view.clone();
    }
    view.filter(|row| row.player() == Some(player))
}
