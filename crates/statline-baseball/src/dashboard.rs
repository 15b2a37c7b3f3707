// Dashboard state: control options and the per-selection recompute.

use serde::{Deserialize, Serialize};
use statline_core::config::DashboardConfig;
use tracing::debug;

use crate::charts::figure::Figure;
use crate::charts::panels;
use crate::filter::{player_rows, season_filtered, SeasonRange};
use crate::stat::{Stat, UnknownStat, PLAYER_COLUMN};
use crate::table::{RowRef, StatTable, TableView};

pub const NO_DATA_FOR_FILTERS: &str = "No data available for selected filters";
/// Overview heading when the table has no player column.
pub const ALL_PLAYERS: &str = "All Players";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Current values of the three page controls. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub stats: Vec<String>,
    #[serde(default)]
    pub seasons: Option<SeasonRange>,
}

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Everything the page needs to populate its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOptions {
    pub players: Vec<SelectOption>,
    pub stat_options: Vec<SelectOption>,
    pub default_player: Option<String>,
    pub default_stats: Vec<String>,
    pub season_bounds: SeasonRange,
    /// One slider mark per distinct season in the data; every season of
    /// the fallback bounds when the table has none.
    pub season_marks: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub stat: String,
    pub emoji: String,
    pub color: String,
    pub value: String,
}

/// Headline cards for the selected player's latest season.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overview {
    Placeholder { message: String },
    Cards { player: String, cards: Vec<StatCard> },
}

/// Overview plus the five chart panels, recomputed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub overview: Overview,
    pub batting_trend: Figure,
    pub power_stats: Figure,
    pub radar: Figure,
    pub comparison: Figure,
    pub correlation: Figure,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Configured control defaults, resolved to known stats.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardDefaults {
    pub default_stats: Vec<Stat>,
    pub radar_stats: Vec<Stat>,
    pub fallback_seasons: SeasonRange,
}

impl DashboardDefaults {
    pub fn from_config(config: &DashboardConfig) -> Result<Self, UnknownStat> {
        Ok(DashboardDefaults {
            default_stats: Stat::parse_list(&config.default_stats)?,
            radar_stats: Stat::parse_list(&config.radar_stats)?,
            fallback_seasons: SeasonRange::new(
                config.fallback_season_min,
                config.fallback_season_max,
            ),
        })
    }
}

impl Default for DashboardDefaults {
    fn default() -> Self {
        DashboardDefaults {
            default_stats: vec![Stat::Obp, Stat::Avg, Stat::Slug],
            radar_stats: vec![Stat::Avg, Stat::Obp, Stat::Slug, Stat::Ops],
            fallback_seasons: SeasonRange::new(2020, 2023),
        }
    }
}

fn column_names(stats: &[Stat]) -> Vec<String> {
    stats.iter().map(|s| s.column_name().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// The loaded table plus defaults. Read-only after construction.
#[derive(Debug)]
pub struct Dashboard {
    table: StatTable,
    defaults: DashboardDefaults,
}

impl Dashboard {
    pub fn new(table: StatTable, defaults: DashboardDefaults) -> Self {
        Dashboard { table, defaults }
    }

    pub fn table(&self) -> &StatTable {
        &self.table
    }

    /// Season bounds of the data, or the configured fallback without a
    /// `Season` column.
    pub fn season_bounds(&self) -> SeasonRange {
        self.table
            .season_bounds()
            .map(|(lo, hi)| SeasonRange::new(lo, hi))
            .unwrap_or(self.defaults.fallback_seasons)
    }

    pub fn default_player(&self) -> Option<String> {
        self.table.players()?.into_iter().next()
    }

    pub fn options(&self) -> DashboardOptions {
        let player_names = self.table.players().unwrap_or_default();
        let players = player_names
            .iter()
            .map(|p| SelectOption {
                label: format!("⭐ {p}"),
                value: p.clone(),
            })
            .collect();

        let stat_options = Stat::SELECTABLE
            .iter()
            .filter(|s| self.table.numeric(s.column_name()).is_some())
            .map(|s| SelectOption {
                label: s.label().to_string(),
                value: s.column_name().to_string(),
            })
            .collect();

        let bounds = self.season_bounds();
        let season_marks = self
            .table
            .seasons()
            .filter(|marks| !marks.is_empty())
            .unwrap_or_else(|| bounds.seasons().collect());
        DashboardOptions {
            players,
            stat_options,
            default_player: player_names.into_iter().next(),
            default_stats: column_names(&self.defaults.default_stats),
            season_bounds: bounds,
            season_marks,
        }
    }

    /// Recompute the overview and every chart for `selection`.
    pub fn update(&self, selection: &Selection) -> DashboardUpdate {
        let range = selection
            .seasons
            .map(SeasonRange::normalized)
            .unwrap_or_else(|| self.season_bounds());
        let league = season_filtered(&self.table, range);

        let (player_label, player) = self.player_view(&league, selection.player.as_deref());
        debug!(
            player = player_label.as_deref().unwrap_or("-"),
            seasons = ?range,
            rows = player.len(),
            "dashboard update"
        );

        let radar_defaults = column_names(&self.defaults.radar_stats);

        DashboardUpdate {
            overview: overview(&player, player_label.as_deref().unwrap_or_default()),
            batting_trend: panels::batting_trend(&player),
            power_stats: panels::power_stats(&player),
            radar: panels::radar(&player, &selection.stats, &radar_defaults),
            comparison: panels::comparison(&league, &player, &selection.stats),
            correlation: panels::correlation_heatmap(&player),
        }
    }

    /// The selected player's rows and the name to show for them. A missing
    /// selection falls back to the first player; a table without players
    /// uses every row.
    fn player_view<'a>(
        &self,
        league: &TableView<'a>,
        selected: Option<&str>,
    ) -> (Option<String>, TableView<'a>) {
        if !self.table.has_column(PLAYER_COLUMN) {
            return (Some(ALL_PLAYERS.to_string()), league.clone());
        }
        let name = selected.map(str::to_string).or_else(|| self.default_player());
        match name {
            Some(name) => {
                let rows = player_rows(league, &name);
                (Some(name), rows)
            }
            None => (None, league.filter(|_| false)),
        }
    }
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

/// Card text: three decimals for rate stats, a whole number otherwise.
pub fn format_card_value(stat: Stat, value: f64) -> String {
    if stat.is_rate() {
        format!("{value:.3}")
    } else {
        format!("{}", value.round() as i64)
    }
}

fn stat_card(latest: &RowRef<'_>, stat: Stat) -> Option<StatCard> {
    let value = latest.number(stat.column_name())?;
    Some(StatCard {
        stat: stat.column_name().to_string(),
        emoji: stat.emoji().to_string(),
        color: stat.color().to_string(),
        value: format_card_value(stat, value),
    })
}

/// Cards for the player's latest row, or a placeholder without rows.
pub fn overview(player: &TableView<'_>, player_name: &str) -> Overview {
    let Some(latest) = player.last() else {
        return Overview::Placeholder {
            message: NO_DATA_FOR_FILTERS.to_string(),
        };
    };
    Overview::Cards {
        player: player_name.to_string(),
        cards: Stat::OVERVIEW
            .iter()
            .filter_map(|s| stat_card(&latest, *s))
            .collect(),
    }
}
