// Statistic columns recognized by the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column holding the player identifier.
pub const PLAYER_COLUMN: &str = "Player";
/// Column holding the season year.
pub const SEASON_COLUMN: &str = "Season";

/// One statistic column of the season table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    Avg,
    Obp,
    Slug,
    Ops,
    Babip,
    Doubles,
    Triples,
    HomeRuns,
    Rbi,
    StolenBases,
    Walks,
    Strikeouts,
}

/// Error for a stat name that matches no known column or alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat `{0}`")]
pub struct UnknownStat(pub String);

impl Stat {
    pub const ALL: [Stat; 12] = [
        Stat::Avg,
        Stat::Obp,
        Stat::Slug,
        Stat::Ops,
        Stat::Babip,
        Stat::Doubles,
        Stat::Triples,
        Stat::HomeRuns,
        Stat::Rbi,
        Stat::StolenBases,
        Stat::Walks,
        Stat::Strikeouts,
    ];

    /// Stats offered in the comparison dropdown, in display order.
    pub const SELECTABLE: [Stat; 9] = [
        Stat::Obp,
        Stat::Avg,
        Stat::Babip,
        Stat::Slug,
        Stat::Ops,
        Stat::Doubles,
        Stat::HomeRuns,
        Stat::Rbi,
        Stat::StolenBases,
    ];

    /// Stats shown as overview cards, in display order.
    pub const OVERVIEW: [Stat; 6] = [
        Stat::Avg,
        Stat::Obp,
        Stat::Slug,
        Stat::Ops,
        Stat::HomeRuns,
        Stat::Rbi,
    ];

    /// Canonical CSV header for this stat.
    pub fn column_name(&self) -> &'static str {
        match self {
            Stat::Avg => "AVG",
            Stat::Obp => "OBP",
            Stat::Slug => "SLUG",
            Stat::Ops => "OPS",
            Stat::Babip => "BABIP",
            Stat::Doubles => "2B",
            Stat::Triples => "3B",
            Stat::HomeRuns => "HR",
            Stat::Rbi => "RBI",
            Stat::StolenBases => "SB",
            Stat::Walks => "BB",
            Stat::Strikeouts => "SO",
        }
    }

    /// Parse a header or request value, accepting common aliases
    /// (`BA`, `SLG`, `K`). Case-insensitive, surrounding whitespace ignored.
    pub fn from_column_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "AVG" | "BA" => Some(Stat::Avg),
            "OBP" => Some(Stat::Obp),
            "SLUG" | "SLG" => Some(Stat::Slug),
            "OPS" => Some(Stat::Ops),
            "BABIP" => Some(Stat::Babip),
            "2B" => Some(Stat::Doubles),
            "3B" => Some(Stat::Triples),
            "HR" => Some(Stat::HomeRuns),
            "RBI" => Some(Stat::Rbi),
            "SB" => Some(Stat::StolenBases),
            "BB" => Some(Stat::Walks),
            "SO" | "K" => Some(Stat::Strikeouts),
            _ => None,
        }
    }

    /// Resolve a list of names, failing on the first unknown one.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Stat>, UnknownStat> {
        names
            .iter()
            .map(|n| Stat::from_column_name(n.as_ref()).ok_or_else(|| UnknownStat(n.as_ref().to_string())))
            .collect()
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Avg => "⚾ Batting Average (AVG)",
            Stat::Obp => "🎯 On Base Percentage (OBP)",
            Stat::Slug => "💪 Slugging (SLUG)",
            Stat::Ops => "🔥 OPS",
            Stat::Babip => "🍀 BABIP",
            Stat::Doubles => "⚡ Doubles (2B)",
            Stat::Triples => "Triples (3B)",
            Stat::HomeRuns => "🚀 Home Runs (HR)",
            Stat::Rbi => "🏃 RBI",
            Stat::StolenBases => "💨 Stolen Bases (SB)",
            Stat::Walks => "Walks (BB)",
            Stat::Strikeouts => "Strikeouts (SO)",
        }
    }

    /// Rate stats are fractions displayed with three decimals; the rest are
    /// season counts.
    pub fn is_rate(&self) -> bool {
        matches!(
            self,
            Stat::Avg | Stat::Obp | Stat::Slug | Stat::Ops | Stat::Babip
        )
    }

    /// Value that maps to the outer ring of the radar chart.
    pub fn radar_divisor(&self) -> f64 {
        match self {
            Stat::Avg | Stat::Obp | Stat::Slug | Stat::Babip => RATE_RADAR_DIVISOR,
            Stat::Ops => OPS_RADAR_DIVISOR,
            _ => COUNTING_RADAR_DIVISOR,
        }
    }

    /// Accent color for the overview card.
    pub fn color(&self) -> &'static str {
        match self {
            Stat::Avg => "#3b82f6",
            Stat::Obp => "#10b981",
            Stat::Slug => "#f59e0b",
            Stat::Ops => "#ef4444",
            Stat::HomeRuns => "#8b5cf6",
            Stat::Rbi => "#06b6d4",
            _ => "#6b7280",
        }
    }

    /// Icon for the overview card.
    pub fn emoji(&self) -> &'static str {
        match self {
            Stat::Avg => "⚾",
            Stat::Obp => "🎯",
            Stat::Slug => "💪",
            Stat::Ops => "🔥",
            Stat::HomeRuns => "🚀",
            Stat::Rbi => "🏃",
            _ => "📊",
        }
    }
}

/// Radar divisor for AVG, OBP, SLUG and BABIP.
pub const RATE_RADAR_DIVISOR: f64 = 0.400;
/// Radar divisor for OPS.
pub const OPS_RADAR_DIVISOR: f64 = 1.000;
/// Radar divisor for counting stats and unrecognized numeric columns.
pub const COUNTING_RADAR_DIVISOR: f64 = 50.0;

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Map a raw CSV header to its canonical column name.
///
/// Stat aliases resolve to the stat's column name, `Name` to `Player` and
/// `Year` to `Season`. Unknown headers are returned trimmed but otherwise
/// unchanged.
pub fn canonical_column_name(header: &str) -> String {
    let trimmed = header.trim();
    if let Some(stat) = Stat::from_column_name(trimmed) {
        return stat.column_name().to_string();
    }
    match trimmed.to_lowercase().as_str() {
        "player" | "name" => PLAYER_COLUMN.to_string(),
        "season" | "year" => SEASON_COLUMN.to_string(),
        _ => trimmed.to_string(),
    }
}
