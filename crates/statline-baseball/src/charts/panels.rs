// Builders for the five dashboard chart panels.

use crate::stat::{Stat, SEASON_COLUMN};
use crate::stats::{column_means, correlation_matrix, extra_base_hits, normalize_for_radar};
use crate::table::{RowRef, TableView};

use super::figure::{
    Annotation, Axis, AxisValue, BarTrace, Color, Figure, Font, HeatmapTrace, Layout, Legend, Line,
    Margin, Marker, Polar, PolarTrace, ScatterTrace, Trace,
};
use super::theme::{self, AMBER, BLUE, GREEN, RED, SLATE};

pub const TREND_TITLE: &str = "📈 Batting Statistics Trend";
pub const POWER_TITLE: &str = "💪 Power Statistics";
pub const RADAR_TITLE: &str = "🎯 Player Performance Radar";
pub const COMPARISON_TITLE: &str = "📊 Player vs League Comparison";
pub const HEATMAP_TITLE: &str = "🔥 Statistics Correlation Heatmap";

pub const NO_DATA: &str = "No data available";
pub const NO_RADAR_STATS: &str = "No valid stats for radar chart";
pub const SELECT_STATS: &str = "Select stats to compare";
pub const STATS_NOT_IN_DATA: &str = "Selected stats are not in the data";
pub const NO_NUMERIC_COLUMNS: &str = "No numeric columns to correlate";

/// Rate stats plotted on the trend chart, with their line colors.
const TREND_STATS: [(Stat, &str); 3] = [(Stat::Avg, BLUE), (Stat::Obp, GREEN), (Stat::Slug, AMBER)];

/// Seasons exist and the player has more than one row to plot over time.
fn is_multi_season(player: &TableView<'_>) -> bool {
    player.table().has_column(SEASON_COLUMN) && player.len() > 1
}

fn season_axis(player: &TableView<'_>) -> Vec<AxisValue> {
    player
        .iter()
        .map(|row| match row.season() {
            Some(s) => AxisValue::from(s),
            None => AxisValue::Text(String::new()),
        })
        .collect()
}

/// Layout with the shared look plus a placeholder message.
fn placeholder(title: &str, text: &str) -> Figure {
    let mut layout = theme::modern_layout(title);
    layout.annotations.push(theme::muted_message(text));
    Figure {
        data: Vec::new(),
        layout,
    }
}

// ---------------------------------------------------------------------------
// Batting trend
// ---------------------------------------------------------------------------

/// AVG/OBP/SLUG over seasons, or a bar snapshot of the first row when there
/// is nothing to trend.
pub fn batting_trend(player: &TableView<'_>) -> Figure {
    let layout = theme::modern_layout(TREND_TITLE);

    if is_multi_season(player) {
        let x = season_axis(player);
        let data = TREND_STATS
            .iter()
            .filter_map(|(stat, color)| {
                let name = stat.column_name();
                let y = player.values(name)?;
                Some(Trace::Scatter(ScatterTrace {
                    x: x.clone(),
                    y,
                    mode: "lines+markers".to_string(),
                    name: name.to_string(),
                    line: Some(Line {
                        width: 4.0,
                        color: color.to_string(),
                    }),
                    marker: Some(Marker {
                        color: Some(Color::from(*color)),
                        size: Some(8.0),
                        opacity: None,
                        line: Some(Line {
                            width: 2.0,
                            color: "white".to_string(),
                        }),
                    }),
                    hovertemplate: Some(format!(
                        "<b>{name}</b><br>Season: %{{x}}<br>Value: %{{y:.3f}}<extra></extra>"
                    )),
                }))
            })
            .collect();
        return Figure { data, layout };
    }

    let Some(first) = player.first() else {
        return placeholder(TREND_TITLE, NO_DATA);
    };

    let x = TREND_STATS
        .iter()
        .map(|(stat, _)| AxisValue::from(stat.column_name()))
        .collect();
    let y = TREND_STATS
        .iter()
        .map(|(stat, _)| Some(first.number(stat.column_name()).unwrap_or(0.0)))
        .collect();
    let colors = TREND_STATS.iter().map(|(_, c)| c.to_string()).collect();

    Figure {
        data: vec![Trace::Bar(BarTrace {
            x,
            y,
            name: Some("Current Stats".to_string()),
            marker: Some(theme::bar_marker(Color::Each(colors), 0.8)),
            ..BarTrace::default()
        })],
        layout,
    }
}

// ---------------------------------------------------------------------------
// Power stats
// ---------------------------------------------------------------------------

const LEFT_DOMAIN: [f64; 2] = [0.0, 0.45];
const RIGHT_DOMAIN: [f64; 2] = [0.55, 1.0];

/// Title above one subplot, positioned in paper coordinates.
fn subplot_title(text: &str, domain: [f64; 2]) -> Annotation {
    Annotation {
        font: Some(Font {
            size: Some(16.0),
            ..Font::default()
        }),
        x: Some((domain[0] + domain[1]) / 2.0),
        y: Some(1.0),
        xref: Some("paper".to_string()),
        yref: Some("paper".to_string()),
        xanchor: Some("center".to_string()),
        yanchor: Some("bottom".to_string()),
        ..Annotation::message(text)
    }
}

fn power_layout() -> Layout {
    let mut layout = theme::modern_layout(POWER_TITLE);
    layout.showlegend = Some(false);

    let mut xaxis = theme::axis();
    xaxis.domain = Some(LEFT_DOMAIN);
    xaxis.anchor = Some("y".to_string());
    let mut yaxis = theme::axis();
    yaxis.anchor = Some("x".to_string());
    let mut xaxis2 = theme::axis();
    xaxis2.domain = Some(RIGHT_DOMAIN);
    xaxis2.anchor = Some("y2".to_string());
    let mut yaxis2 = theme::axis();
    yaxis2.anchor = Some("x2".to_string());

    layout.xaxis = Some(xaxis);
    layout.yaxis = Some(yaxis);
    layout.xaxis2 = Some(xaxis2);
    layout.yaxis2 = Some(yaxis2);
    layout.annotations = vec![
        subplot_title("🚀 Home Runs", LEFT_DOMAIN),
        subplot_title("⚡ Extra Base Hits", RIGHT_DOMAIN),
    ];
    layout
}

fn power_bar(x: Vec<AxisValue>, y: Vec<Option<f64>>, name: Option<&str>, color: &str, right: bool) -> Trace {
    Trace::Bar(BarTrace {
        x,
        y,
        name: name.map(str::to_string),
        marker: Some(theme::bar_marker(color, 0.8)),
        xaxis: right.then(|| "x2".to_string()),
        yaxis: right.then(|| "y2".to_string()),
        ..BarTrace::default()
    })
}

/// Home runs and extra-base hits side by side, per season when possible.
pub fn power_stats(player: &TableView<'_>) -> Figure {
    let hr = Stat::HomeRuns.column_name();

    if is_multi_season(player) {
        let x = season_axis(player);
        let mut data = Vec::with_capacity(2);
        if let Some(hr_values) = player.values(hr) {
            data.push(power_bar(x.clone(), hr_values, Some("HR"), RED, false));
        }
        let xbh = player.iter().map(|row| Some(extra_base_hits(&row))).collect();
        data.push(power_bar(x, xbh, Some("XBH"), BLUE, true));
        return Figure {
            data,
            layout: power_layout(),
        };
    }

    let Some(first) = player.first() else {
        return placeholder(POWER_TITLE, NO_DATA);
    };

    let hr_value = first.number(hr).unwrap_or(0.0);
    Figure {
        data: vec![
            power_bar(vec!["HR".into()], vec![Some(hr_value)], None, RED, false),
            power_bar(
                vec!["XBH".into()],
                vec![Some(extra_base_hits(&first))],
                None,
                BLUE,
                true,
            ),
        ],
        layout: power_layout(),
    }
}

// ---------------------------------------------------------------------------
// Radar
// ---------------------------------------------------------------------------

/// Normalized values of the latest row for `stats`. Stats without a value
/// in that row are skipped.
pub fn radar_points<S: AsRef<str>>(latest: &RowRef<'_>, stats: &[S]) -> Vec<(String, f64)> {
    stats
        .iter()
        .filter_map(|stat| {
            let name = stat.as_ref();
            let value = latest.number(name)?;
            Some((name.to_string(), normalize_for_radar(name, value)))
        })
        .collect()
}

/// Latest season's stats on a 0-1 radar. An empty `selected` list falls
/// back to `default_stats`.
pub fn radar<S: AsRef<str>>(player: &TableView<'_>, selected: &[S], default_stats: &[S]) -> Figure {
    let Some(latest) = player.last() else {
        return Figure {
            data: Vec::new(),
            layout: Layout {
                annotations: vec![theme::muted_message(NO_DATA)],
                ..Layout::default()
            },
        };
    };

    let stats = if selected.is_empty() { default_stats } else { selected };
    let points = radar_points(&latest, stats);
    if points.is_empty() {
        return Figure::message(NO_RADAR_STATS);
    }

    let (theta, r): (Vec<String>, Vec<f64>) = points.into_iter().unzip();
    let trace = Trace::Scatterpolar(PolarTrace {
        r,
        theta,
        fill: "toself".to_string(),
        name: "Player Stats".to_string(),
        fillcolor: theme::RADAR_FILL.to_string(),
        line: Some(Line {
            width: 3.0,
            color: BLUE.to_string(),
        }),
        marker: Some(Marker {
            color: Some(Color::from(BLUE)),
            size: Some(8.0),
            opacity: None,
            line: Some(Line {
                width: 2.0,
                color: "white".to_string(),
            }),
        }),
    });

    let mut radialaxis = theme::axis();
    radialaxis.tickfont = None;
    radialaxis.visible = Some(true);
    radialaxis.range = Some([0.0, 1.0]);
    let mut angularaxis = theme::axis();
    angularaxis.tickfont = None;

    let mut title = theme::title(RADAR_TITLE);
    title.xanchor = None;

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Some(title),
            font: Some(Font {
                family: Some(theme::FONT_FAMILY.to_string()),
                ..Font::default()
            }),
            plot_bgcolor: Some(theme::TRANSPARENT.to_string()),
            paper_bgcolor: Some(theme::TRANSPARENT.to_string()),
            polar: Some(Polar {
                radialaxis,
                angularaxis,
            }),
            showlegend: Some(false),
            ..Layout::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Player vs league comparison
// ---------------------------------------------------------------------------

/// Bar label: three decimals for rate-sized values, whole numbers otherwise.
pub fn format_comparison_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v < 10.0 => format!("{v:.3}"),
        Some(v) => format!("{v:.0}"),
        None => String::new(),
    }
}

/// Grouped bars of the league mean (every player in the season range)
/// against the selected player's mean, per selected stat.
pub fn comparison<S: AsRef<str>>(league: &TableView<'_>, player: &TableView<'_>, selected: &[S]) -> Figure {
    if selected.is_empty() {
        return Figure {
            data: Vec::new(),
            layout: Layout {
                annotations: vec![theme::muted_message(SELECT_STATS)],
                ..Layout::default()
            },
        };
    }

    let league_means = column_means(league, selected);
    if league_means.is_empty() {
        return placeholder(COMPARISON_TITLE, STATS_NOT_IN_DATA);
    }
    let player_means = column_means(player, selected);

    let x: Vec<AxisValue> = league_means
        .iter()
        .map(|m| AxisValue::from(m.name.as_str()))
        .collect();

    let series = [
        ("League Average", league_means, SLATE, 0.7),
        ("Player Average", player_means, BLUE, 0.8),
    ];
    let data = series
        .into_iter()
        .map(|(name, means, color, opacity)| {
            let y: Vec<Option<f64>> = means.iter().map(|m| m.mean).collect();
            Trace::Bar(BarTrace {
                x: x.clone(),
                text: Some(y.iter().map(|v| format_comparison_value(*v)).collect()),
                y,
                name: Some(name.to_string()),
                marker: Some(theme::bar_marker(color, opacity)),
                textposition: Some("auto".to_string()),
                ..BarTrace::default()
            })
        })
        .collect();

    let mut layout = theme::modern_layout(COMPARISON_TITLE);
    layout.barmode = Some("group".to_string());
    layout.legend = Some(Legend {
        orientation: "h".to_string(),
        yanchor: "bottom".to_string(),
        y: 1.02,
        xanchor: "right".to_string(),
        x: 1.0,
    });

    Figure { data, layout }
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// Pearson correlations between every numeric column of the player's rows.
pub fn correlation_heatmap(player: &TableView<'_>) -> Figure {
    let matrix = correlation_matrix(player);

    let mut title = theme::title(HEATMAP_TITLE);
    title.xanchor = None;
    let mut layout = Layout {
        title: Some(title),
        font: Some(Font {
            family: Some(theme::FONT_FAMILY.to_string()),
            ..Font::default()
        }),
        plot_bgcolor: Some(theme::TRANSPARENT.to_string()),
        paper_bgcolor: Some(theme::TRANSPARENT.to_string()),
        margin: Some(Margin {
            l: 80,
            r: 80,
            t: 80,
            b: 80,
        }),
        ..Layout::default()
    };

    if matrix.labels.is_empty() {
        layout.annotations.push(theme::muted_message(NO_NUMERIC_COLUMNS));
        return Figure {
            data: Vec::new(),
            layout,
        };
    }

    // Matrix rows read top to bottom, like an image.
    layout.yaxis = Some(Axis {
        autorange: Some("reversed".to_string()),
        ..Axis::default()
    });

    Figure {
        data: vec![Trace::Heatmap(HeatmapTrace {
            x: matrix.labels.clone(),
            y: matrix.labels,
            z: matrix.values,
            colorscale: "RdBu".to_string(),
            zmin: -1.0,
            zmax: 1.0,
            texttemplate: "%{z:.2f}".to_string(),
            hovertemplate: "%{y} vs %{x}: %{z:.2f}<extra></extra>".to_string(),
        })],
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{player_rows, season_filtered, SeasonRange};
    use crate::table::StatTable;

    const SAMPLE: &str = "\
Player,Season,AVG,OBP,SLUG,OPS,BABIP,HR,2B,3B,RBI,SB
Mike Trout,2021,0.333,0.466,0.624,1.090,0.390,8,8,1,18,2
Mike Trout,2022,0.283,0.369,0.630,0.999,0.308,40,28,1,80,1
Mike Trout,2023,0.263,0.367,0.490,0.857,0.300,18,14,1,44,2
Juan Soto,2022,0.242,0.401,0.452,0.853,0.249,27,25,1,62,6
Juan Soto,2023,0.275,0.410,0.519,0.929,0.292,35,32,0,109,12";

    fn sample() -> StatTable {
        StatTable::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    fn player<'a>(table: &'a StatTable, name: &str, range: SeasonRange) -> TableView<'a> {
        player_rows(&season_filtered(table, range), name)
    }

    fn axis_values<T: Into<AxisValue> + Copy>(values: &[T]) -> Vec<AxisValue> {
        values.iter().map(|v| (*v).into()).collect()
    }

    fn bar(trace: &Trace) -> &BarTrace {
        match trace {
            Trace::Bar(b) => b,
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn trend_has_one_line_per_rate_stat() {
        let table = sample();
        let fig = batting_trend(&player(&table, "Mike Trout", SeasonRange::new(2021, 2023)));
        assert_eq!(fig.data.len(), 3);
        let names: Vec<&str> = fig
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter(s) => s.name.as_str(),
                other => panic!("expected scatter, got {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["AVG", "OBP", "SLUG"]);
        if let Trace::Scatter(s) = &fig.data[0] {
            assert_eq!(s.x, axis_values(&[2021, 2022, 2023]));
            assert_eq!(s.y, vec![Some(0.333), Some(0.283), Some(0.263)]);
            assert_eq!(s.mode, "lines+markers");
        }
        assert_eq!(fig.layout.title.unwrap().text, TREND_TITLE);
    }

    #[test]
    fn trend_skips_missing_rate_columns() {
        let table = StatTable::from_reader(
            "Player,Season,AVG\nA,2021,0.250\nA,2022,0.260".as_bytes(),
        )
        .unwrap();
        let fig = batting_trend(&table.view_all());
        assert_eq!(fig.data.len(), 1);
    }

    #[test]
    fn trend_single_season_is_bar_snapshot() {
        let table = sample();
        let fig = batting_trend(&player(&table, "Juan Soto", SeasonRange::new(2023, 2023)));
        assert_eq!(fig.data.len(), 1);
        let b = bar(&fig.data[0]);
        assert_eq!(b.x, axis_values(&["AVG", "OBP", "SLUG"]));
        assert_eq!(b.y, vec![Some(0.275), Some(0.410), Some(0.519)]);
        assert_eq!(b.name.as_deref(), Some("Current Stats"));
    }

    #[test]
    fn trend_snapshot_fills_missing_with_zero() {
        let table = StatTable::from_reader("Player,AVG\nA,0.250".as_bytes()).unwrap();
        let fig = batting_trend(&table.view_all());
        assert_eq!(bar(&fig.data[0]).y, vec![Some(0.25), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn trend_empty_is_placeholder() {
        let table = sample();
        let fig = batting_trend(&player(&table, "Nobody", SeasonRange::new(2021, 2023)));
        assert!(fig.data.is_empty());
        assert_eq!(fig.layout.annotations[0].text, NO_DATA);
    }

    #[test]
    fn power_multi_season_uses_two_subplots() {
        let table = sample();
        let fig = power_stats(&player(&table, "Mike Trout", SeasonRange::new(2021, 2023)));
        assert_eq!(fig.data.len(), 2);
        let hr = bar(&fig.data[0]);
        assert_eq!(hr.y, vec![Some(8.0), Some(40.0), Some(18.0)]);
        assert!(hr.xaxis.is_none());
        let xbh = bar(&fig.data[1]);
        assert_eq!(xbh.name.as_deref(), Some("XBH"));
        assert_eq!(xbh.y, vec![Some(17.0), Some(69.0), Some(33.0)]);
        assert_eq!(xbh.xaxis.as_deref(), Some("x2"));
        assert_eq!(xbh.yaxis.as_deref(), Some("y2"));
        assert_eq!(fig.layout.showlegend, Some(false));
        assert_eq!(fig.layout.annotations.len(), 2);
        assert_eq!(fig.layout.xaxis2.unwrap().domain, Some(RIGHT_DOMAIN));
    }

    #[test]
    fn power_without_hr_column_keeps_xbh() {
        let table = StatTable::from_reader(
            "Player,Season,2B\nA,2021,10\nA,2022,12".as_bytes(),
        )
        .unwrap();
        let fig = power_stats(&table.view_all());
        assert_eq!(fig.data.len(), 1);
        assert_eq!(bar(&fig.data[0]).y, vec![Some(10.0), Some(12.0)]);
    }

    #[test]
    fn power_single_row_is_snapshot() {
        let table = sample();
        let fig = power_stats(&player(&table, "Juan Soto", SeasonRange::new(2022, 2022)));
        assert_eq!(bar(&fig.data[0]).x, axis_values(&["HR"]));
        assert_eq!(bar(&fig.data[0]).y, vec![Some(27.0)]);
        assert_eq!(bar(&fig.data[1]).y, vec![Some(53.0)]);
    }

    #[test]
    fn power_empty_is_placeholder() {
        let table = sample();
        let fig = power_stats(&player(&table, "Nobody", SeasonRange::new(2021, 2023)));
        assert!(fig.data.is_empty());
        assert_eq!(fig.layout.annotations[0].text, NO_DATA);
        assert_eq!(fig.layout.title.unwrap().text, POWER_TITLE);
    }

    #[test]
    fn radar_normalizes_latest_row() {
        let table = sample();
        let trout = player(&table, "Mike Trout", SeasonRange::new(2021, 2023));
        let fig = radar(&trout, &["AVG", "HR", "OPS"], &["AVG"]);
        match &fig.data[0] {
            Trace::Scatterpolar(p) => {
                assert_eq!(p.theta, vec!["AVG", "HR", "OPS"]);
                assert!((p.r[0] - 0.263 / 0.4).abs() < 1e-9);
                assert!((p.r[1] - 18.0 / 50.0).abs() < 1e-9);
                assert!((p.r[2] - 0.857).abs() < 1e-9);
                assert_eq!(p.fill, "toself");
            }
            other => panic!("expected scatterpolar, got {other:?}"),
        }
        let polar = fig.layout.polar.unwrap();
        assert_eq!(polar.radialaxis.range, Some([0.0, 1.0]));
    }

    #[test]
    fn radar_defaults_when_nothing_selected() {
        let table = sample();
        let trout = player(&table, "Mike Trout", SeasonRange::new(2021, 2023));
        let none: [&str; 0] = [];
        let fig = radar(&trout, &none, &["AVG", "OBP", "SLUG", "OPS"]);
        match &fig.data[0] {
            Trace::Scatterpolar(p) => assert_eq!(p.theta, vec!["AVG", "OBP", "SLUG", "OPS"]),
            other => panic!("expected scatterpolar, got {other:?}"),
        }
    }

    #[test]
    fn radar_without_usable_stats() {
        let table = sample();
        let trout = player(&table, "Mike Trout", SeasonRange::new(2021, 2023));
        let fig = radar(&trout, &["WAR"], &["AVG"]);
        assert_eq!(fig.message_text(), Some(NO_RADAR_STATS));
    }

    #[test]
    fn radar_empty_player() {
        let table = sample();
        let nobody = player(&table, "Nobody", SeasonRange::new(2021, 2023));
        let fig = radar(&nobody, &["AVG"], &["AVG"]);
        assert_eq!(fig.message_text(), Some(NO_DATA));
    }

    #[test]
    fn comparison_league_vs_player_means() {
        let table = sample();
        let league = season_filtered(&table, SeasonRange::new(2022, 2023));
        let soto = player_rows(&league, "Juan Soto");
        let fig = comparison(&league, &soto, &["HR", "AVG"]);

        let league_bar = bar(&fig.data[0]);
        assert_eq!(league_bar.name.as_deref(), Some("League Average"));
        assert_eq!(league_bar.x, axis_values(&["HR", "AVG"]));
        // (40 + 18 + 27 + 35) / 4
        assert!((league_bar.y[0].unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(league_bar.text.as_ref().unwrap()[0], "30");

        let player_bar = bar(&fig.data[1]);
        assert_eq!(player_bar.name.as_deref(), Some("Player Average"));
        assert!((player_bar.y[0].unwrap() - 31.0).abs() < 1e-9);
        assert!((player_bar.y[1].unwrap() - 0.2585).abs() < 1e-9);
        let avg_text = &player_bar.text.as_ref().unwrap()[1];
        assert!(avg_text.starts_with("0.25") && avg_text.len() == 5);
        assert_eq!(fig.layout.barmode.as_deref(), Some("group"));
    }

    #[test]
    fn comparison_requires_selection() {
        let table = sample();
        let all = table.view_all();
        let none: [&str; 0] = [];
        let fig = comparison(&all, &all, &none);
        assert_eq!(fig.message_text(), Some(SELECT_STATS));
    }

    #[test]
    fn comparison_with_unknown_stats_only() {
        let table = sample();
        let all = table.view_all();
        let fig = comparison(&all, &all, &["WAR"]);
        assert!(fig.data.is_empty());
        assert_eq!(fig.layout.annotations[0].text, STATS_NOT_IN_DATA);
    }

    #[test]
    fn comparison_value_formatting() {
        assert_eq!(format_comparison_value(Some(0.2585)), "0.259");
        assert_eq!(format_comparison_value(Some(9.9999)), "10.000");
        assert_eq!(format_comparison_value(Some(85.6)), "86");
        assert_eq!(format_comparison_value(None), "");
    }

    #[test]
    fn heatmap_covers_numeric_columns() {
        let table = sample();
        let trout = player(&table, "Mike Trout", SeasonRange::new(2021, 2023));
        let fig = correlation_heatmap(&trout);
        match &fig.data[0] {
            Trace::Heatmap(h) => {
                assert_eq!(h.x.len(), 11);
                assert_eq!(h.x[0], "Season");
                assert_eq!(h.x, h.y);
                assert_eq!(h.z.len(), 11);
                assert_eq!(h.colorscale, "RdBu");
                // 3B is constant for this player.
                let triples = h.x.iter().position(|l| l == "3B").unwrap();
                assert!(h.z[triples].iter().all(Option::is_none));
            }
            other => panic!("expected heatmap, got {other:?}"),
        }
        assert_eq!(fig.layout.yaxis.unwrap().autorange.as_deref(), Some("reversed"));
    }

    #[test]
    fn heatmap_without_numeric_columns() {
        let table = StatTable::from_reader("Player\nA".as_bytes()).unwrap();
        let fig = correlation_heatmap(&table.view_all());
        assert!(fig.data.is_empty());
        assert_eq!(fig.layout.annotations[0].text, NO_NUMERIC_COLUMNS);
    }
}
