// Shared look for every dashboard chart.

use super::figure::{Annotation, Axis, Font, Layout, Line, Margin, Marker, Title};

pub const FONT_FAMILY: &str = "Inter, sans-serif";
pub const TITLE_COLOR: &str = "#1f2937";
pub const TEXT_COLOR: &str = "#374151";
pub const MUTED_TEXT: &str = "#6b7280";
pub const GRID_COLOR: &str = "#f3f4f6";
pub const AXIS_LINE_COLOR: &str = "#e5e7eb";
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

pub const BLUE: &str = "#3b82f6";
pub const GREEN: &str = "#10b981";
pub const AMBER: &str = "#f59e0b";
pub const RED: &str = "#ef4444";
pub const SLATE: &str = "#94a3b8";
pub const RADAR_FILL: &str = "rgba(59, 130, 246, 0.3)";

/// Title centered over the plot in the dashboard font.
pub fn title(text: &str) -> Title {
    Title {
        text: text.to_string(),
        font: Font {
            size: Some(18.0),
            family: Some(FONT_FAMILY.to_string()),
            color: Some(TITLE_COLOR.to_string()),
        },
        x: 0.5,
        xanchor: Some("center".to_string()),
    }
}

/// Light grid axis used by cartesian charts.
pub fn axis() -> Axis {
    Axis {
        gridcolor: Some(GRID_COLOR.to_string()),
        linecolor: Some(AXIS_LINE_COLOR.to_string()),
        tickfont: Some(Font {
            color: Some(MUTED_TEXT.to_string()),
            ..Font::default()
        }),
        ..Axis::default()
    }
}

/// Base layout: centered title, transparent backgrounds, light axes.
pub fn modern_layout(title_text: &str) -> Layout {
    Layout {
        title: Some(title(title_text)),
        font: Some(Font {
            family: Some(FONT_FAMILY.to_string()),
            color: Some(TEXT_COLOR.to_string()),
            ..Font::default()
        }),
        plot_bgcolor: Some(TRANSPARENT.to_string()),
        paper_bgcolor: Some(TRANSPARENT.to_string()),
        margin: Some(Margin {
            l: 60,
            r: 60,
            t: 80,
            b: 60,
        }),
        xaxis: Some(axis()),
        yaxis: Some(axis()),
        ..Layout::default()
    }
}

/// Bar marker with a white outline.
pub fn bar_marker(color: impl Into<super::figure::Color>, opacity: f64) -> Marker {
    Marker {
        color: Some(color.into()),
        size: None,
        opacity: Some(opacity),
        line: Some(Line {
            width: 2.0,
            color: "white".to_string(),
        }),
    }
}

/// Placeholder annotation in muted text.
pub fn muted_message(text: &str) -> Annotation {
    Annotation {
        font: Some(Font {
            size: Some(16.0),
            color: Some(MUTED_TEXT.to_string()),
            ..Font::default()
        }),
        ..Annotation::message(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_layout_sets_shared_look() {
        let layout = modern_layout("Trend");
        let title = layout.title.unwrap();
        assert_eq!(title.text, "Trend");
        assert!((title.x - 0.5).abs() < f64::EPSILON);
        assert_eq!(layout.plot_bgcolor.as_deref(), Some(TRANSPARENT));
        assert_eq!(layout.margin.unwrap().t, 80);
        assert_eq!(layout.xaxis.unwrap().gridcolor.as_deref(), Some(GRID_COLOR));
        assert!(layout.annotations.is_empty());
    }
}
