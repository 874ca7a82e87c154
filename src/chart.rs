use crate::models::ChartPayload;
use serde::Serialize;

pub const TITLE: &str = "Project Hours By User";
pub const SUBTITLE: &str = "Per Week";
pub const Y_AXIS_TITLE: &str = "Hours Logged";

/// Below this chart width the legend collapses under the plot.
pub const NARROW_MAX_WIDTH: u32 = 500;

const SERIES_PALETTE: [&str; 6] = [
    "#ff6b4a", "#2f4858", "#3a7ca5", "#d1495b", "#66a182", "#edae49",
];

/// Declarative line chart description consumed by the page's renderer.
/// One x-axis category per week label, one line per user series.
#[derive(Debug, Serialize)]
pub struct ChartConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub y_axis_title: &'static str,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub legend: LegendLayout,
    pub narrow: ResponsiveRule,
}

#[derive(Debug, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<f64>,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendLayout {
    pub layout: &'static str,
    pub align: &'static str,
    pub vertical_align: &'static str,
}

impl LegendLayout {
    fn wide() -> Self {
        Self {
            layout: "vertical",
            align: "right",
            vertical_align: "middle",
        }
    }

    fn narrow() -> Self {
        Self {
            layout: "horizontal",
            align: "center",
            vertical_align: "bottom",
        }
    }
}

/// Legend override applied when the chart is narrower than `max_width`.
#[derive(Debug, Serialize)]
pub struct ResponsiveRule {
    pub max_width: u32,
    pub legend: LegendLayout,
}

pub fn line_chart(payload: ChartPayload) -> ChartConfig {
    let series = payload
        .series
        .into_iter()
        .enumerate()
        .map(|(index, series)| ChartSeries {
            color: SERIES_PALETTE[index % SERIES_PALETTE.len()].to_string(),
            name: series.name,
            data: series.data,
        })
        .collect();

    ChartConfig {
        title: TITLE,
        subtitle: SUBTITLE,
        y_axis_title: Y_AXIS_TITLE,
        categories: payload.weeks,
        series,
        legend: LegendLayout::wide(),
        narrow: ResponsiveRule {
            max_width: NARROW_MAX_WIDTH,
            legend: LegendLayout::narrow(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Series;

    fn payload(names: &[&str]) -> ChartPayload {
        ChartPayload {
            weeks: vec!["W1".into(), "W2".into()],
            series: names
                .iter()
                .map(|name| Series {
                    name: name.to_string(),
                    data: vec![5.0, 3.0],
                })
                .collect(),
        }
    }

    #[test]
    fn payload_maps_onto_categories_and_series() {
        let config = line_chart(payload(&["Alice"]));
        assert_eq!(config.categories, vec!["W1", "W2"]);
        assert_eq!(config.series.len(), 1);
        assert_eq!(config.series[0].name, "Alice");
        assert_eq!(config.series[0].data, vec![5.0, 3.0]);
    }

    #[test]
    fn axis_and_titles_are_fixed() {
        let config = line_chart(payload(&[]));
        assert_eq!(config.title, "Project Hours By User");
        assert_eq!(config.subtitle, "Per Week");
        assert_eq!(config.y_axis_title, "Hours Logged");
    }

    #[test]
    fn legend_collapses_below_width_threshold() {
        let config = line_chart(payload(&["Alice"]));
        assert_eq!(config.legend.layout, "vertical");
        assert_eq!(config.legend.align, "right");
        assert_eq!(config.narrow.max_width, 500);
        assert_eq!(config.narrow.legend.layout, "horizontal");
        assert_eq!(config.narrow.legend.vertical_align, "bottom");
    }

    #[test]
    fn palette_cycles_past_its_length() {
        let names: Vec<String> = (0..8).map(|i| format!("user-{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let config = line_chart(payload(&refs));
        assert_eq!(config.series[0].color, config.series[6].color);
        assert_ne!(config.series[0].color, config.series[1].color);
    }

    #[test]
    fn config_serializes_with_stable_field_names() {
        let json = serde_json::to_value(line_chart(payload(&["Alice"]))).unwrap();
        assert_eq!(json["y_axis_title"], "Hours Logged");
        assert_eq!(json["series"][0]["color"], "#ff6b4a");
        assert_eq!(json["narrow"]["max_width"], 500);
    }
}
