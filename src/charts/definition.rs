//! Declarative chart definitions handed to the charting library as
//! `new Chart(ctx, definition)`.

use serde::Serialize;

const ACCENT: &str = "#8c52ff";
const TEXT: &str = "#E5E7EB";
const TOOLTIP_BG: &str = "#0d0d0d";
const GRID_LINE: &str = "rgba(255, 255, 255, 0.1)";

#[derive(Clone, Debug, Serialize)]
pub struct ChartDefinition {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

/// Either one color for every point or one per point.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(&'static str),
    PerPoint(Vec<&'static str>),
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub background_color: Colors,
    pub border_color: &'static str,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LegendLabels {
    pub color: &'static str,
    pub padding: u32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: &'static str,
    pub title_color: &'static str,
    pub body_color: &'static str,
    pub padding: u32,
    pub border_color: &'static str,
    pub border_width: u32,
}

impl Tooltip {
    /// Dark tooltip with the accent border, shared by both charts.
    pub fn site() -> Self {
        Self {
            background_color: TOOLTIP_BG,
            title_color: ACCENT,
            body_color: TEXT,
            padding: 12,
            border_color: ACCENT,
            border_width: 1,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Clone, Debug, Serialize)]
pub struct Axis {
    pub grid: Grid,
    pub ticks: Ticks,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Ticks {
    pub color: &'static str,
}

/// Talent pool split by generation.
pub fn talent_pool_pie() -> ChartDefinition {
    ChartDefinition {
        chart_type: "pie",
        data: ChartData {
            labels: vec![
                "Gen Z (20-30)",
                "Millennial (31-45)",
                "Gen X (46-60)",
                "Boomer (60+)",
            ],
            datasets: vec![Dataset {
                label: "Talent Pool",
                data: vec![35.0, 40.0, 20.0, 5.0],
                background_color: Colors::PerPoint(vec![
                    "rgba(140, 82, 255, 0.8)",
                    "rgba(140, 82, 255, 0.6)",
                    "rgba(140, 82, 255, 0.4)",
                    "rgba(140, 82, 255, 0.2)",
                ]),
                border_color: "#111827",
                border_width: 2,
                border_radius: None,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            index_axis: None,
            scales: None,
            plugins: Plugins {
                legend: Legend {
                    position: Some("bottom"),
                    labels: Some(LegendLabels {
                        color: TEXT,
                        padding: 15,
                    }),
                    ..Legend::default()
                },
                tooltip: Tooltip::site(),
            },
            hover_offset: Some(20),
        },
    }
}

/// Horizontal bar chart of year-over-year skill demand growth.
pub fn skill_demand_bar() -> ChartDefinition {
    ChartDefinition {
        chart_type: "bar",
        data: ChartData {
            labels: vec!["AI/ML", "Cybersecurity", "Data Science", "Cloud Arch.", "Quantum"],
            datasets: vec![Dataset {
                label: "YoY Skill Demand Growth (%)",
                data: vec![45.0, 38.0, 30.0, 25.0, 10.0],
                background_color: Colors::Single("rgba(140, 82, 255, 0.6)"),
                border_color: "rgba(140, 82, 255, 1)",
                border_width: 1,
                border_radius: Some(4),
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            index_axis: Some("y"),
            scales: Some(Scales {
                x: Axis {
                    grid: Grid {
                        color: Some(GRID_LINE),
                        ..Grid::default()
                    },
                    ticks: Ticks { color: TEXT },
                },
                y: Axis {
                    grid: Grid {
                        display: Some(false),
                        ..Grid::default()
                    },
                    ticks: Ticks { color: TEXT },
                },
            }),
            plugins: Plugins {
                legend: Legend {
                    display: Some(false),
                    ..Legend::default()
                },
                tooltip: Tooltip::site(),
            },
            hover_offset: None,
        },
    }
}

/// Library-wide defaults applied once when the library is present.
pub const DEFAULT_COLOR: &str = TEXT;
pub const DEFAULT_BORDER_COLOR: &str = GRID_LINE;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn to_json(def: &ChartDefinition) -> Value {
        serde_json::to_value(def).unwrap()
    }

    #[test]
    fn pie_shape() {
        let v = to_json(&talent_pool_pie());
        assert_eq!(v["type"], "pie");
        assert_eq!(v["data"]["labels"].as_array().unwrap().len(), 4);
        assert_eq!(v["data"]["datasets"][0]["data"], json!([35.0, 40.0, 20.0, 5.0]));
        assert_eq!(v["data"]["datasets"][0]["backgroundColor"][3], "rgba(140, 82, 255, 0.2)");
        assert_eq!(v["data"]["datasets"][0]["borderWidth"], 2);
        assert!(v["data"]["datasets"][0].get("borderRadius").is_none());
        assert_eq!(v["options"]["maintainAspectRatio"], false);
        assert_eq!(v["options"]["hoverOffset"], 20);
        assert_eq!(v["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(v["options"]["plugins"]["legend"]["labels"]["padding"], 15);
        assert!(v["options"]["plugins"]["legend"].get("display").is_none());
        assert!(v["options"].get("scales").is_none());
    }

    #[test]
    fn bar_shape() {
        let v = to_json(&skill_demand_bar());
        assert_eq!(v["type"], "bar");
        assert_eq!(v["options"]["indexAxis"], "y");
        assert_eq!(v["data"]["datasets"][0]["backgroundColor"], "rgba(140, 82, 255, 0.6)");
        assert_eq!(v["data"]["datasets"][0]["borderRadius"], 4);
        assert_eq!(v["options"]["scales"]["x"]["grid"]["color"], GRID_LINE);
        assert_eq!(v["options"]["scales"]["y"]["grid"], json!({ "display": false }));
        assert_eq!(v["options"]["scales"]["y"]["ticks"]["color"], TEXT);
        assert_eq!(v["options"]["plugins"]["legend"], json!({ "display": false }));
        assert!(v["options"].get("hoverOffset").is_none());
    }

    #[test]
    fn tooltips_match() {
        let pie = to_json(&talent_pool_pie());
        let bar = to_json(&skill_demand_bar());
        assert_eq!(pie["options"]["plugins"]["tooltip"], bar["options"]["plugins"]["tooltip"]);
        assert_eq!(
            pie["options"]["plugins"]["tooltip"],
            json!({
                "backgroundColor": "#0d0d0d",
                "titleColor": "#8c52ff",
                "bodyColor": "#E5E7EB",
                "padding": 12,
                "borderColor": "#8c52ff",
                "borderWidth": 1
            })
        );
    }

    #[test]
    fn labels_and_data_align() {
        for def in [talent_pool_pie(), skill_demand_bar()] {
            for ds in &def.data.datasets {
                assert_eq!(ds.data.len(), def.data.labels.len(), "{}", def.chart_type);
            }
        }
    }
}
