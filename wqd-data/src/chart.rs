//! Serializable Plotly figure specs.
//!
//! A [`ChartSpec`] serializes to the `data` / `layout` / `config` triple
//! that `Plotly.newPlot` takes. Unset options are omitted from the JSON so
//! Plotly falls back to its own defaults.

use serde::Serialize;
use serde_json::Value;

/// Layout template shared by all line charts.
pub const TEMPLATE: &str = "plotly_white";
/// Font size of chart titles.
pub const TITLE_FONT_SIZE: u32 = 22;
/// Light grey grid lines.
pub const GRID_COLOR: &str = "#e0e0e0";
/// Tick labels like "Jan 2023".
pub const DATE_TICK_FORMAT: &str = "%b %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PlotConfig>,
}

impl ChartSpec {
    pub fn data_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.data)?)
    }

    pub fn layout_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.layout)?)
    }

    /// Plot config as JSON, `{}` when none is set.
    pub fn config_json(&self) -> anyhow::Result<String> {
        match &self.config {
            Some(config) => Ok(serde_json::to_string(config)?),
            None => Ok("{}".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Indicator(IndicatorTrace),
}

impl Trace {
    pub fn as_scatter(&self) -> Option<&ScatterTrace> {
        match self {
            Trace::Scatter(trace) => Some(trace),
            _ => None,
        }
    }

    pub fn as_indicator(&self) -> Option<&IndicatorTrace> {
        match self {
            Trace::Indicator(trace) => Some(trace),
            _ => None,
        }
    }
}

/// A line series. `x` and `y` carry raw dataset values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    pub name: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl ScatterTrace {
    pub fn lines(name: impl Into<String>, x: Vec<Value>, y: Vec<Value>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
            mode: "lines".to_string(),
            hovertemplate: None,
        }
    }
}

/// A single-number gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorTrace {
    pub mode: String,
    pub value: f64,
    pub title: Title,
    pub gauge: Gauge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub axis: GaugeAxis,
    pub bar: GaugeBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeAxis {
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBar {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    /// Chart heading at [`TITLE_FONT_SIZE`].
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Some(Font {
                size: TITLE_FONT_SIZE,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixedrange: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangemode: Option<String>,
}

impl Axis {
    /// Date x-axis titled "Date" with month/year ticks slanted -45 degrees.
    pub fn date() -> Self {
        Self {
            title: Some(Title::plain("Date")),
            tickformat: Some(DATE_TICK_FORMAT.to_string()),
            tickangle: Some(-45),
            gridcolor: Some(GRID_COLOR.to_string()),
            axis_type: Some("date".to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: String,
    pub x: f64,
    pub xanchor: String,
    pub y: f64,
    pub yanchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            t: 50,
            l: 60,
            r: 30,
            b: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotConfig {
    pub responsive: bool,
    #[serde(rename = "scrollZoom")]
    pub scroll_zoom: bool,
}
