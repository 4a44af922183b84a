//! Month-scoped aggregates and the three summary gauges.

use crate::catalog::VariableDescriptor;
use crate::chart::{ChartSpec, Gauge, GaugeAxis, GaugeBar, IndicatorTrace, Layout, Title, Trace};
use crate::config::element_ids;
use crate::controls;
use crate::models::SensorReading;
use crate::state::DashboardState;
use serde::Serialize;
use serde_json::Value;

/// Bar color shared by all gauges.
pub const GAUGE_BAR_COLOR: &str = "#1f77b4";

/// Readings whose `month` equals `month` and whose `variable` is present
/// and not null.
///
/// The month comparison is strict: only a JSON string equal to `month`
/// matches. Zero and other non-null values are admitted.
pub fn filter_month<'a>(
    readings: &'a [SensorReading],
    variable: &str,
    month: &str,
) -> Vec<&'a SensorReading> {
    readings
        .iter()
        .filter(|r| r.month.as_str() == Some(month) && !r.value(variable).is_null())
        .collect()
}

/// Mean, minimum and maximum of a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl AggregateSummary {
    /// Aggregate `values`; `None` when there are none.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return None;
        }
        Some(Self {
            count,
            mean: sum / count as f64,
            min,
            max,
        })
    }
}

/// Aggregate the numeric values of `variable` over already-filtered readings.
///
/// Admitted values that are not JSON numbers do not take part.
pub fn summarize(filtered: &[&SensorReading], variable: &str) -> Option<AggregateSummary> {
    AggregateSummary::from_values(filtered.iter().filter_map(|r| r.value(variable).as_f64()))
}

/// The three gauge figures for one (variable, month) selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSet {
    pub summary: AggregateSummary,
    pub mean: ChartSpec,
    pub max: ChartSpec,
    pub min: ChartSpec,
}

impl GaugeSet {
    /// Each gauge paired with the element id it is drawn into.
    pub fn targets(&self) -> [(&'static str, &ChartSpec); 3] {
        [
            (element_ids::GAUGE_MEAN, &self.mean),
            (element_ids::GAUGE_MAX, &self.max),
            (element_ids::GAUGE_MIN, &self.min),
        ]
    }
}

/// Build mean/max/min gauges for `variable` over the readings of `month`.
///
/// Returns `None` when no reading matches; callers then leave the gauges
/// untouched.
pub fn render_gauges(
    state: &DashboardState,
    variable: &VariableDescriptor,
    month: &str,
) -> Option<GaugeSet> {
    let filtered = filter_month(state.sensors(), &variable.name, month);
    let summary = summarize(&filtered, &variable.name)?;
    let range = [summary.min, summary.max];

    let gauge = |value: f64, prefix: &str| ChartSpec {
        data: vec![Trace::Indicator(IndicatorTrace {
            mode: "gauge+number".to_string(),
            value,
            title: Title::plain(format!(
                "{} {}{}",
                prefix,
                variable.name,
                variable.unit_suffix()
            )),
            gauge: Gauge {
                axis: GaugeAxis { range },
                bar: GaugeBar {
                    color: GAUGE_BAR_COLOR.to_string(),
                },
            },
        })],
        layout: Layout::default(),
        config: None,
    };

    Some(GaugeSet {
        summary,
        mean: gauge(summary.mean, "Mean"),
        max: gauge(summary.max, "Max"),
        min: gauge(summary.min, "Min"),
    })
}

/// One row of the per-month summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String,
    pub variable: String,
    pub unit: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Aggregate every catalog variable for every month, months in first-seen
/// order. Pairs with no data are left out.
pub fn monthly_summaries(state: &DashboardState) -> Vec<MonthlySummary> {
    let mut rows = Vec::new();
    for month in controls::distinct_months(state.sensors()) {
        let Value::String(month) = month else {
            continue;
        };
        for variable in state.variables() {
            let filtered = filter_month(state.sensors(), &variable.name, month);
            if let Some(summary) = summarize(&filtered, &variable.name) {
                rows.push(MonthlySummary {
                    month: month.clone(),
                    variable: variable.name.clone(),
                    unit: variable.unit.unwrap_or_default().to_string(),
                    count: summary.count,
                    mean: summary.mean,
                    min: summary.min,
                    max: summary.max,
                });
            }
        }
    }
    rows
}
