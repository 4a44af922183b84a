//! Print the chart specs the dashboard would hand to Plotly.

use crate::sources::load_state;
use crate::DataSources;
use log::info;
use serde_json::{Map, Value};
use wqd_data::gauges::GaugeSet;
use wqd_data::{controls, gauges, precipitation, series, DashboardState, VariableDescriptor};

fn resolve(state: &DashboardState, variable: &str) -> anyhow::Result<VariableDescriptor> {
    controls::resolve_variable(state, variable)
        .ok_or_else(|| anyhow::anyhow!("sensor data has no plottable variables"))
}

/// Gauge specs keyed by their drawing target, plus the aggregate itself.
pub fn gauges_json(gauge_set: &GaugeSet) -> anyhow::Result<Value> {
    let mut out = Map::new();
    for (target, spec) in gauge_set.targets() {
        out.insert(target.to_string(), serde_json::to_value(spec)?);
    }
    out.insert("summary".to_string(), serde_json::to_value(gauge_set.summary)?);
    Ok(Value::Object(out))
}

pub async fn run_series(sources: &DataSources, variable: &str) -> anyhow::Result<()> {
    let state = load_state(sources).await?;
    let variable = resolve(&state, variable)?;
    let spec = series::render_series(&state, &variable);
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

pub async fn run_precipitation(sources: &DataSources) -> anyhow::Result<()> {
    let state = load_state(sources).await?;
    let spec = precipitation::render_precipitation(&state);
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

pub async fn run_gauges(sources: &DataSources, variable: &str, month: &str) -> anyhow::Result<()> {
    let state = load_state(sources).await?;
    let variable = resolve(&state, variable)?;
    match gauges::render_gauges(&state, &variable, month) {
        Some(gauge_set) => {
            println!("{}", serde_json::to_string_pretty(&gauges_json(&gauge_set)?)?);
        }
        None => info!("No {} data for month {:?}; nothing to draw", variable.name, month),
    }
    Ok(())
}
