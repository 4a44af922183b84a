//! Sensor & Precipitation Dashboard
//!
//! Plots environmental sensor readings (turbidity, depth, pH, ...) per sensor
//! over time, daily precipitation, and mean/max/min gauges for a chosen month.
//!
//! Data flow:
//! 1. On mount, `sensor_data.json` and `noaa_precip_data.json` are fetched
//!    from next to the hosting page and bundled into a `DashboardState`.
//! 2. The variable and month selectors are filled from the data and the
//!    precipitation chart is drawn once; it never changes afterwards.
//! 3. Changing the variable redraws the sensor chart.
//! 4. Changing the month redraws the gauges. A month without data leaves the
//!    gauges as they were.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, warn};
use wqd_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, GaugePanel, LoadingSpinner, MonthSelector,
    VariableSelector,
};
use wqd_chart_ui::state::AppState;
use wqd_chart_ui::{fetch, js_bridge};
use wqd_data::config::element_ids;
use wqd_data::summary::DatasetSummary;
use wqd_data::{controls, gauges, precipitation, series, DashboardConfig};

/// Element of the hosting page the dashboard mounts into.
const ROOT_ID: &str = "sensor-dashboard-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    if !js_bridge::element_exists(ROOT_ID) {
        error!("Mount element #{} not found in page; dashboard not started", ROOT_ID);
        return;
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load both datasets once on mount
    use_effect(move || {
        spawn(async move {
            let config = DashboardConfig::default();
            info!(
                "Loading {} and {}",
                config.sensor_data_url, config.precip_data_url
            );
            match fetch::load_dashboard(&config).await {
                Ok(dashboard) => {
                    js_bridge::init_charts();
                    let precip = precipitation::render_precipitation(&dashboard);
                    if let Err(e) = js_bridge::render_chart(element_ids::PRECIP_CHART, &precip) {
                        error!("Failed to draw precipitation chart: {}", e);
                    }
                    state.install(dashboard);
                }
                Err(failure) => {
                    error!("Failed to load datasets: {}", failure);
                    state.fail(failure);
                }
            }
        });
    });

    // Redraw the sensor chart whenever the variable selection changes
    use_effect(move || {
        let Some(dashboard) = state.dashboard.read().clone() else {
            return;
        };
        let selected = (state.selected_variable)();

        let Some(variable) = controls::resolve_variable(&dashboard, &selected) else {
            warn!("Sensor data has no plottable variables; sensor chart not drawn");
            return;
        };
        let spec = series::render_series(&dashboard, &variable);
        if let Err(e) = js_bridge::render_chart(element_ids::SENSOR_CHART, &spec) {
            error!("Failed to draw sensor chart: {}", e);
        }
    });

    // Redraw the gauges whenever the month selection changes. The variable is
    // peeked so that switching variables leaves the gauges alone.
    use_effect(move || {
        let Some(dashboard) = state.dashboard.read().clone() else {
            return;
        };
        let month = (state.selected_month)();
        let selected = state.selected_variable.peek().clone();

        let Some(variable) = controls::resolve_variable(&dashboard, &selected) else {
            return;
        };
        let Some(gauge_set) = gauges::render_gauges(&dashboard, &variable, &month) else {
            return;
        };
        for (target, spec) in gauge_set.targets() {
            if let Err(e) = js_bridge::render_chart(target, spec) {
                error!("Failed to draw gauge {}: {}", target, e);
            }
        }
        if !*state.gauges_drawn.peek() {
            state.gauges_drawn.set(true);
        }
    });

    let subtitle = use_memo(move || {
        state
            .dashboard
            .read()
            .as_ref()
            .map(|dashboard| summary_line(&DatasetSummary::from_state(dashboard)))
            .unwrap_or_default()
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Sensor & Precipitation Dashboard".to_string(),
                subtitle: subtitle(),
            }

            if let Some(failure) = (state.load_error)() {
                ErrorDisplay { failure }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: element_ids::PRECIP_CHART.to_string(),
                    min_height: 400,
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin: 8px 0;",
                    VariableSelector {}
                    MonthSelector {}
                }

                ChartContainer {
                    id: element_ids::SENSOR_CHART.to_string(),
                    min_height: 500,
                }

                GaugePanel {}
            }
        }
    }
}

/// "8 readings from 3 sensors, 5 precipitation days (2022-12-20 to 2023-02-16)"
fn summary_line(summary: &DatasetSummary) -> String {
    let mut line = format!(
        "{} readings from {} sensors, {} precipitation days",
        summary.sensor_records, summary.sensors, summary.precipitation_records
    );
    if let Some(span) = summary.date_span() {
        line.push_str(&format!(" ({})", span));
    }
    line
}
