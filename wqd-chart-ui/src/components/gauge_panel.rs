//! Row of the three summary gauges.

use super::ChartContainer;
use crate::state::AppState;
use dioxus::prelude::*;
use wqd_data::config::element_ids;

/// Mean, max and min gauge containers side by side.
///
/// Until a month with readings has been drawn the containers carry a hint,
/// since an empty month leaves the gauges untouched.
#[component]
pub fn GaugePanel() -> Element {
    let state = use_context::<AppState>();
    let placeholder = if (state.gauges_drawn)() {
        String::new()
    } else {
        "No readings for this month".to_string()
    };
    let targets = [
        element_ids::GAUGE_MEAN,
        element_ids::GAUGE_MAX,
        element_ids::GAUGE_MIN,
    ];

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 12px;",
            for id in targets {
                div {
                    key: "{id}",
                    style: "flex: 1 1 280px;",
                    ChartContainer {
                        id: id.to_string(),
                        placeholder: placeholder.clone(),
                        min_height: 300,
                    }
                }
            }
        }
    }
}
