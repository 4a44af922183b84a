//! Dropdown selector for choosing the gauge month.

use super::Selector;
use crate::state::AppState;
use dioxus::prelude::*;
use wqd_data::config::element_ids;

/// Month dropdown selector.
/// Options are the months found in the sensor data, in first-seen order.
/// Changing it redraws the gauges.
#[component]
pub fn MonthSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.controls.read().months.clone();
    let selected = (state.selected_month)();

    rsx! {
        Selector {
            id: element_ids::MONTH_SELECT.to_string(),
            label: "Month: ".to_string(),
            options,
            selected,
            on_change: move |value: String| state.selected_month.set(value),
        }
    }
}
