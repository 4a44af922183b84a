//! Dropdown selector for choosing the plotted variable.

use super::Selector;
use crate::state::AppState;
use dioxus::prelude::*;
use wqd_data::config::element_ids;

/// Variable dropdown selector.
/// Reads the catalog options from AppState and updates selected_variable on change,
/// which redraws the sensor chart.
#[component]
pub fn VariableSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.controls.read().variables.clone();
    let selected = (state.selected_variable)();

    rsx! {
        Selector {
            id: element_ids::VAR_SELECT.to_string(),
            label: "Variable: ".to_string(),
            options,
            selected,
            on_change: move |value: String| state.selected_variable.set(value),
        }
    }
}
