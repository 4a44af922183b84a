//! Dropdown options and selection fallback.

use crate::catalog::VariableDescriptor;
use crate::models::{display_key, SensorReading};
use crate::state::DashboardState;
use serde::Serialize;
use serde_json::Value;

/// One `<option>` of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn same(text: String) -> Self {
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

/// Options for the variable and month selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlOptions {
    pub variables: Vec<SelectOption>,
    pub months: Vec<SelectOption>,
}

impl ControlOptions {
    /// One option per catalog variable (label = raw name) and one per
    /// distinct month, in first-seen order.
    pub fn from_state(state: &DashboardState) -> Self {
        let variables = state
            .variables()
            .iter()
            .map(|v| SelectOption::same(v.name.clone()))
            .collect();
        let months = distinct_months(state.sensors())
            .into_iter()
            .map(|m| SelectOption::same(display_key(m)))
            .collect();
        Self { variables, months }
    }

    /// Value a freshly populated `<select>` shows: its first option.
    pub fn initial_variable(&self) -> String {
        self.variables
            .first()
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    /// Value a freshly populated `<select>` shows: its first option.
    pub fn initial_month(&self) -> String {
        self.months
            .first()
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }
}

/// Distinct `month` values in order of first appearance.
pub fn distinct_months(readings: &[SensorReading]) -> Vec<&Value> {
    let mut months: Vec<&Value> = Vec::new();
    for reading in readings {
        if !months.contains(&&reading.month) {
            months.push(&reading.month);
        }
    }
    months
}

/// Resolve the selector's value to a variable.
///
/// An empty selection falls back to the first catalog variable; `None` only
/// when the catalog itself is empty.
pub fn resolve_variable(state: &DashboardState, selected: &str) -> Option<VariableDescriptor> {
    if selected.is_empty() {
        return state.variables().first().cloned();
    }
    Some(
        state
            .variable(selected)
            .cloned()
            .unwrap_or_else(|| VariableDescriptor::new(selected)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENSOR_FIXTURE: &str = include_str!("../../fixtures/sensor_data.json");

    fn fixture_state() -> DashboardState {
        DashboardState::from_json(SENSOR_FIXTURE, "[]").unwrap()
    }

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn months_are_distinct_in_first_seen_order() {
        let options = ControlOptions::from_state(&fixture_state());
        assert_eq!(values(&options.months), vec!["Jan", "Feb", "Dec"]);
    }

    #[test]
    fn variable_options_use_raw_names() {
        let options = ControlOptions::from_state(&fixture_state());
        assert_eq!(
            values(&options.variables),
            vec!["turbidity", "depth", "pH", "conductivity", "velocity", "rdo"]
        );
        assert!(options.variables.iter().all(|o| o.value == o.label));
    }

    #[test]
    fn initial_selection_is_first_option() {
        let options = ControlOptions::from_state(&fixture_state());
        assert_eq!(options.initial_variable(), "turbidity");
        assert_eq!(options.initial_month(), "Jan");
        assert_eq!(ControlOptions::default().initial_month(), "");
    }

    #[test]
    fn numeric_months_become_decimal_options() {
        let state = DashboardState::from_json(
            r#"[{"month": 3, "pH": 7}, {"month": 3, "pH": 7}, {"month": 1, "pH": 7}]"#,
            "[]",
        )
        .unwrap();
        let options = ControlOptions::from_state(&state);
        assert_eq!(values(&options.months), vec!["3", "1"]);
    }

    #[test]
    fn empty_selection_falls_back_to_first_variable() {
        let state = fixture_state();
        assert_eq!(resolve_variable(&state, "").unwrap().name, "turbidity");
        assert_eq!(resolve_variable(&state, "pH").unwrap().unit, Some("pH"));
    }

    #[test]
    fn unknown_selection_is_kept_without_unit() {
        let state = fixture_state();
        let variable = resolve_variable(&state, "salinity").unwrap();
        assert_eq!(variable.name, "salinity");
        assert_eq!(variable.unit, None);
    }

    #[test]
    fn empty_catalog_resolves_to_nothing() {
        let state =
            DashboardState::from_json(r#"[{"date": "d", "sensor_Id": 1, "month": "Jan"}]"#, "[]")
                .unwrap();
        assert!(resolve_variable(&state, "").is_none());
    }
}
