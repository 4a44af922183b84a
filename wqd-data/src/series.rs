//! Per-sensor time series for the selected variable.

use crate::catalog::VariableDescriptor;
use crate::chart::{
    Axis, ChartSpec, Layout, Legend, Margin, PlotConfig, RangeSlider, ScatterTrace, Title, Trace,
    GRID_COLOR, TEMPLATE,
};
use crate::models::SensorReading;
use crate::state::DashboardState;
use std::collections::HashMap;

/// All readings of one sensor, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorGroup<'a> {
    pub sensor_id: String,
    pub readings: Vec<&'a SensorReading>,
}

/// Group readings by sensor identifier.
///
/// Groups come out in order of each sensor's first appearance; every
/// reading lands in exactly one group.
pub fn group_by_sensor(readings: &[SensorReading]) -> Vec<SensorGroup<'_>> {
    let mut groups: Vec<SensorGroup<'_>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for reading in readings {
        let key = reading.sensor_key();
        match index.get(&key) {
            Some(&i) => groups[i].readings.push(reading),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(SensorGroup {
                    sensor_id: key,
                    readings: vec![reading],
                });
            }
        }
    }
    groups
}

/// Build the sensor chart: one line per sensor for `variable`.
///
/// Missing and null values are passed through as nulls so Plotly draws
/// gaps. The returned spec is meant for `Plotly.newPlot`, which replaces
/// whatever the target held before.
pub fn render_series(state: &DashboardState, variable: &VariableDescriptor) -> ChartSpec {
    let unit_hover = variable
        .unit
        .map(|unit| format!(" {}", unit))
        .unwrap_or_default();

    let data = group_by_sensor(state.sensors())
        .into_iter()
        .map(|group| {
            let x = group.readings.iter().map(|r| r.date.clone()).collect();
            let y = group
                .readings
                .iter()
                .map(|r| r.value(&variable.name).clone())
                .collect();
            let mut trace = ScatterTrace::lines(format!("Sensor {}", group.sensor_id), x, y);
            trace.hovertemplate = Some(format!(
                "Sensor {}<br>Date: %{{x}}<br>{}: %{{y}}{}<extra></extra>",
                group.sensor_id, variable.name, unit_hover
            ));
            Trace::Scatter(trace)
        })
        .collect::<Vec<_>>();

    log::info!(
        "[WQD] series: {} traces for {}",
        data.len(),
        variable.name
    );

    ChartSpec {
        data,
        layout: Layout {
            title: Some(Title::heading(format!(
                "{} over Time{}",
                variable.name,
                variable.unit_suffix()
            ))),
            xaxis: Some(Axis {
                showgrid: Some(false),
                rangeslider: Some(RangeSlider { visible: true }),
                ..Axis::date()
            }),
            yaxis: Some(Axis {
                title: Some(Title::plain(variable.axis_label())),
                showgrid: Some(false),
                gridcolor: Some(GRID_COLOR.to_string()),
                autorange: Some(true),
                fixedrange: Some(false),
                rangemode: Some("normal".to_string()),
                ..Default::default()
            }),
            legend: Some(Legend {
                orientation: "v".to_string(),
                x: 1.0,
                xanchor: "right".to_string(),
                y: 1.0,
                yanchor: "top".to_string(),
            }),
            margin: Some(Margin::default()),
            template: Some(TEMPLATE.to_string()),
            autosize: Some(true),
        },
        config: Some(PlotConfig {
            responsive: true,
            scroll_zoom: true,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// Sensor "A" with three readings, sensor "B" with two, interleaved.
    fn two_sensor_state() -> DashboardState {
        DashboardState::from_json(
            r#"[
                {"date": "2023-01-01", "sensor_Id": "A", "month": "Jan", "pH": 7.0, "turbidity": 4.0},
                {"date": "2023-01-01", "sensor_Id": "B", "month": "Jan", "pH": 7.2, "turbidity": 5.0},
                {"date": "2023-01-02", "sensor_Id": "A", "month": "Jan", "pH": null, "turbidity": 4.5},
                {"date": "2023-01-02", "sensor_Id": "B", "month": "Jan", "pH": 7.1, "turbidity": 5.5},
                {"date": "2023-01-03", "sensor_Id": "A", "month": "Jan", "turbidity": 6.0}
            ]"#,
            "[]",
        )
        .unwrap()
    }

    fn scatter(spec: &ChartSpec, i: usize) -> &ScatterTrace {
        spec.data[i].as_scatter().unwrap()
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let readings: Vec<SensorReading> = serde_json::from_str(
            r#"[
                {"sensor_Id": 3}, {"sensor_Id": 1}, {"sensor_Id": 3}, {"sensor_Id": 2}, {"sensor_Id": 1}
            ]"#,
        )
        .unwrap();
        let ids: Vec<String> = group_by_sensor(&readings)
            .into_iter()
            .map(|g| g.sensor_id)
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn grouping_partitions_every_reading() {
        let state = two_sensor_state();
        let groups = group_by_sensor(state.sensors());
        let total: usize = groups.iter().map(|g| g.readings.len()).sum();
        assert_eq!(total, state.sensors().len());
    }

    #[test]
    fn one_trace_per_sensor() {
        let state = two_sensor_state();
        let spec = render_series(&state, &VariableDescriptor::new("turbidity"));

        assert_eq!(spec.data.len(), 2);
        assert_eq!(scatter(&spec, 0).name, "Sensor A");
        assert_eq!(scatter(&spec, 0).x.len(), 3);
        assert_eq!(scatter(&spec, 0).y.len(), 3);
        assert_eq!(scatter(&spec, 1).name, "Sensor B");
        assert_eq!(scatter(&spec, 1).y.len(), 2);
        assert_eq!(
            scatter(&spec, 0).x,
            vec![json!("2023-01-01"), json!("2023-01-02"), json!("2023-01-03")]
        );
    }

    #[test]
    fn nulls_and_missing_values_pass_through() {
        let state = two_sensor_state();
        let spec = render_series(&state, &VariableDescriptor::new("pH"));
        assert_eq!(scatter(&spec, 0).y, vec![json!(7.0), Value::Null, Value::Null]);
    }

    #[test]
    fn rerender_replaces_all_traces() {
        let state = two_sensor_state();
        let first = render_series(&state, &VariableDescriptor::new("pH"));
        let second = render_series(&state, &VariableDescriptor::new("turbidity"));

        assert_eq!(first.data.len(), second.data.len());
        assert_eq!(scatter(&second, 1).y, vec![json!(5.0), json!(5.5)]);
        assert!(second
            .data
            .iter()
            .all(|t| t.as_scatter().unwrap().hovertemplate.as_deref().unwrap().contains("turbidity")));
    }

    #[test]
    fn labels_include_unit() {
        let state = two_sensor_state();
        let spec = render_series(&state, &VariableDescriptor::new("turbidity"));

        assert_eq!(
            spec.layout.title.as_ref().unwrap().text,
            "turbidity over Time (NTU)"
        );
        assert_eq!(
            spec.layout.yaxis.as_ref().unwrap().title.as_ref().unwrap().text,
            "turbidity (NTU)"
        );
        assert_eq!(
            scatter(&spec, 0).hovertemplate.as_deref(),
            Some("Sensor A<br>Date: %{x}<br>turbidity: %{y} NTU<extra></extra>")
        );
    }

    #[test]
    fn labels_without_unit() {
        let state = two_sensor_state();
        let spec = render_series(&state, &VariableDescriptor::new("salinity"));

        assert_eq!(spec.layout.title.as_ref().unwrap().text, "salinity over Time");
        assert_eq!(
            scatter(&spec, 1).hovertemplate.as_deref(),
            Some("Sensor B<br>Date: %{x}<br>salinity: %{y}<extra></extra>")
        );
        assert!(scatter(&spec, 1).y.iter().all(Value::is_null));
    }

    #[test]
    fn numeric_sensor_ids_are_named_in_decimal() {
        let state = DashboardState::from_json(
            include_str!("../../fixtures/sensor_data.json"),
            "[]",
        )
        .unwrap();
        let spec = render_series(&state, &VariableDescriptor::new("depth"));
        let names: Vec<&str> = spec
            .data
            .iter()
            .map(|t| t.as_scatter().unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["Sensor 1", "Sensor 2", "Sensor 3"]);
    }

    #[test]
    fn missing_and_null_sensor_ids_get_separate_traces() {
        let state = DashboardState::from_json(
            r#"[
                {"date": "2023-01-01", "sensor_Id": null, "month": "Jan", "pH": 7.0},
                {"date": "2023-01-01", "month": "Jan", "pH": 7.3},
                {"date": "2023-01-02", "sensor_Id": null, "month": "Jan", "pH": 7.1}
            ]"#,
            "[]",
        )
        .unwrap();
        let spec = render_series(&state, &VariableDescriptor::new("pH"));
        let names: Vec<&str> = spec
            .data
            .iter()
            .map(|t| t.as_scatter().unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["Sensor null", "Sensor undefined"]);
        assert_eq!(scatter(&spec, 0).y, vec![json!(7.0), json!(7.1)]);
    }

    #[test]
    fn config_enables_scroll_zoom() {
        let state = two_sensor_state();
        let spec = render_series(&state, &VariableDescriptor::new("pH"));
        assert_eq!(
            spec.config_json().unwrap(),
            r#"{"responsive":true,"scrollZoom":true}"#
        );
    }
}
