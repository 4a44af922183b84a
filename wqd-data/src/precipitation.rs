//! Daily precipitation chart.

use crate::chart::{Axis, ChartSpec, Layout, Margin, ScatterTrace, Title, Trace, GRID_COLOR, TEMPLATE};
use crate::state::DashboardState;

/// Build the precipitation chart: a single line over the whole dataset,
/// in dataset order. Drawn once at startup.
pub fn render_precipitation(state: &DashboardState) -> ChartSpec {
    let readings = state.precipitation();
    let x = readings.iter().map(|r| r.date.clone()).collect();
    let y = readings.iter().map(|r| r.precipitation.clone()).collect();

    ChartSpec {
        data: vec![Trace::Scatter(ScatterTrace::lines("Precipitation", x, y))],
        layout: Layout {
            title: Some(Title::heading("Daily Precipitation Over Time")),
            xaxis: Some(Axis::date()),
            yaxis: Some(Axis {
                title: Some(Title::plain("Precipitation (mm)")),
                gridcolor: Some(GRID_COLOR.to_string()),
                ..Default::default()
            }),
            margin: Some(Margin::default()),
            template: Some(TEMPLATE.to_string()),
            ..Default::default()
        },
        config: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SENSOR_FIXTURE: &str = include_str!("../../fixtures/sensor_data.json");

    #[test]
    fn single_trace_in_dataset_order() {
        let state = DashboardState::from_json(
            SENSOR_FIXTURE,
            r#"[
                {"date": "2023-01-02", "precipitation": 3.0},
                {"date": "2023-01-01", "precipitation": 0},
                {"date": "2023-01-03", "precipitation": null}
            ]"#,
        )
        .unwrap();
        let spec = render_precipitation(&state);

        assert_eq!(spec.data.len(), 1);
        let trace = spec.data[0].as_scatter().unwrap();
        assert_eq!(trace.name, "Precipitation");
        assert_eq!(
            trace.x,
            vec![json!("2023-01-02"), json!("2023-01-01"), json!("2023-01-03")]
        );
        assert_eq!(trace.y, vec![json!(3.0), json!(0), json!(null)]);
    }

    #[test]
    fn empty_dataset_gives_empty_trace() {
        let state = DashboardState::from_json(SENSOR_FIXTURE, "[]").unwrap();
        let spec = render_precipitation(&state);
        let trace = spec.data[0].as_scatter().unwrap();
        assert!(trace.x.is_empty());
        assert!(trace.y.is_empty());
    }

    #[test]
    fn layout_labels() {
        let state = DashboardState::from_json(SENSOR_FIXTURE, "[]").unwrap();
        let layout = serde_json::to_value(&render_precipitation(&state).layout).unwrap();
        assert_eq!(layout["title"]["text"], json!("Daily Precipitation Over Time"));
        assert_eq!(layout["title"]["font"]["size"], json!(22));
        assert_eq!(layout["yaxis"]["title"]["text"], json!("Precipitation (mm)"));
        assert_eq!(layout["template"], json!("plotly_white"));
        assert_eq!(layout["margin"], json!({"t": 50, "l": 60, "r": 30, "b": 80}));
    }
}
