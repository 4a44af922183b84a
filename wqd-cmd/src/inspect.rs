//! Dataset overview.

use crate::sources::load_state;
use crate::DataSources;
use wqd_data::controls::ControlOptions;
use wqd_data::summary::DatasetSummary;
use wqd_data::DashboardState;

/// Human-readable overview of the loaded datasets.
pub fn describe(state: &DashboardState) -> String {
    let summary = DatasetSummary::from_state(state);
    let options = ControlOptions::from_state(state);

    let mut out = format!(
        "Sensor readings:        {}\nSensors:                {}\nPrecipitation readings: {}\n",
        summary.sensor_records, summary.sensors, summary.precipitation_records
    );
    if let Some(span) = summary.date_span() {
        out.push_str(&format!("Date span:              {}\n", span));
    }

    out.push_str("Variables:\n");
    for variable in state.variables() {
        match variable.unit {
            Some(unit) => out.push_str(&format!("  {} ({})\n", variable.name, unit)),
            None => out.push_str(&format!("  {}\n", variable.name)),
        }
    }

    let months: Vec<&str> = options.months.iter().map(|m| m.label.as_str()).collect();
    out.push_str(&format!("Months: {}\n", months.join(", ")));
    out
}

pub async fn run_inspect(sources: &DataSources) -> anyhow::Result<()> {
    let state = load_state(sources).await?;
    print!("{}", describe(&state));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_fixtures() {
        let state = DashboardState::from_json(
            include_str!("../../fixtures/sensor_data.json"),
            include_str!("../../fixtures/noaa_precip_data.json"),
        )
        .unwrap();
        let text = describe(&state);

        assert!(text.contains("Sensors:                3\n"));
        assert!(text.contains("Date span:              2022-12-20 to 2023-02-16\n"));
        assert!(text.contains("  conductivity (µS/cm)\n"));
        assert!(text.ends_with("Months: Jan, Feb, Dec\n"));
    }

    #[test]
    fn unknown_variables_have_no_unit() {
        let state =
            DashboardState::from_json(r#"[{"month": "Jan", "salinity": 1.2}]"#, "[]").unwrap();
        let text = describe(&state);
        assert!(text.contains("  salinity\n"));
        assert!(!text.contains("Date span"));
    }
}
