//! The loaded datasets, bundled once at startup and read by every renderer.

use crate::catalog::{self, VariableDescriptor};
use crate::config::DashboardConfig;
use crate::models::{PrecipitationReading, SensorReading};
use anyhow::Context;
use std::fmt;

/// Sensor readings, precipitation readings and the inferred variable set.
///
/// Built once by the loader and never mutated afterwards; renderers take it
/// by shared reference.
///
/// # Example
///
/// ```rust
/// use wqd_data::DashboardState;
///
/// let state = DashboardState::from_json(
///     r#"[{"date": "2023-01-05", "sensor_Id": 1, "month": "Jan", "turbidity": 4.2, "rdo": 9.6}]"#,
///     r#"[]"#,
/// )
/// .unwrap();
/// let names: Vec<&str> = state.variables().iter().map(|v| v.name.as_str()).collect();
/// assert_eq!(names, vec!["turbidity", "rdo"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    sensors: Vec<SensorReading>,
    precipitation: Vec<PrecipitationReading>,
    variables: Vec<VariableDescriptor>,
}

impl DashboardState {
    /// Bundle the two datasets and infer the variable catalog.
    ///
    /// Fails when the sensor dataset is empty, as there is no first record to
    /// infer variables from.
    pub fn new(
        sensors: Vec<SensorReading>,
        precipitation: Vec<PrecipitationReading>,
    ) -> anyhow::Result<Self> {
        let variables = catalog::infer_variables(&sensors)
            .context("sensor dataset is empty; cannot infer variables")?;
        log::info!(
            "[WQD] state: {} sensor readings, {} precipitation readings, {} variables",
            sensors.len(),
            precipitation.len(),
            variables.len()
        );
        Ok(Self {
            sensors,
            precipitation,
            variables,
        })
    }

    /// Parse both JSON documents and bundle them.
    pub fn from_json(sensor_json: &str, precip_json: &str) -> anyhow::Result<Self> {
        let sensors = parse_sensor_data(sensor_json)?;
        let precipitation = parse_precipitation_data(precip_json)?;
        Self::new(sensors, precipitation)
    }

    pub fn sensors(&self) -> &[SensorReading] {
        &self.sensors
    }

    pub fn precipitation(&self) -> &[PrecipitationReading] {
        &self.precipitation
    }

    pub fn variables(&self) -> &[VariableDescriptor] {
        &self.variables
    }

    /// Find a catalog variable by name.
    pub fn variable(&self, name: &str) -> Option<&VariableDescriptor> {
        self.variables.iter().find(|v| v.name == name)
    }
}

/// A dataset that could not be loaded, and why.
///
/// `source` is the location the dataset was requested from, so the
/// dashboard can point at the file that needs fixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub source: String,
    pub reason: String,
}

impl LoadFailure {
    pub fn new(source: &str, error: &anyhow::Error) -> Self {
        Self {
            source: source.to_string(),
            reason: format!("{:#}", error),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.reason)
    }
}

impl std::error::Error for LoadFailure {}

/// Parse the two fetched bodies, blaming the dataset that broke.
///
/// An empty sensor dataset is charged to the sensor source, since that is
/// the file with no first record.
pub fn assemble(
    config: &DashboardConfig,
    sensor_json: &str,
    precip_json: &str,
) -> Result<DashboardState, LoadFailure> {
    let sensors = parse_sensor_data(sensor_json)
        .map_err(|e| LoadFailure::new(&config.sensor_data_url, &e))?;
    let precipitation = parse_precipitation_data(precip_json)
        .map_err(|e| LoadFailure::new(&config.precip_data_url, &e))?;
    DashboardState::new(sensors, precipitation)
        .map_err(|e| LoadFailure::new(&config.sensor_data_url, &e))
}

/// Parse `sensor_data.json`: a JSON array of sensor records.
pub fn parse_sensor_data(json: &str) -> anyhow::Result<Vec<SensorReading>> {
    serde_json::from_str(json).context("sensor data is not a JSON array of records")
}

/// Parse `noaa_precip_data.json`: a JSON array of precipitation records.
pub fn parse_precipitation_data(json: &str) -> anyhow::Result<Vec<PrecipitationReading>> {
    serde_json::from_str(json).context("precipitation data is not a JSON array of records")
}
