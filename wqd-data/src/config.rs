//! Dataset locations and the DOM ids the dashboard draws into.

/// Default location of the sensor dataset, relative to the hosting page.
pub const SENSOR_DATA_URL: &str = "sensor_data.json";
/// Default location of the precipitation dataset, relative to the hosting page.
pub const PRECIP_DATA_URL: &str = "noaa_precip_data.json";

/// Element ids of the drawing targets and selector controls.
pub mod element_ids {
    pub const PRECIP_CHART: &str = "precip-chart";
    pub const SENSOR_CHART: &str = "sensor-chart";
    pub const GAUGE_MEAN: &str = "gauge-mean";
    pub const GAUGE_MAX: &str = "gauge-max";
    pub const GAUGE_MIN: &str = "gauge-min";
    pub const VAR_SELECT: &str = "var-select";
    pub const MONTH_SELECT: &str = "month-select";
}

/// Where the loader fetches the two datasets from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub sensor_data_url: String,
    pub precip_data_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sensor_data_url: SENSOR_DATA_URL.to_string(),
            precip_data_url: PRECIP_DATA_URL.to_string(),
        }
    }
}
