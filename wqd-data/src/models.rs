//! Raw dataset records.
//!
//! Field values are kept as [`serde_json::Value`] so that whatever the data
//! files contain (numbers, nulls, stray strings) reaches the chart layer
//! unchanged. Only the gauge path interprets values numerically.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Grouping key of a reading that has no `sensor_Id` at all.
pub const MISSING_SENSOR_KEY: &str = "undefined";

/// A single row of `sensor_data.json`.
///
/// The three reserved keys are lifted into named fields; every other key of
/// the JSON object lands in `metrics`, in the order it appears in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(default)]
    pub date: Value,
    /// `None` when the key is absent, `Some(Null)` when it is an explicit null.
    #[serde(
        rename = "sensor_Id",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub sensor_id: Option<Value>,
    #[serde(default)]
    pub month: Value,
    #[serde(flatten)]
    pub metrics: Map<String, Value>,
}

impl SensorReading {
    /// Raw value of a metric column, `Null` when the key is absent.
    pub fn value(&self, variable: &str) -> &Value {
        self.metrics.get(variable).unwrap_or(&Value::Null)
    }

    /// Sensor identifier as a display/grouping key.
    ///
    /// An absent identifier and an explicit `null` are different sensors.
    pub fn sensor_key(&self) -> String {
        match &self.sensor_id {
            Some(id) => display_key(id),
            None => MISSING_SENSOR_KEY.to_string(),
        }
    }
}

/// Keep a present key as `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A single row of `noaa_precip_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    #[serde(default)]
    pub date: Value,
    #[serde(default)]
    pub precipitation: Value,
}

/// Render a JSON value the way it reads as an object key or `<option>` value:
/// strings verbatim, numbers in decimal, `true`/`false`/`null` literally.
pub fn display_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sensor_reading_splits_reserved_keys_from_metrics() {
        let reading: SensorReading = serde_json::from_value(json!({
            "date": "2023-01-05",
            "sensor_Id": 7,
            "month": "Jan",
            "turbidity": 4.2,
            "pH": null,
        }))
        .unwrap();

        assert_eq!(reading.date, json!("2023-01-05"));
        assert_eq!(reading.sensor_id, Some(json!(7)));
        assert_eq!(reading.month, json!("Jan"));
        let keys: Vec<&str> = reading.metrics.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["turbidity", "pH"]);
    }

    #[test]
    fn metric_order_follows_the_file() {
        let reading: SensorReading = serde_json::from_str(
            r#"{"rdo": 1, "date": "d", "depth": 2, "sensor_Id": "x", "month": "m", "conductivity": 3}"#,
        )
        .unwrap();
        let keys: Vec<&str> = reading.metrics.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["rdo", "depth", "conductivity"]);
    }

    #[test]
    fn missing_values_read_as_null() {
        let reading: SensorReading =
            serde_json::from_str(r#"{"turbidity": 1.5}"#).unwrap();
        assert_eq!(reading.value("pH"), &Value::Null);
        assert_eq!(reading.value("turbidity"), &json!(1.5));
        assert_eq!(reading.month, Value::Null);
    }

    #[test]
    fn absent_and_null_sensor_ids_stay_distinct() {
        let explicit: SensorReading = serde_json::from_str(r#"{"sensor_Id": null}"#).unwrap();
        let absent: SensorReading = serde_json::from_str(r#"{"pH": 7.1}"#).unwrap();

        assert_eq!(explicit.sensor_id, Some(Value::Null));
        assert_eq!(explicit.sensor_key(), "null");
        assert_eq!(absent.sensor_id, None);
        assert_eq!(absent.sensor_key(), "undefined");
        assert!(!absent.metrics.contains_key("sensor_Id"));
    }

    #[test]
    fn display_key_matches_option_values() {
        assert_eq!(display_key(&json!("A")), "A");
        assert_eq!(display_key(&json!(12)), "12");
        assert_eq!(display_key(&json!(2.5)), "2.5");
        assert_eq!(display_key(&json!(true)), "true");
        assert_eq!(display_key(&Value::Null), "null");
    }

    #[test]
    fn precipitation_reading_keeps_raw_values() {
        let reading: PrecipitationReading =
            serde_json::from_str(r#"{"date": "2023-02-02", "precipitation": 25.4}"#).unwrap();
        assert_eq!(reading.date, json!("2023-02-02"));
        assert_eq!(reading.precipitation, json!(25.4));
    }
}
