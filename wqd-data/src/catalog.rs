//! Variable catalog: display units and schema inference.

use crate::models::SensorReading;
use serde::Serialize;

/// Keys of a sensor record that are not plottable metrics.
pub const RESERVED_KEYS: [&str; 3] = ["date", "sensor_Id", "month"];

/// Known variables and their display units.
pub const VARIABLE_UNITS: &[(&str, &str)] = &[
    ("turbidity", "NTU"),
    ("depth", "inch"),
    ("pH", "pH"),
    ("conductivity", "µS/cm"),
    ("velocity", "ft/s"),
    ("rdo", "mg/L"),
];

/// Look up the display unit of a variable. Unknown variables have none.
pub fn unit_for(variable: &str) -> Option<&'static str> {
    VARIABLE_UNITS
        .iter()
        .find(|(name, _)| *name == variable)
        .map(|(_, unit)| *unit)
}

/// A plottable metric column together with its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDescriptor {
    pub name: String,
    pub unit: Option<&'static str>,
}

impl VariableDescriptor {
    /// Build a descriptor, pulling the unit from [`VARIABLE_UNITS`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let unit = unit_for(&name);
        Self { name, unit }
    }

    /// `"pH (pH)"` when a unit exists, otherwise just the name.
    pub fn axis_label(&self) -> String {
        format!("{}{}", self.name, self.unit_suffix())
    }

    /// `" (NTU)"` or an empty string.
    pub fn unit_suffix(&self) -> String {
        match self.unit {
            Some(unit) => format!(" ({})", unit),
            None => String::new(),
        }
    }
}

/// Infer the variable set from the first reading's keys.
///
/// Later readings are never consulted. Returns `None` for an empty dataset
/// since there is no record to infer from.
pub fn infer_variables(readings: &[SensorReading]) -> Option<Vec<VariableDescriptor>> {
    let first = readings.first()?;
    Some(
        first
            .metrics
            .keys()
            .filter(|key| !RESERVED_KEYS.contains(&key.as_str()))
            .map(VariableDescriptor::new)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(json: &str) -> Vec<SensorReading> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn known_units() {
        assert_eq!(unit_for("turbidity"), Some("NTU"));
        assert_eq!(unit_for("conductivity"), Some("µS/cm"));
        assert_eq!(unit_for("rdo"), Some("mg/L"));
        assert_eq!(unit_for("salinity"), None);
    }

    #[test]
    fn axis_label_with_and_without_unit() {
        assert_eq!(VariableDescriptor::new("depth").axis_label(), "depth (inch)");
        assert_eq!(VariableDescriptor::new("velocity").axis_label(), "velocity (ft/s)");
        assert_eq!(VariableDescriptor::new("salinity").axis_label(), "salinity");
        assert_eq!(VariableDescriptor::new("salinity").unit_suffix(), "");
    }

    #[test]
    fn infers_from_first_record_only() {
        let data = readings(
            r#"[
                {"date": "d1", "sensor_Id": "A", "month": "Jan", "pH": 7, "depth": 3},
                {"date": "d2", "sensor_Id": "A", "month": "Jan", "pH": 7, "depth": 3, "rdo": 9}
            ]"#,
        );
        let names: Vec<String> = infer_variables(&data)
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["pH", "depth"]);
    }

    #[test]
    fn reserved_keys_never_become_variables() {
        let data = readings(r#"[{"date": "d1", "sensor_Id": "A", "month": "Jan"}]"#);
        assert!(infer_variables(&data).unwrap().is_empty());
    }

    #[test]
    fn empty_dataset_has_nothing_to_infer() {
        assert!(infer_variables(&[]).is_none());
    }
}
