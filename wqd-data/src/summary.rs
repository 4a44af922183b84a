//! Dataset counts and date span, shown in the dashboard header and by the CLI.

use crate::series::group_by_sensor;
use crate::state::DashboardState;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// Date format of the `date` fields (a time part may follow).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub sensor_records: usize,
    pub sensors: usize,
    pub precipitation_records: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl DatasetSummary {
    pub fn from_state(state: &DashboardState) -> Self {
        let dates = state
            .sensors()
            .iter()
            .map(|r| &r.date)
            .chain(state.precipitation().iter().map(|r| &r.date))
            .filter_map(parse_date);

        let (first_date, last_date) = dates.fold((None, None), |(lo, hi), d| {
            (
                Some(lo.map_or(d, |lo: NaiveDate| lo.min(d))),
                Some(hi.map_or(d, |hi: NaiveDate| hi.max(d))),
            )
        });

        Self {
            sensor_records: state.sensors().len(),
            sensors: group_by_sensor(state.sensors()).len(),
            precipitation_records: state.precipitation().len(),
            first_date,
            last_date,
        }
    }

    /// "2022-12-20 to 2023-02-16", `None` when no date parsed.
    pub fn date_span(&self) -> Option<String> {
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => Some(format!(
                "{} to {}",
                first.format(DATE_FORMAT),
                last.format(DATE_FORMAT)
            )),
            _ => None,
        }
    }
}

/// Parse a `YYYY-MM-DD` date, ignoring anything after the date part.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?;
    let date_part = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}
