//! Data layer for the sensor & precipitation dashboard.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! dashboard (WASM) and the CLI (native) draw from the same code:
//!
//! - [`models`]: raw sensor and precipitation records as parsed from JSON
//! - [`catalog`]: variable units and schema inference from the first record
//! - [`state`]: [`DashboardState`], the immutable-after-load dataset bundle,
//!   and [`LoadFailure`] naming the dataset that failed to load
//! - [`series`] / [`precipitation`] / [`gauges`]: pure renderers returning
//!   Plotly figure specs ([`chart::ChartSpec`])
//! - [`controls`]: dropdown options and selection fallback
//! - [`summary`]: dataset counts and date span
//!
//! # Usage
//!
//! ```rust
//! use wqd_data::{controls, gauges, series, DashboardState};
//!
//! let sensors = r#"[
//!     {"date": "2023-01-05", "sensor_Id": "A", "month": "Jan", "pH": 7.0},
//!     {"date": "2023-01-06", "sensor_Id": "B", "month": "Jan", "pH": 7.4}
//! ]"#;
//! let precip = r#"[{"date": "2023-01-05", "precipitation": 1.2}]"#;
//!
//! let state = DashboardState::from_json(sensors, precip).unwrap();
//! let variable = controls::resolve_variable(&state, "").unwrap();
//! assert_eq!(variable.name, "pH");
//!
//! let chart = series::render_series(&state, &variable);
//! assert_eq!(chart.data.len(), 2);
//!
//! let gauges = gauges::render_gauges(&state, &variable, "Jan").unwrap();
//! assert_eq!(gauges.summary.max, 7.4);
//! ```

pub mod catalog;
pub mod chart;
pub mod config;
pub mod controls;
pub mod gauges;
pub mod models;
pub mod precipitation;
pub mod series;
pub mod state;
pub mod summary;

pub use catalog::VariableDescriptor;
pub use config::DashboardConfig;
pub use state::{DashboardState, LoadFailure};
