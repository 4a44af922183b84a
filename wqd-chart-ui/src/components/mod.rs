//! Reusable Dioxus RSX components for the sensor dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod gauge_panel;
mod loading_spinner;
mod month_selector;
mod selector;
mod variable_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use gauge_panel::GaugePanel;
pub use loading_spinner::LoadingSpinner;
pub use month_selector::MonthSelector;
pub use selector::Selector;
pub use variable_selector::VariableSelector;
