//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use std::rc::Rc;
use wqd_data::controls::ControlOptions;
use wqd_data::{DashboardState, LoadFailure};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded datasets (None until loaded, never replaced afterwards)
    pub dashboard: Signal<Option<Rc<DashboardState>>>,
    /// Options of the variable and month selectors
    pub controls: Signal<ControlOptions>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Dataset that failed to load, if any
    pub load_error: Signal<Option<LoadFailure>>,
    /// Raw value of the variable selector
    pub selected_variable: Signal<String>,
    /// Raw value of the month selector
    pub selected_month: Signal<String>,
    /// Whether the gauges have been drawn at least once
    pub gauges_drawn: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            controls: Signal::new(ControlOptions::default()),
            loading: Signal::new(true),
            load_error: Signal::new(None),
            selected_variable: Signal::new(String::new()),
            selected_month: Signal::new(String::new()),
            gauges_drawn: Signal::new(false),
        }
    }

    /// Store the loaded datasets and populate the selectors.
    ///
    /// Both selectors start on their first option, as a freshly filled
    /// `<select>` would.
    pub fn install(&mut self, dashboard: DashboardState) {
        let controls = ControlOptions::from_state(&dashboard);
        self.selected_variable.set(controls.initial_variable());
        self.selected_month.set(controls.initial_month());
        self.controls.set(controls);
        self.dashboard.set(Some(Rc::new(dashboard)));
        self.loading.set(false);
    }

    /// Record a failed load and stop showing the spinner.
    pub fn fail(&mut self, failure: LoadFailure) {
        self.load_error.set(Some(failure));
        self.loading.set(false);
    }
}
