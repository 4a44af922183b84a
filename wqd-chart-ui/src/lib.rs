//! Shared Dioxus components and Plotly.js bridge for the sensor dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand chart specs to Plotly via `js_sys::eval()`
//! - `fetch`: browser `fetch` of the two JSON datasets
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
