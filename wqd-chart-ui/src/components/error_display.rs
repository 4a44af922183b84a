//! Banner shown when a dataset could not be loaded.

use dioxus::prelude::*;
use wqd_data::LoadFailure;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub failure: LoadFailure,
}

/// Names the dataset that failed and the underlying reason. Nothing else
/// is drawn once a load has failed.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            div {
                strong { "Could not load " }
                code { "{props.failure.source}" }
            }
            div {
                style: "margin-top: 4px; font-size: 13px;",
                "{props.failure.reason}"
            }
            div {
                style: "margin-top: 8px; font-size: 12px; color: #666;",
                "Both datasets must be served next to this page; the dashboard does not retry."
            }
        }
    }
}
