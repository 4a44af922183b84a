//! Dashboard header with title and dataset summary line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Summary line shown under the title (e.g., record counts and date span)
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header showing title and optional summary line.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
