//! Drawing target for one Plotly figure.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id Plotly draws into
    pub id: String,
    /// Text shown over the empty target until something is drawn
    #[props(default = String::new())]
    pub placeholder: String,
    #[props(default = 400)]
    pub min_height: u32,
}

/// A sized div for a Plotly figure, optionally with a placeholder overlay.
///
/// The overlay is a sibling of the target so `Plotly.newPlot` never wipes it;
/// an empty string clears it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if !props.placeholder.is_empty() {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #999; font-size: 13px; text-align: center;",
                    "{props.placeholder}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
