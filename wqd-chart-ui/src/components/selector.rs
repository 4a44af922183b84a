//! Labelled `<select>` shared by the variable and month selectors.

use dioxus::prelude::*;
use wqd_data::controls::SelectOption;

#[derive(Props, Clone, PartialEq)]
pub struct SelectorProps {
    /// DOM id of the `<select>`
    pub id: String,
    /// Label text in front of the control
    pub label: String,
    pub options: Vec<SelectOption>,
    /// Value of the currently selected option
    pub selected: String,
    /// Called with the new value on every change
    pub on_change: EventHandler<String>,
}

/// A labelled dropdown.
#[component]
pub fn Selector(props: SelectorProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                for opt in props.options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == props.selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
