//! Inline error message for rejected date input.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows why the last edit was not applied.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "rdr-error",
            role: "alert",
            style: "padding: 6px 10px; margin: 6px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; font-size: 12px;",
            "{props.message}"
        }
    }
}
