//! Start and end date inputs for editing one range directly.

use dioxus::prelude::*;
use drp_ranges::DateRange;
use drp_utils::dates::format_date;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangeInputsProps {
    pub range: DateRange,
    /// Receives `range` with the edited boundary replaced
    pub on_change: EventHandler<DateRange>,
    /// Receives a message when the typed date cannot be parsed
    pub on_error: EventHandler<String>,
}

/// "From"/"To" date inputs bound to a single range.
#[component]
pub fn DateRangeInputs(props: DateRangeInputsProps) -> Element {
    let start = props
        .range
        .start_date
        .map(|d| format_date(&d.date()))
        .unwrap_or_default();
    let end = props
        .range
        .end_date
        .map(|d| format_date(&d.date()))
        .unwrap_or_default();

    let start_range = props.range.clone();
    let on_change = props.on_change;
    let on_error = props.on_error;
    let on_start_change = move |evt: Event<FormData>| {
        match start_range.with_start_ymd(&evt.value()) {
            Ok(range) => on_change.call(range),
            Err(e) => on_error.call(e.to_string()),
        }
    };

    let end_range = props.range.clone();
    let on_end_change = move |evt: Event<FormData>| {
        match end_range.with_end_ymd(&evt.value()) {
            Ok(range) => on_change.call(range),
            Err(e) => on_error.call(e.to_string()),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
