//! Numeric text field driving a relative range ("N days up to today").

use dioxus::prelude::*;
use drp_ranges::selection::range_for_input;
use drp_ranges::{DateRange, InputRange};

#[derive(Props, Clone, PartialEq)]
pub struct InputRangeFieldProps {
    pub index: usize,
    pub input_range: InputRange,
    /// Current count for the focused range ("", "-", "∞" or a number)
    pub value: String,
    #[props(default = false)]
    pub focused: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Receives the range built from the typed count
    pub on_commit: EventHandler<DateRange>,
    pub on_focus: EventHandler<usize>,
    pub on_blur: EventHandler<usize>,
}

#[component]
pub fn InputRangeField(props: InputRangeFieldProps) -> Element {
    let index = props.index;
    let input_range = props.input_range.clone();
    let on_commit = props.on_commit;
    let on_focus = props.on_focus;
    let on_blur = props.on_blur;
    let border = if props.focused { "#3d91ff" } else { "#d7dae2" };

    let on_input = move |evt: Event<FormData>| {
        on_commit.call(range_for_input(&input_range, &evt.value()));
    };

    rsx! {
        div {
            class: "rdr-input-range",
            style: "display: flex; gap: 8px; align-items: center; margin: 4px 0;",
            input {
                class: "rdr-input-range-input",
                style: "width: 48px; border: 1px solid {border}; border-radius: 4px; text-align: center;",
                value: "{props.value}",
                disabled: props.disabled,
                onfocus: move |_| on_focus.call(index),
                onblur: move |_| on_blur.call(index),
                oninput: on_input,
            }
            span {
                class: "rdr-input-range-label",
                "{props.input_range.label}"
            }
        }
    }
}
