//! One clickable preset range.

use dioxus::prelude::*;
use drp_ranges::selection::preview_for;
use drp_ranges::{DateRange, StaticRange};

#[derive(Props, Clone, PartialEq)]
pub struct StaticRangeButtonProps {
    pub static_range: StaticRange,
    /// Rendered label content
    pub label: Element,
    /// Some entry of the host's ranges matches this preset
    #[props(default = false)]
    pub selected: bool,
    /// Text color for a selected button; empty for none
    #[props(default = String::new())]
    pub color: String,
    #[props(default = false)]
    pub disabled: bool,
    /// Receives the preset's range on click
    pub on_commit: EventHandler<DateRange>,
    /// Receives the preset's range on hover/focus and `None` on leave
    pub on_preview: EventHandler<Option<DateRange>>,
}

/// Button for a static range. Hover and focus preview the range, leaving
/// clears the preview, clicking commits it.
#[component]
pub fn StaticRangeButton(props: StaticRangeButtonProps) -> Element {
    let class = if props.selected {
        "rdr-static-range rdr-static-range-selected"
    } else {
        "rdr-static-range"
    };
    let style = if props.color.is_empty() {
        String::new()
    } else {
        format!("color: {};", props.color)
    };

    let click_range = props.static_range.clone();
    let focus_range = props.static_range.clone();
    let hover_range = props.static_range.clone();
    let leave_range = props.static_range.clone();
    let on_commit = props.on_commit;
    let on_preview = props.on_preview;

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            style: "{style}",
            disabled: props.disabled,
            onclick: move |_| on_commit.call(click_range.range()),
            onfocus: move |_| on_preview.call(preview_for(&focus_range, true)),
            onmouseover: move |_| on_preview.call(preview_for(&hover_range, true)),
            onmouseleave: move |_| on_preview.call(preview_for(&leave_range, false)),
            span {
                class: "rdr-static-range-label",
                tabindex: "-1",
                {props.label}
            }
        }
    }
}
