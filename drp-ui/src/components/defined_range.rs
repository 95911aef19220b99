//! Panel of preset ranges and relative day-count inputs.

use crate::components::{InputRangeField, StaticRangeButton};
use crate::state::InputFocus;
use chrono::Local;
use dioxus::prelude::*;
use drp_ranges::catalog;
use drp_ranges::selection::{
    controls_disabled, find_selected_range, input_display_value, propagate_change,
    uses_custom_label, SelectionContext, DEFAULT_FOCUSED_RANGE, DEFAULT_RANGE_COLORS,
};
use drp_ranges::{DateRange, FocusedRange, InputRange, RangePatch, StaticRange};

fn default_range_colors() -> Vec<String> {
    DEFAULT_RANGE_COLORS.iter().map(|c| c.to_string()).collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct DefinedRangeProps {
    /// Preset buttons, defaults to the process-wide catalog
    #[props(default = catalog::static_ranges())]
    pub static_ranges: Vec<StaticRange>,
    /// Relative-range fields, defaults to the process-wide catalog
    #[props(default = catalog::input_ranges())]
    pub input_ranges: Vec<InputRange>,
    /// The host's full selection; never modified here
    #[props(default)]
    pub ranges: Vec<DateRange>,
    #[props(default = DEFAULT_FOCUSED_RANGE)]
    pub focused_range: FocusedRange,
    /// Colors by range position for ranges without their own color
    #[props(default = default_range_colors())]
    pub range_colors: Vec<String>,
    #[props(default = false)]
    pub focus_next_range_on_defined_range_click: bool,
    /// Only the first range is editable; later ranges follow its length
    #[props(default = false)]
    pub restrict_to_first_range_length: bool,
    #[props(default = String::new(), into)]
    pub class: String,
    pub header_content: Option<Element>,
    pub footer_content: Option<Element>,
    pub on_change: Option<EventHandler<RangePatch>>,
    pub on_preview_change: Option<EventHandler<Option<DateRange>>>,
    pub on_range_focus_change: Option<EventHandler<FocusedRange>>,
    /// Label content for presets marked `has_custom_rendering`
    pub render_static_range_label: Option<Callback<StaticRange, Element>>,
}

/// Preset and relative date ranges wired to a host-owned selection.
///
/// Clicking a preset or typing a count replaces the focused range through
/// `on_change`; the component keeps no selection state of its own.
#[component]
pub fn DefinedRange(props: DefinedRangeProps) -> Element {
    let mut input_focus = use_signal(InputFocus::default);

    let commit_props = props.clone();
    let on_commit = use_callback(move |update: DateRange| {
        let context = SelectionContext {
            ranges: &commit_props.ranges,
            focused_range: commit_props.focused_range,
            focus_next_range_on_defined_range_click: commit_props
                .focus_next_range_on_defined_range_click,
            restrict_to_first_range_length: commit_props.restrict_to_first_range_length,
        };
        propagate_change(
            &context,
            &update,
            commit_props
                .on_change
                .map(|handler| move |patch: RangePatch| handler.call(patch)),
            commit_props
                .on_range_focus_change
                .map(|handler| move |focus: FocusedRange| handler.call(focus)),
        );
    });

    let on_preview_change = props.on_preview_change;
    let on_preview = use_callback(move |range: Option<DateRange>| {
        if let Some(handler) = on_preview_change {
            log::trace!("Previewing {range:?}");
            handler.call(range);
        }
    });

    let on_focus = use_callback(move |index: usize| input_focus.set(InputFocus::focus(index)));
    let on_blur = use_callback(move |_: usize| {
        let blurred = input_focus().blur();
        input_focus.set(blurred);
    });

    let disabled = controls_disabled(props.restrict_to_first_range_length, props.focused_range);

    let buttons: Vec<(StaticRange, bool, String, Element)> = props
        .static_ranges
        .iter()
        .map(|static_range| {
            let selected = find_selected_range(&props.ranges, static_range);
            let color = selected
                .and_then(|s| s.color(&props.range_colors))
                .unwrap_or_default();
            let has_renderer = props.render_static_range_label.is_some();
            let label = match props.render_static_range_label {
                Some(render) if uses_custom_label(static_range, has_renderer) => {
                    render.call(static_range.clone())
                }
                _ => rsx! { "{static_range.label}" },
            };
            (static_range.clone(), selected.is_some(), color, label)
        })
        .collect();

    let now = Local::now().naive_local();
    let focused_input = input_focus().focused_input;
    let fields: Vec<(InputRange, String)> = props
        .input_ranges
        .iter()
        .map(|input_range| {
            let value = input_display_value(input_range, &props.ranges, props.focused_range, now);
            (input_range.clone(), value)
        })
        .collect();

    rsx! {
        div {
            class: "rdr-defined-ranges {props.class}",
            style: "display: flex; flex-direction: column; gap: 8px; width: 226px;",
            {props.header_content.clone()}
            div {
                class: "rdr-static-ranges",
                style: "display: flex; flex-direction: column;",
                for (i, (static_range, selected, color, label)) in buttons.into_iter().enumerate() {
                    StaticRangeButton {
                        key: "{i}",
                        static_range,
                        label,
                        selected,
                        color,
                        disabled,
                        on_commit,
                        on_preview,
                    }
                }
            }
            div {
                class: "rdr-input-ranges",
                for (i, (input_range, value)) in fields.into_iter().enumerate() {
                    InputRangeField {
                        key: "{i}",
                        index: i,
                        input_range,
                        value,
                        focused: focused_input == Some(i),
                        disabled,
                        on_commit,
                        on_focus,
                        on_blur,
                    }
                }
            }
            {props.footer_content.clone()}
        }
    }
}
