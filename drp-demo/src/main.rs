//! Defined-range picker demo
//!
//! Hosts a two-range selection ("selection" and "compare") and wires it to
//! the `DefinedRange` panel.
//!
//! Data flow:
//! 1. `picker.json` is embedded at compile time and parsed on mount; a bad
//!    config is logged and replaced by defaults.
//! 2. A catalog is anchored at mount time with the configured week start and
//!    extended with a custom-rendered "Last 30 Days" preset.
//! 3. The panel reports patches, previews and focus moves; the app applies
//!    them to its `PickerState` signals and re-renders.

use anyhow::Context;
use chrono::Local;
use dioxus::prelude::*;
use drp_ranges::catalog::{create_static_ranges, CatalogOptions, RangeCatalog, StaticRangeDef};
use drp_ranges::config::PickerConfig;
use drp_ranges::selection::range_identity;
use drp_ranges::{DateRange, FocusedRange, RangePatch, StaticRange};
use drp_ui::components::{DateRangeInputs, DefinedRange, ErrorDisplay};
use drp_ui::state::PickerState;
use drp_utils::dates::add_days;
use log::{error, info};

// Picker settings (week start, colors, focus behaviour).
const PICKER_CONFIG_JSON: &str = include_str!("../picker.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("defined-range-root"))
        .launch(App);
}

fn load_config() -> anyhow::Result<PickerConfig> {
    PickerConfig::from_json(PICKER_CONFIG_JSON).context("embedded picker.json")
}

/// Catalog presets plus a trailing "Last 30 Days" preset with a custom label.
fn demo_static_ranges(catalog: &RangeCatalog) -> Vec<StaticRange> {
    let dates = catalog.dates;
    let last_30 = StaticRangeDef::new("Last 30 Days", move || {
        DateRange::between(
            add_days(&dates.start_of_today, -29),
            dates.end_of_today,
        )
    })
    .with_custom_rendering();

    let mut ranges = catalog.static_ranges.clone();
    ranges.extend(create_static_ranges([last_30]));
    ranges
}

fn initial_ranges(catalog: &RangeCatalog) -> Vec<DateRange> {
    let preset = |label: &str| {
        catalog
            .static_range(label)
            .map(|r| r.range())
            .unwrap_or_default()
    };
    vec![
        preset("This Week").with_key("selection"),
        preset("Last Week").with_key("compare"),
    ]
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        load_config().unwrap_or_else(|e| {
            error!("Falling back to default picker config: {e:#}");
            PickerConfig::default()
        })
    });
    let options: CatalogOptions = config.catalog_options();
    let catalog = use_hook(|| RangeCatalog::anchored_at(Local::now().naive_local(), options));
    let static_ranges = use_hook(|| demo_static_ranges(&catalog));

    let init_catalog = catalog.clone();
    let mut state = use_context_provider(move || PickerState::new(initial_ranges(&init_catalog)));
    let mut restrict = use_signal(|| config.restrict_to_first_range_length);
    let mut error_msg: Signal<Option<String>> = use_signal(|| None);

    let ranges = (state.ranges)();
    let focused_range = (state.focused_range)();
    let focused_index = focused_range[0];
    let focused = ranges.get(focused_index).cloned().unwrap_or_default();

    let on_change = move |patch: RangePatch| {
        info!("Applying patch to {} range(s)", patch.len());
        error_msg.set(None);
        state.apply_patch(patch);
    };

    let on_direct_edit = move |range: DateRange| {
        let mut patch = RangePatch::default();
        patch.insert(range_identity(&range, focused_index), range);
        error_msg.set(None);
        state.apply_patch(patch);
    };

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Compare two periods" }

            if let Some(err) = error_msg() {
                ErrorDisplay { message: err }
            }

            div {
                style: "display: flex; gap: 24px; align-items: flex-start;",

                DefinedRange {
                    static_ranges: static_ranges.clone(),
                    input_ranges: catalog.input_ranges.clone(),
                    ranges: ranges.clone(),
                    focused_range,
                    range_colors: config.range_colors.clone(),
                    focus_next_range_on_defined_range_click: config.focus_next_range_on_defined_range_click,
                    restrict_to_first_range_length: restrict(),
                    header_content: rsx! {
                        p { style: "font-size: 12px; color: #666; margin: 0;", "Quick picks" }
                    },
                    footer_content: rsx! {
                        label {
                            style: "font-size: 12px;",
                            input {
                                r#type: "checkbox",
                                checked: restrict(),
                                onchange: move |evt: Event<FormData>| restrict.set(evt.checked()),
                            }
                            " Keep compare length in step"
                        }
                    },
                    on_change,
                    on_preview_change: move |range: Option<DateRange>| state.preview.set(range),
                    on_range_focus_change: move |focus: FocusedRange| state.focused_range.set(focus),
                    render_static_range_label: move |static_range: StaticRange| rsx! {
                        span { "{static_range.label}" }
                        span {
                            style: "margin-left: 6px; font-size: 10px; color: #888;",
                            "rolling"
                        }
                    },
                }

                div {
                    style: "flex: 1;",
                    for (i, range) in ranges.iter().enumerate() {
                        RangeRow {
                            key: "{i}",
                            index: i,
                            range: range.clone(),
                            focused: i == focused_index,
                            color: range.color.clone().or_else(|| config.range_colors.get(i).cloned()).unwrap_or_default(),
                        }
                    }

                    p {
                        style: "font-size: 12px; color: #666;",
                        {match (state.preview)() {
                            Some(preview) => format!("Previewing {preview}"),
                            None => "Hover a quick pick to preview it".to_string(),
                        }}
                    }

                    DateRangeInputs {
                        range: focused,
                        on_change: on_direct_edit,
                        on_error: move |message: String| error_msg.set(Some(message)),
                    }

                    if let Some(patch) = (state.last_patch)() {
                        pre {
                            style: "font-size: 11px; background: #f5f5f5; padding: 8px;",
                            {serde_json::to_string_pretty(&patch).unwrap_or_default()}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RangeRowProps {
    index: usize,
    range: DateRange,
    focused: bool,
    color: String,
}

/// One line of the selection summary; clicking it focuses that range.
#[component]
fn RangeRow(props: RangeRowProps) -> Element {
    let mut state = use_context::<PickerState>();
    let index = props.index;
    let identity = range_identity(&props.range, index);
    let days = props
        .range
        .days()
        .map(|d| format!("{} days", d.count()))
        .unwrap_or_else(|| "open".to_string());
    let weight = if props.focused { "bold" } else { "normal" };

    rsx! {
        div {
            style: "padding: 4px 8px; margin-bottom: 4px; border-left: 4px solid {props.color}; font-weight: {weight}; cursor: pointer;",
            onclick: move |_| state.focused_range.set([index, 0]),
            "{identity}: {props.range} ({days})"
        }
    }
}
