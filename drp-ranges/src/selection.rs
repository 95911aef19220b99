//! Selection matching and change propagation for the defined-range panel.
//!
//! Everything here is a pure function of the caller's ranges and focus. The
//! UI layer renders the results and forwards the produced patches to the
//! host's callbacks.

use crate::catalog::{parse_input_value, InputRange, InputValue, StaticRange};
use crate::date_range::DateRange;
use chrono::NaiveDateTime;
use drp_utils::dates::add_days;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `[range_index, boundary_index]` of the range being edited.
pub type FocusedRange = [usize; 2];

pub const DEFAULT_FOCUSED_RANGE: FocusedRange = [0, 0];

pub const DEFAULT_RANGE_COLORS: [&str; 3] = ["#3d91ff", "#3ecf8e", "#fed14c"];

/// Identity of a range inside a patch: its key, or `range{N}` (1-based)
/// when it has none.
pub fn range_identity(range: &DateRange, index: usize) -> String {
    match range.key.as_deref() {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => format!("range{}", index + 1),
    }
}

/// Partial update of the caller's ranges, keyed by range identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangePatch(BTreeMap<String, DateRange>);

impl RangePatch {
    pub fn insert(&mut self, identity: String, range: DateRange) {
        self.0.insert(identity, range);
    }

    pub fn get(&self, identity: &str) -> Option<&DateRange> {
        self.0.get(identity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DateRange)> {
        self.0.iter()
    }

    /// Replace every range the patch names; the rest are copied unchanged.
    pub fn apply_to(&self, ranges: &[DateRange]) -> Vec<DateRange> {
        ranges
            .iter()
            .enumerate()
            .map(|(i, range)| {
                self.0
                    .get(&range_identity(range, i))
                    .cloned()
                    .unwrap_or_else(|| range.clone())
            })
            .collect()
    }
}

/// The entry of `ranges` a static range highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedRange<'a> {
    pub index: usize,
    pub range: &'a DateRange,
}

impl SelectedRange<'_> {
    /// The range's own color, else the color for its position.
    pub fn color(&self, range_colors: &[String]) -> Option<String> {
        self.range
            .color
            .clone()
            .or_else(|| range_colors.get(self.index).cloned())
    }
}

/// First complete, enabled entry of `ranges` that `static_range` selects.
pub fn find_selected_range<'a>(
    ranges: &'a [DateRange],
    static_range: &StaticRange,
) -> Option<SelectedRange<'a>> {
    ranges
        .iter()
        .enumerate()
        .find(|(_, range)| {
            range.is_complete() && !range.is_disabled() && static_range.is_selected(range)
        })
        .map(|(index, range)| SelectedRange { index, range })
}

/// Next range to focus after `current`: the first later entry that is
/// enabled and does not opt out of auto focus, wrapping to the first such
/// entry overall.
pub fn find_next_range_index(ranges: &[DateRange], current: usize) -> Option<usize> {
    let eligible = |range: &DateRange| range.auto_focus != Some(false) && !range.is_disabled();
    ranges
        .iter()
        .enumerate()
        .skip(current + 1)
        .find(|(_, range)| eligible(range))
        .or_else(|| ranges.iter().enumerate().find(|(_, range)| eligible(range)))
        .map(|(index, _)| index)
}

/// Every control is locked while a range other than the first is focused
/// under restrict-to-first-range-length.
pub fn controls_disabled(
    restrict_to_first_range_length: bool,
    focused_range: FocusedRange,
) -> bool {
    restrict_to_first_range_length && focused_range[0] != 0
}

/// Range to preview for a static-range button: its own range while the
/// pointer or focus is on it, nothing once it leaves.
pub fn preview_for(static_range: &StaticRange, hovering: bool) -> Option<DateRange> {
    hovering.then(|| static_range.range())
}

/// Whether a static range's label comes from the host's renderer. Without a
/// renderer the plain label is shown even for custom-rendered ranges.
pub fn uses_custom_label(static_range: &StaticRange, has_renderer: bool) -> bool {
    static_range.has_custom_rendering && has_renderer
}

/// Range committed when `text` is typed into a relative-range field.
pub fn range_for_input(input_range: &InputRange, text: &str) -> DateRange {
    input_range.range(parse_input_value(text))
}

/// Text for a relative-range field given the current focus. Falls back to a
/// one-instant range at `now` when nothing is focused. Zero renders empty.
pub fn input_display_value(
    input_range: &InputRange,
    ranges: &[DateRange],
    focused_range: FocusedRange,
    now: NaiveDateTime,
) -> String {
    let fallback;
    let candidate = match ranges.get(focused_range[0]) {
        Some(range) => range,
        None => {
            fallback = DateRange::between(now, now);
            &fallback
        }
    };
    match input_range.current_value(candidate) {
        None | Some(InputValue::Number(0)) => String::new(),
        Some(value) => value.to_string(),
    }
}

/// What a commit produces: an optional focus move, then the patch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeCommit {
    pub next_focus: Option<FocusedRange>,
    pub patch: RangePatch,
}

impl RangeCommit {
    /// Fire the focus move (if any) and then the change notification.
    pub fn dispatch(
        self,
        on_range_focus_change: Option<impl FnOnce(FocusedRange)>,
        on_change: impl FnOnce(RangePatch),
    ) {
        if let (Some(next_focus), Some(notify)) = (self.next_focus, on_range_focus_change) {
            notify(next_focus);
        }
        on_change(self.patch);
    }
}

/// Inputs to a commit, borrowed from the component's props.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    pub ranges: &'a [DateRange],
    pub focused_range: FocusedRange,
    pub focus_next_range_on_defined_range_click: bool,
    pub restrict_to_first_range_length: bool,
}

impl<'a> SelectionContext<'a> {
    pub fn new(ranges: &'a [DateRange], focused_range: FocusedRange) -> Self {
        Self {
            ranges,
            focused_range,
            focus_next_range_on_defined_range_click: false,
            restrict_to_first_range_length: false,
        }
    }

    pub fn focused(&self) -> Option<&'a DateRange> {
        self.ranges.get(self.focused_range[0])
    }

    /// Build the commit for replacing the focused range with `update`.
    /// `None` when the focus index does not name an entry.
    pub fn commit(&self, update: &DateRange) -> Option<RangeCommit> {
        let focused_index = self.focused_range[0];
        let Some(focused) = self.focused() else {
            log::debug!("Dropping range change: no range at focus index {focused_index}");
            return None;
        };

        let mut patch = RangePatch::default();
        patch.insert(range_identity(focused, focused_index), focused.merged(update));

        if self.restrict_to_first_range_length && focused_index == 0 {
            self.propagate_length(update, &mut patch);
        }

        let next_focus = if self.focus_next_range_on_defined_range_click {
            find_next_range_index(self.ranges, focused_index).map(|index| [index, 0])
        } else {
            None
        };

        log::debug!(
            "Committing {update} at index {focused_index}: {} patched, next focus {next_focus:?}",
            patch.len()
        );
        Some(RangeCommit { next_focus, patch })
    }

    /// Resize every range after the first to the committed day length,
    /// each keeping its own start date.
    fn propagate_length(&self, update: &DateRange, patch: &mut RangePatch) {
        let Some(length) = update.day_length() else {
            return;
        };
        for (index, range) in self.ranges.iter().enumerate().skip(1) {
            let Some(start) = range.start_date else {
                continue;
            };
            let resized = DateRange {
                end_date: Some(add_days(&start, length)),
                ..range.clone()
            };
            patch.insert(range_identity(range, index), resized);
        }
    }
}

/// Handle a static-range click or input edit: when `on_change` is present
/// and the focus names a range, notify focus change first, then the patch.
pub fn propagate_change<C, F>(
    context: &SelectionContext<'_>,
    update: &DateRange,
    on_change: Option<C>,
    on_range_focus_change: Option<F>,
) where
    C: FnOnce(RangePatch),
    F: FnOnce(FocusedRange),
{
    let Some(on_change) = on_change else {
        return;
    };
    if let Some(commit) = context.commit(update) {
        commit.dispatch(on_range_focus_change, on_change);
    }
}
