//! Reactive state for the defined-range panel and the apps hosting it.
//!
//! `InputFocus` is private to one `DefinedRange` instance. `PickerState`
//! bundles the host-owned selection signals into a single struct provided via
//! `use_context_provider`; child components retrieve it with
//! `use_context::<PickerState>()`.

use dioxus::prelude::*;
use drp_ranges::selection::{FocusedRange, RangePatch, DEFAULT_FOCUSED_RANGE};
use drp_ranges::DateRange;

/// Which relative-range field shows keyboard focus. Rendering only; it never
/// affects committed values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFocus {
    pub focused_input: Option<usize>,
    pub range_offset: i32,
}

impl InputFocus {
    pub fn focus(index: usize) -> Self {
        Self {
            focused_input: Some(index),
            range_offset: 0,
        }
    }

    /// Leaving a field resets the offset; the last focused field stays
    /// marked until another one takes focus.
    pub fn blur(self) -> Self {
        Self {
            range_offset: 0,
            ..self
        }
    }
}

/// Selection state owned by a host of `DefinedRange`.
#[derive(Clone, Copy)]
pub struct PickerState {
    /// Every range in the multi-range selection
    pub ranges: Signal<Vec<DateRange>>,
    /// Range currently being edited
    pub focused_range: Signal<FocusedRange>,
    /// Range under the pointer, if any
    pub preview: Signal<Option<DateRange>>,
    /// Most recent patch, kept for display
    pub last_patch: Signal<Option<RangePatch>>,
}

impl PickerState {
    pub fn new(ranges: Vec<DateRange>) -> Self {
        Self {
            ranges: Signal::new(ranges),
            focused_range: Signal::new(DEFAULT_FOCUSED_RANGE),
            preview: Signal::new(None),
            last_patch: Signal::new(None),
        }
    }

    /// Replace the ranges the patch names and remember the patch.
    pub fn apply_patch(&mut self, patch: RangePatch) {
        let updated = patch.apply_to(&self.ranges.read());
        self.ranges.set(updated);
        self.last_patch.set(Some(patch));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_then_blur() {
        let focused = InputFocus::focus(1);
        assert_eq!(focused.focused_input, Some(1));
        let blurred = InputFocus {
            range_offset: 2,
            ..focused
        }
        .blur();
        assert_eq!(blurred.focused_input, Some(1));
        assert_eq!(blurred.range_offset, 0);
    }
}
