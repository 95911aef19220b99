//! Predefined date ranges offered by the picker.
//!
//! The default catalog is computed once, on first access, from the local
//! wall clock. Ranges such as "Today" therefore describe the day the process
//! first asked for them; callers that need a fresh anchor build their own
//! catalog with [`RangeCatalog::anchored_at`].

use crate::date_range::DateRange;
use chrono::{Local, NaiveDateTime, Weekday};
use drp_utils::dates::{
    add_days, add_months, difference_in_calendar_days, end_of_day, end_of_month, end_of_week,
    is_same_day, start_of_day, start_of_month, start_of_week,
};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// Largest count accepted from a relative-range text field.
pub const MAX_INPUT_VALUE: u32 = 99_999;

pub type RangeFn = Arc<dyn Fn() -> DateRange + Send + Sync>;
pub type IsSelectedFn = Arc<dyn Fn(&DateRange) -> bool + Send + Sync>;
pub type InputRangeFn = Arc<dyn Fn(u32) -> DateRange + Send + Sync>;
pub type CurrentValueFn = Arc<dyn Fn(&DateRange) -> InputValue + Send + Sync>;

static DEFAULT_CATALOG: Lazy<RangeCatalog> = Lazy::new(|| {
    let now = Local::now().naive_local();
    log::debug!("Building default range catalog anchored at {now}");
    RangeCatalog::anchored_at(now, CatalogOptions::default())
});

/// The process-wide catalog.
pub fn default_catalog() -> &'static RangeCatalog {
    &DEFAULT_CATALOG
}

/// Default static ranges: Today, Yesterday, This/Last Week, This/Last Month.
pub fn static_ranges() -> Vec<StaticRange> {
    DEFAULT_CATALOG.static_ranges.clone()
}

/// Default input ranges: "days up to today" and "days starting today".
pub fn input_ranges() -> Vec<InputRange> {
    DEFAULT_CATALOG.input_ranges.clone()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogOptions {
    pub week_starts_on: Weekday,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            week_starts_on: Weekday::Sun,
        }
    }
}

/// Named boundaries every default range is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefinedDates {
    pub now: NaiveDateTime,
    pub start_of_today: NaiveDateTime,
    pub end_of_today: NaiveDateTime,
    pub start_of_yesterday: NaiveDateTime,
    pub end_of_yesterday: NaiveDateTime,
    pub start_of_week: NaiveDateTime,
    pub end_of_week: NaiveDateTime,
    pub start_of_last_week: NaiveDateTime,
    pub end_of_last_week: NaiveDateTime,
    pub start_of_month: NaiveDateTime,
    pub end_of_month: NaiveDateTime,
    pub start_of_last_month: NaiveDateTime,
    pub end_of_last_month: NaiveDateTime,
}

impl DefinedDates {
    pub fn anchored_at(now: NaiveDateTime, week_starts_on: Weekday) -> Self {
        let yesterday = add_days(&now, -1);
        let last_week = add_days(&now, -7);
        let last_month = add_months(&now, -1);
        Self {
            now,
            start_of_today: start_of_day(&now),
            end_of_today: end_of_day(&now),
            start_of_yesterday: start_of_day(&yesterday),
            end_of_yesterday: end_of_day(&yesterday),
            start_of_week: start_of_week(&now, week_starts_on),
            end_of_week: end_of_week(&now, week_starts_on),
            start_of_last_week: start_of_week(&last_week, week_starts_on),
            end_of_last_week: end_of_week(&last_week, week_starts_on),
            start_of_month: start_of_month(&now),
            end_of_month: end_of_month(&now),
            start_of_last_month: start_of_month(&last_month),
            end_of_last_month: end_of_month(&last_month),
        }
    }
}

/// A named, parameterless interval with a membership test.
#[derive(Clone)]
pub struct StaticRange {
    pub label: String,
    /// Label content is supplied by the host's custom renderer.
    pub has_custom_rendering: bool,
    range: RangeFn,
    is_selected: IsSelectedFn,
}

impl StaticRange {
    pub fn range(&self) -> DateRange {
        (self.range)()
    }

    pub fn is_selected(&self, candidate: &DateRange) -> bool {
        (self.is_selected)(candidate)
    }
}

impl fmt::Debug for StaticRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticRange")
            .field("label", &self.label)
            .field("has_custom_rendering", &self.has_custom_rendering)
            .finish_non_exhaustive()
    }
}

impl PartialEq for StaticRange {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.has_custom_rendering == other.has_custom_rendering
            && Arc::ptr_eq(&self.range, &other.range)
            && Arc::ptr_eq(&self.is_selected, &other.is_selected)
    }
}

/// Definition handed to [`create_static_ranges`]. Without an explicit
/// predicate the built range matches on same-day boundaries.
#[derive(Clone)]
pub struct StaticRangeDef {
    pub label: String,
    pub range: RangeFn,
    pub is_selected: Option<IsSelectedFn>,
    pub has_custom_rendering: bool,
}

impl StaticRangeDef {
    pub fn new(
        label: impl Into<String>,
        range: impl Fn() -> DateRange + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            range: Arc::new(range),
            is_selected: None,
            has_custom_rendering: false,
        }
    }

    pub fn with_is_selected(
        mut self,
        is_selected: impl Fn(&DateRange) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_selected = Some(Arc::new(is_selected));
        self
    }

    pub fn with_custom_rendering(mut self) -> Self {
        self.has_custom_rendering = true;
        self
    }
}

impl From<StaticRangeDef> for StaticRange {
    fn from(def: StaticRangeDef) -> Self {
        let is_selected = def
            .is_selected
            .unwrap_or_else(|| same_day_predicate(def.range.clone()));
        StaticRange {
            label: def.label,
            has_custom_rendering: def.has_custom_rendering,
            range: def.range,
            is_selected,
        }
    }
}

/// Build static ranges, filling in the same-day predicate where a
/// definition has none.
pub fn create_static_ranges(defs: impl IntoIterator<Item = StaticRangeDef>) -> Vec<StaticRange> {
    defs.into_iter().map(StaticRange::from).collect()
}

fn same_day_predicate(range: RangeFn) -> IsSelectedFn {
    Arc::new(move |candidate: &DateRange| {
        let defined = range();
        same_day(candidate.start_date, defined.start_date)
            && same_day(candidate.end_date, defined.end_date)
    })
}

fn same_day(left: Option<NaiveDateTime>, right: Option<NaiveDateTime>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if is_same_day(&l, &r))
}

/// Value shown in a relative-range text field for the focused range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputValue {
    Number(i64),
    /// The range is not a member of this family ("-").
    NotApplicable,
    /// The free boundary is open ("∞").
    Unbounded,
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Number(n) => write!(f, "{n}"),
            InputValue::NotApplicable => f.write_str("-"),
            InputValue::Unbounded => f.write_str("∞"),
        }
    }
}

/// A family of intervals driven by a day count.
#[derive(Clone)]
pub struct InputRange {
    pub label: String,
    range: InputRangeFn,
    get_current_value: Option<CurrentValueFn>,
}

impl InputRange {
    pub fn new(
        label: impl Into<String>,
        range: impl Fn(u32) -> DateRange + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            range: Arc::new(range),
            get_current_value: None,
        }
    }

    pub fn with_current_value(
        mut self,
        get_current_value: impl Fn(&DateRange) -> InputValue + Send + Sync + 'static,
    ) -> Self {
        self.get_current_value = Some(Arc::new(get_current_value));
        self
    }

    pub fn range(&self, value: u32) -> DateRange {
        (self.range)(value)
    }

    /// `None` when this entry cannot derive a count back from a range.
    pub fn current_value(&self, candidate: &DateRange) -> Option<InputValue> {
        self.get_current_value.as_ref().map(|f| f(candidate))
    }
}

impl fmt::Debug for InputRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputRange")
            .field("label", &self.label)
            .field("has_current_value", &self.get_current_value.is_some())
            .finish_non_exhaustive()
    }
}

impl PartialEq for InputRange {
    fn eq(&self, other: &Self) -> bool {
        let same_getter = match (&self.get_current_value, &other.get_current_value) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.label == other.label && Arc::ptr_eq(&self.range, &other.range) && same_getter
    }
}

/// Parse free text from a relative-range field. Leading digits are read,
/// anything unparseable or negative becomes 0, and the result is capped at
/// [`MAX_INPUT_VALUE`].
pub fn parse_input_value(text: &str) -> u32 {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if negative || digits.is_empty() {
        return 0;
    }
    digits
        .parse::<u64>()
        .map_or(MAX_INPUT_VALUE, |v| v.min(u64::from(MAX_INPUT_VALUE)) as u32)
}

/// Extra days covered by a count, with counts below 1 treated as 1.
fn extra_days(value: u32) -> i64 {
    i64::from(value.max(1) - 1)
}

/// Both default range lists plus the dates they were computed from.
#[derive(Clone, Debug)]
pub struct RangeCatalog {
    pub dates: DefinedDates,
    pub static_ranges: Vec<StaticRange>,
    pub input_ranges: Vec<InputRange>,
}

impl RangeCatalog {
    pub fn anchored_at(now: NaiveDateTime, options: CatalogOptions) -> Self {
        let dates = DefinedDates::anchored_at(now, options.week_starts_on);
        Self {
            dates,
            static_ranges: Self::build_static_ranges(&dates),
            input_ranges: Self::build_input_ranges(&dates),
        }
    }

    fn build_static_ranges(d: &DefinedDates) -> Vec<StaticRange> {
        let fixed = |label: &str, start: NaiveDateTime, end: NaiveDateTime| {
            StaticRangeDef::new(label, move || DateRange::between(start, end))
        };
        create_static_ranges([
            fixed("Today", d.start_of_today, d.end_of_today),
            fixed("Yesterday", d.start_of_yesterday, d.end_of_yesterday),
            fixed("This Week", d.start_of_week, d.end_of_week),
            fixed("Last Week", d.start_of_last_week, d.end_of_last_week),
            fixed("This Month", d.start_of_month, d.end_of_month),
            fixed("Last Month", d.start_of_last_month, d.end_of_last_month),
        ])
    }

    fn build_input_ranges(d: &DefinedDates) -> Vec<InputRange> {
        let DefinedDates {
            now,
            start_of_today,
            end_of_today,
            ..
        } = *d;

        let up_to_today = InputRange::new("days up to today", move |value| {
            DateRange::between(add_days(&start_of_today, -extra_days(value)), end_of_today)
        })
        .with_current_value(move |range| {
            if !same_day(range.end_date, Some(end_of_today)) {
                return InputValue::NotApplicable;
            }
            match range.start_date {
                None => InputValue::Unbounded,
                Some(start) => {
                    InputValue::Number(difference_in_calendar_days(&end_of_today, &start) + 1)
                }
            }
        });

        let starting_today = InputRange::new("days starting today", move |value| {
            DateRange::between(now, add_days(&now, extra_days(value)))
        })
        .with_current_value(move |range| {
            if !same_day(range.start_date, Some(start_of_today)) {
                return InputValue::NotApplicable;
            }
            match range.end_date {
                None => InputValue::Unbounded,
                Some(end) => {
                    InputValue::Number(difference_in_calendar_days(&end, &start_of_today) + 1)
                }
            }
        });

        vec![up_to_today, starting_today]
    }

    pub fn static_range(&self, label: &str) -> Option<&StaticRange> {
        self.static_ranges.iter().find(|r| r.label == label)
    }

    pub fn input_range(&self, label: &str) -> Option<&InputRange> {
        self.input_ranges.iter().find(|r| r.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // Wednesday afternoon
    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 13)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn catalog() -> RangeCatalog {
        RangeCatalog::anchored_at(anchor(), CatalogOptions::default())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds(range: &DateRange) -> (NaiveDate, NaiveDate) {
        (
            range.start_date.unwrap().date(),
            range.end_date.unwrap().date(),
        )
    }

    #[test]
    fn test_default_static_range_boundaries() {
        let catalog = catalog();
        let labels: Vec<&str> = catalog.static_ranges.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Today", "Yesterday", "This Week", "Last Week", "This Month", "Last Month"]
        );

        let expect = [
            ("Today", date(2024, 3, 13), date(2024, 3, 13)),
            ("Yesterday", date(2024, 3, 12), date(2024, 3, 12)),
            ("This Week", date(2024, 3, 10), date(2024, 3, 16)),
            ("Last Week", date(2024, 3, 3), date(2024, 3, 9)),
            ("This Month", date(2024, 3, 1), date(2024, 3, 31)),
            ("Last Month", date(2024, 2, 1), date(2024, 2, 29)),
        ];
        for (label, start, end) in expect {
            let range = catalog.static_range(label).unwrap().range();
            assert_eq!(bounds(&range), (start, end), "{label}");
        }
    }

    #[test]
    fn test_monday_week_start() {
        let options = CatalogOptions {
            week_starts_on: Weekday::Mon,
        };
        let catalog = RangeCatalog::anchored_at(anchor(), options);
        let week = catalog.static_range("This Week").unwrap().range();
        assert_eq!(bounds(&week), (date(2024, 3, 11), date(2024, 3, 17)));
    }

    #[test]
    fn test_static_ranges_select_themselves() {
        let catalog = catalog();
        for static_range in &catalog.static_ranges {
            assert!(
                static_range.is_selected(&static_range.range()),
                "{} should select its own range",
                static_range.label
            );
        }
    }

    #[test]
    fn test_is_selected_ignores_time_of_day() {
        let catalog = catalog();
        let today = catalog.static_range("Today").unwrap();
        let noon = date(2024, 3, 13).and_hms_opt(12, 0, 0).unwrap();
        assert!(today.is_selected(&DateRange::between(noon, noon)));

        let tomorrow = date(2024, 3, 14).and_hms_opt(0, 0, 0).unwrap();
        assert!(!today.is_selected(&DateRange::between(noon, tomorrow)));

        let open = DateRange {
            start_date: Some(noon),
            ..DateRange::default()
        };
        assert!(!today.is_selected(&open));
    }

    #[test]
    fn test_create_static_ranges_keeps_custom_predicate() {
        let start = anchor();
        let ranges = create_static_ranges([
            StaticRangeDef::new("Default", move || DateRange::between(start, start)),
            StaticRangeDef::new("Never", move || DateRange::between(start, start))
                .with_is_selected(|_| false)
                .with_custom_rendering(),
        ]);
        assert!(ranges[0].is_selected(&ranges[0].range()));
        assert!(!ranges[0].has_custom_rendering);
        assert!(!ranges[1].is_selected(&ranges[1].range()));
        assert!(ranges[1].has_custom_rendering);
    }

    #[test]
    fn test_input_ranges_invert() {
        let catalog = catalog();
        for input in &catalog.input_ranges {
            for n in 1..=40u32 {
                let range = input.range(n);
                assert_eq!(
                    input.current_value(&range),
                    Some(InputValue::Number(i64::from(n))),
                    "{} with {n}",
                    input.label
                );
            }
        }
    }

    #[test]
    fn test_input_ranges_clamp_to_one_day() {
        let catalog = catalog();
        for input in &catalog.input_ranges {
            assert_eq!(input.range(0), input.range(1), "{}", input.label);
            assert_eq!(
                input.current_value(&input.range(0)),
                Some(InputValue::Number(1))
            );
        }
    }

    #[test]
    fn test_days_up_to_today() {
        let catalog = catalog();
        let input = catalog.input_range("days up to today").unwrap();
        let week = input.range(7);
        assert_eq!(bounds(&week), (date(2024, 3, 7), date(2024, 3, 13)));
        assert_eq!(week.end_date, Some(catalog.dates.end_of_today));

        let yesterday = catalog.static_range("Yesterday").unwrap().range();
        assert_eq!(input.current_value(&yesterday), Some(InputValue::NotApplicable));

        let open = DateRange {
            end_date: Some(anchor()),
            ..DateRange::default()
        };
        assert_eq!(input.current_value(&open), Some(InputValue::Unbounded));
        assert_eq!(input.current_value(&DateRange::default()), Some(InputValue::NotApplicable));
    }

    #[test]
    fn test_days_starting_today() {
        let catalog = catalog();
        let input = catalog.input_range("days starting today").unwrap();
        let range = input.range(3);
        assert_eq!(range.start_date, Some(anchor()));
        assert_eq!(bounds(&range), (date(2024, 3, 13), date(2024, 3, 15)));

        let open = DateRange {
            start_date: Some(catalog.dates.start_of_today),
            ..DateRange::default()
        };
        assert_eq!(input.current_value(&open), Some(InputValue::Unbounded));

        let last_week = catalog.static_range("Last Week").unwrap().range();
        assert_eq!(input.current_value(&last_week), Some(InputValue::NotApplicable));
    }

    #[test]
    fn test_input_value_display() {
        assert_eq!(InputValue::Number(12).to_string(), "12");
        assert_eq!(InputValue::NotApplicable.to_string(), "-");
        assert_eq!(InputValue::Unbounded.to_string(), "∞");
    }

    #[test]
    fn test_parse_input_value() {
        assert_eq!(parse_input_value("14"), 14);
        assert_eq!(parse_input_value("  7 days"), 7);
        assert_eq!(parse_input_value("abc"), 0);
        assert_eq!(parse_input_value(""), 0);
        assert_eq!(parse_input_value("-5"), 0);
        assert_eq!(parse_input_value("+3"), 3);
        assert_eq!(parse_input_value("123456"), MAX_INPUT_VALUE);
        assert_eq!(parse_input_value("99999999999999999999999"), MAX_INPUT_VALUE);
    }

    #[test]
    fn test_default_catalog_is_shared() {
        let first = default_catalog();
        let second = default_catalog();
        assert!(std::ptr::eq(first, second));
        assert_eq!(static_ranges(), first.static_ranges);
        assert_eq!(input_ranges().len(), 2);
    }
}
