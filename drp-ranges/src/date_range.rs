use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use drp_utils::dates::{difference_in_calendar_days, end_of_day, format_date, parse_date};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::replace;

/// One selectable interval in a caller's selection.
///
/// Either boundary may be missing, which stands for an open ("∞") end.
/// Optional fields follow overlay semantics in [`DateRange::merged`]: a
/// `None` never overwrites a value that is already set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    /// Identity used in change patches; positional `range{N}` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// `Some(false)` opts the range out of automatic focus advance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_focus: Option<bool>,
}

impl DateRange {
    /// A closed range with only its boundaries set.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }

    /// Copy with the start replaced by midnight of a "YYYY-MM-DD" date.
    pub fn with_start_ymd(&self, start: &str) -> Result<Self> {
        let start = parse_date(start)?;
        Ok(DateRange {
            start_date: Some(start.and_time(NaiveTime::MIN)),
            ..self.clone()
        })
    }

    /// Copy with the end replaced by the last millisecond of a "YYYY-MM-DD"
    /// date.
    pub fn with_end_ymd(&self, end: &str) -> Result<Self> {
        let end = parse_date(end)?;
        Ok(DateRange {
            end_date: Some(end_of_day(&end.and_time(NaiveTime::MIN))),
            ..self.clone()
        })
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Both boundaries present.
    pub fn is_complete(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// Returns a copy of `self` with every field that `update` sets
    /// taking precedence.
    pub fn merged(&self, update: &DateRange) -> DateRange {
        DateRange {
            start_date: update.start_date.or(self.start_date),
            end_date: update.end_date.or(self.end_date),
            key: update.key.clone().or_else(|| self.key.clone()),
            color: update.color.clone().or_else(|| self.color.clone()),
            disabled: update.disabled.or(self.disabled),
            auto_focus: update.auto_focus.or(self.auto_focus),
        }
    }

    /// Calendar-day span from start to end (0 for a single-day range).
    /// `None` when either boundary is open.
    pub fn day_length(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(difference_in_calendar_days(&end, &start)),
            _ => None,
        }
    }

    /// Iterator over the calendar days this range covers, `None` when open.
    pub fn days(&self) -> Option<CalendarDays> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(CalendarDays(start.date(), end.date())),
            _ => None,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<NaiveDateTime>| match d {
            Some(d) => format_date(&d.date()),
            None => "∞".to_string(),
        };
        write!(f, "{} – {}", bound(self.start_date), bound(self.end_date))
    }
}

/// Yields each date from the first date through the second (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct CalendarDays(pub NaiveDate, pub NaiveDate);

impl Iterator for CalendarDays {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0.checked_add_signed(TimeDelta::days(1))?;
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
