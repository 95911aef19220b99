//! Shared utility functions for DRP crates.

/// Calendar arithmetic over local wall-clock date-times.
pub mod dates {
    use crate::error::DateError;
    use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| DateError(format!("{s:?}: {e}")))
    }

    /// Midnight of the given day.
    pub fn start_of_day(dt: &NaiveDateTime) -> NaiveDateTime {
        dt.date().and_time(NaiveTime::MIN)
    }

    /// Last representable millisecond of the given day (23:59:59.999).
    pub fn end_of_day(dt: &NaiveDateTime) -> NaiveDateTime {
        let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        dt.date().and_time(last)
    }

    /// Start of the week containing `dt`, for weeks beginning on `week_starts_on`.
    pub fn start_of_week(dt: &NaiveDateTime, week_starts_on: Weekday) -> NaiveDateTime {
        let offset = (dt.weekday().num_days_from_sunday() + 7
            - week_starts_on.num_days_from_sunday())
            % 7;
        start_of_day(&add_days(dt, -i64::from(offset)))
    }

    /// End of the week containing `dt`.
    pub fn end_of_week(dt: &NaiveDateTime, week_starts_on: Weekday) -> NaiveDateTime {
        end_of_day(&add_days(&start_of_week(dt, week_starts_on), 6))
    }

    pub fn start_of_month(dt: &NaiveDateTime) -> NaiveDateTime {
        let first = dt.date().with_day(1).unwrap_or(dt.date());
        first.and_time(NaiveTime::MIN)
    }

    pub fn end_of_month(dt: &NaiveDateTime) -> NaiveDateTime {
        let next_month = add_months(&start_of_month(dt), 1);
        end_of_day(&add_days(&next_month, -1))
    }

    /// Shift by whole days, keeping the time of day. Saturates at the
    /// representable range instead of overflowing.
    pub fn add_days(dt: &NaiveDateTime, days: i64) -> NaiveDateTime {
        TimeDelta::try_days(days)
            .and_then(|delta| dt.checked_add_signed(delta))
            .unwrap_or(if days < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            })
    }

    /// Shift by whole months. The day of month is clamped to the length of
    /// the target month (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(dt: &NaiveDateTime, months: i32) -> NaiveDateTime {
        let shifted = if months >= 0 {
            dt.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            dt.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.unwrap_or(*dt)
    }

    /// True when both instants fall on the same calendar day.
    pub fn is_same_day(left: &NaiveDateTime, right: &NaiveDateTime) -> bool {
        left.date() == right.date()
    }

    /// Number of calendar day boundaries between `right` and `left`,
    /// ignoring time of day. Negative when `left` is earlier.
    pub fn difference_in_calendar_days(left: &NaiveDateTime, right: &NaiveDateTime) -> i64 {
        (left.date() - right.date()).num_days()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{NaiveDate, Timelike};

        fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap()
        }

        #[test]
        fn test_day_boundaries() {
            let dt = at(2024, 3, 15, 14, 30);
            assert_eq!(start_of_day(&dt), at(2024, 3, 15, 0, 0));
            let end = end_of_day(&dt);
            assert_eq!(end.date(), dt.date());
            assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
            assert_eq!(end.nanosecond(), 999_000_000);
        }

        #[test]
        fn test_week_boundaries_sunday_start() {
            // 2024-03-13 is a Wednesday
            let dt = at(2024, 3, 13, 9, 0);
            assert_eq!(start_of_week(&dt, Weekday::Sun), at(2024, 3, 10, 0, 0));
            assert_eq!(
                end_of_week(&dt, Weekday::Sun).date(),
                NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
            );
        }

        #[test]
        fn test_week_boundaries_monday_start() {
            let sunday = at(2024, 3, 17, 9, 0);
            assert_eq!(start_of_week(&sunday, Weekday::Mon), at(2024, 3, 11, 0, 0));
            let monday = at(2024, 3, 11, 9, 0);
            assert_eq!(start_of_week(&monday, Weekday::Mon), at(2024, 3, 11, 0, 0));
        }

        #[test]
        fn test_month_boundaries() {
            let dt = at(2024, 2, 10, 12, 0);
            assert_eq!(start_of_month(&dt), at(2024, 2, 1, 0, 0));
            assert_eq!(end_of_month(&dt).date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

            let dec = at(2023, 12, 31, 12, 0);
            assert_eq!(end_of_month(&dec).date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        }

        #[test]
        fn test_add_months_clamps_day() {
            let jan31 = at(2023, 1, 31, 8, 0);
            assert_eq!(add_months(&jan31, 1), at(2023, 2, 28, 8, 0));
            let mar = at(2024, 3, 15, 8, 0);
            assert_eq!(add_months(&mar, -1), at(2024, 2, 15, 8, 0));
        }

        #[test]
        fn test_add_days_keeps_time() {
            let dt = at(2024, 2, 28, 17, 45);
            assert_eq!(add_days(&dt, 1), at(2024, 2, 29, 17, 45));
            assert_eq!(add_days(&dt, -28), at(2024, 1, 31, 17, 45));
        }

        #[test]
        fn test_calendar_day_difference_ignores_time() {
            let late = at(2024, 3, 1, 23, 59);
            let early = at(2024, 3, 2, 0, 1);
            assert_eq!(difference_in_calendar_days(&early, &late), 1);
            assert_eq!(difference_in_calendar_days(&late, &early), -1);
            assert!(is_same_day(&late, &at(2024, 3, 1, 0, 0)));
            assert!(!is_same_day(&late, &early));
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
            assert!(parse_date("15/06/2023").is_err());
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
