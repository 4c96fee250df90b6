// Date utility functions for the schedule grid columns

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Consecutive days starting at `start`.
pub fn days_from(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count as i64).map(|i| start + Duration::days(i)).collect()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// Monday through Friday of the week containing `date`.
pub fn work_week(date: NaiveDate) -> Vec<NaiveDate> {
    days_from(week_start(date), 5)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Label shown in the day tier of the header, e.g. "Mon 03.02".
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a %d.%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-02-06 is a Thursday
        assert_eq!(week_start(d(2025, 2, 6)), d(2025, 2, 3));
        assert_eq!(week_start(d(2025, 2, 3)), d(2025, 2, 3));
        assert_eq!(week_start(d(2025, 2, 9)), d(2025, 2, 3));
    }

    #[test]
    fn test_work_week_has_five_days() {
        let days = work_week(d(2025, 2, 6));
        assert_eq!(days.len(), 5);
        assert_eq!(days[4], d(2025, 2, 7));
        assert!(days.iter().all(|day| !is_weekend(*day)));
    }

    #[test]
    fn test_day_label() {
        assert_eq!(format_day_label(d(2025, 2, 3)), "Mon 03.02");
    }
}
