//! Current-time indicator placement.
//!
//! The indicator is a label in the time column, a dot on the left edge of the
//! event area and a horizontal line across every event column. It has no
//! timer of its own: the scheduling page decides how often to repaint.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::models::geometry::GeometryConfig;
use crate::utils::clock::Clock;

pub const DOT_RADIUS: f32 = 4.0;

/// Whole minutes elapsed since midnight; seconds are dropped.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// `header_height + (minutes / 60) * slot_height`
pub fn indicator_top(minutes: u32, slot_height: f32, header_height: f32) -> f32 {
    header_height + (minutes as f32 / 60.0) * slot_height
}

/// Position of `today` inside the displayed days.
pub fn today_index(days: &[NaiveDate], today: NaiveDate) -> Option<usize> {
    days.iter().position(|d| *d == today)
}

/// Convert the `-1` "not visible" sentinel used by the page state.
pub fn today_index_from_sentinel(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeIndicatorLayout {
    pub top: f32,
    pub label: String,
    pub dot_center: (f32, f32),
    pub line_start_x: f32,
    pub line_width: f32,
}

impl TimeIndicatorLayout {
    pub fn line_end_x(&self) -> f32 {
        self.line_start_x + self.line_width
    }
}

pub struct TimeIndicator;

impl TimeIndicator {
    /// Compute the indicator for `now`, or `None` when today is not among the
    /// displayed days.
    ///
    /// The line spans `geometry.total_columns` event columns as given; a zero
    /// value is only resolved against the cabinet count by [`Self::from_clock`].
    pub fn layout(
        now: NaiveTime,
        today_idx: Option<usize>,
        day_count: usize,
        geometry: &GeometryConfig,
    ) -> Option<TimeIndicatorLayout> {
        let idx = today_idx?;
        if idx >= day_count {
            return None;
        }

        let minutes = minutes_since_midnight(now);
        let top = indicator_top(minutes, geometry.slot_height, geometry.header_height());
        let line_start_x = geometry.time_column_width;

        Some(TimeIndicatorLayout {
            top,
            label: format!("{:02}:{:02}", now.hour(), now.minute()),
            dot_center: (line_start_x, top),
            line_start_x,
            line_width: geometry.total_columns as f32 * geometry.event_column_width,
        })
    }

    /// Convenience wrapper reading time and today's date from `clock`.
    pub fn from_clock(
        clock: &dyn Clock,
        days: &[NaiveDate],
        cabinet_count: usize,
        geometry: &GeometryConfig,
    ) -> Option<TimeIndicatorLayout> {
        let now = clock.now();
        let resolved = GeometryConfig {
            total_columns: geometry.resolved_total_columns(days.len(), cabinet_count),
            ..*geometry
        };
        Self::layout(now.time(), today_index(days, now.date()), days.len(), &resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::FixedClock;
    use test_case::test_case;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test_case(0, 0 ; "midnight")]
    #[test_case(9, 30 ; "morning")]
    #[test_case(23, 59 ; "last minute")]
    fn test_minutes_since_midnight(h: u32, m: u32) {
        assert_eq!(minutes_since_midnight(t(h, m)), h * 60 + m);
    }

    #[test]
    fn test_seconds_are_ignored() {
        let time = NaiveTime::from_hms_opt(10, 15, 59).unwrap();
        assert_eq!(minutes_since_midnight(time), 615);
    }

    #[test]
    fn test_indicator_top_formula() {
        assert_eq!(indicator_top(90, 60.0, 72.0), 72.0 + 90.0);
        assert_eq!(indicator_top(0, 60.0, 72.0), 72.0);
    }

    #[test_case(-1, None ; "sentinel")]
    #[test_case(-7, None ; "any negative")]
    #[test_case(0, Some(0) ; "first")]
    #[test_case(4, Some(4) ; "fifth")]
    fn test_sentinel_conversion(raw: i64, expected: Option<usize>) {
        assert_eq!(today_index_from_sentinel(raw), expected);
    }

    fn fifteen_columns() -> GeometryConfig {
        GeometryConfig {
            total_columns: 15,
            ..GeometryConfig::default()
        }
    }

    #[test]
    fn test_hidden_when_today_not_displayed() {
        let geometry = fifteen_columns();
        assert!(TimeIndicator::layout(t(10, 0), None, 5, &geometry).is_none());
        assert!(TimeIndicator::layout(t(10, 0), Some(5), 5, &geometry).is_none());
    }

    #[test]
    fn test_layout_spans_all_columns() {
        let geometry = fifteen_columns();
        let layout = TimeIndicator::layout(t(8, 45), Some(2), 5, &geometry).unwrap();

        assert_eq!(layout.label, "08:45");
        assert_eq!(layout.top, geometry.header_height() + 8.75 * geometry.slot_height);
        assert_eq!(layout.dot_center, (geometry.time_column_width, layout.top));
        assert_eq!(layout.line_width, 15.0 * geometry.event_column_width);
        assert_eq!(
            layout.line_end_x(),
            geometry.time_column_width + 15.0 * geometry.event_column_width
        );
    }

    #[test]
    fn test_from_clock_finds_today() {
        let days: Vec<NaiveDate> = (3..=7)
            .map(|d| NaiveDate::from_ymd_opt(2025, 2, d).unwrap())
            .collect();
        let geometry = GeometryConfig::default();

        let clock = FixedClock::at(days[1], t(12, 0));
        let layout = TimeIndicator::from_clock(&clock, &days, 3, &geometry).unwrap();
        assert_eq!(layout.line_width, 15.0 * geometry.event_column_width);

        let configured = GeometryConfig {
            total_columns: 4,
            ..geometry
        };
        let layout = TimeIndicator::from_clock(&clock, &days, 3, &configured).unwrap();
        assert_eq!(layout.line_width, 4.0 * geometry.event_column_width);

        let weekend = FixedClock::at(NaiveDate::from_ymd_opt(2025, 2, 8).unwrap(), t(12, 0));
        assert!(TimeIndicator::from_clock(&weekend, &days, 3, &geometry).is_none());
    }
}
