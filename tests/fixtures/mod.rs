// Test fixtures - reusable schedule data
// Provides consistent days, cabinets and geometry across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use clinic_schedule::models::cabinet::Cabinet;
use clinic_schedule::models::geometry::GeometryConfig;

/// Monday 3 Feb 2025 plus `count - 1` following days
pub fn days(count: u32) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| NaiveDate::from_ymd_opt(2025, 2, 3 + i).unwrap())
        .collect()
}

pub fn cabinets(names: &[&str]) -> Vec<Cabinet> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Cabinet::new(i as u32 + 1, *name))
        .collect()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Geometry with round numbers that are easy to check by hand
pub fn geometry() -> GeometryConfig {
    GeometryConfig {
        day_header_height: 40.0,
        cabinet_header_height: 30.0,
        slot_height: 60.0,
        time_column_width: 50.0,
        event_column_width: 100.0,
        total_columns: 0,
    }
}
