//! Pixel geometry of the grid body: hour slots, shift blocks and hit testing.
//!
//! Coordinates are relative to the top-left corner of the whole grid,
//! including the sticky header.

use chrono::NaiveTime;
use serde::Serialize;

use super::header::cabinet_column;
use super::indicator::{indicator_top, minutes_since_midnight};
use crate::models::geometry::GeometryConfig;
use crate::models::shift::Shift;

pub const HOURS_PER_DAY: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GridRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A (day, cabinet, hour) cell of the grid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub day_idx: usize,
    pub cabinet_idx: usize,
    pub time: NaiveTime,
}

/// Vertical offset of a time of day.
pub fn time_y(time: NaiveTime, geometry: &GeometryConfig) -> f32 {
    indicator_top(
        minutes_since_midnight(time),
        geometry.slot_height,
        geometry.header_height(),
    )
}

/// Rectangle of the one-hour slot starting at `hour`.
pub fn slot_rect(
    day_idx: usize,
    cabinet_idx: usize,
    hour: u32,
    cabinet_count: usize,
    geometry: &GeometryConfig,
) -> GridRect {
    let column = cabinet_column(day_idx, cabinet_idx, cabinet_count);
    GridRect {
        x: geometry.column_x(column),
        y: geometry.header_height() + hour as f32 * geometry.slot_height,
        width: geometry.event_column_width,
        height: geometry.slot_height,
    }
}

/// Rectangle covered by a shift block.
pub fn shift_rect(shift: &Shift, cabinet_count: usize, geometry: &GeometryConfig) -> GridRect {
    let column = cabinet_column(shift.day_idx, shift.cabinet_idx, cabinet_count);
    let top = time_y(shift.start, geometry);
    GridRect {
        x: geometry.column_x(column),
        y: top,
        width: geometry.event_column_width,
        height: shift.duration_minutes() as f32 / 60.0 * geometry.slot_height,
    }
}

/// Map a point in the grid body to its hour cell. Points over the header,
/// the time axis or past the last column resolve to `None`.
pub fn cell_at(
    x: f32,
    y: f32,
    day_count: usize,
    cabinet_count: usize,
    geometry: &GeometryConfig,
) -> Option<GridCell> {
    if cabinet_count == 0 || geometry.event_column_width <= 0.0 {
        return None;
    }

    let body_x = x - geometry.time_column_width;
    let body_y = y - geometry.header_height();
    if body_x < 0.0 || body_y < 0.0 {
        return None;
    }

    let column = (body_x / geometry.event_column_width) as usize;
    let hour = (body_y / geometry.slot_height) as u32;
    if column >= day_count * cabinet_count || hour >= HOURS_PER_DAY {
        return None;
    }

    Some(GridCell {
        day_idx: column / cabinet_count,
        cabinet_idx: column % cabinet_count,
        time: NaiveTime::from_hms_opt(hour, 0, 0)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::{AssistantId, ShiftId, StaffId};

    fn geometry() -> GeometryConfig {
        GeometryConfig {
            day_header_height: 40.0,
            cabinet_header_height: 30.0,
            slot_height: 50.0,
            time_column_width: 60.0,
            event_column_width: 100.0,
            total_columns: 0,
        }
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_slot_rect_position() {
        let rect = slot_rect(1, 2, 9, 3, &geometry());
        // column = 1*3 + 2 + 2 = 7
        assert_eq!(rect.x, 60.0 + 5.0 * 100.0);
        assert_eq!(rect.y, 70.0 + 9.0 * 50.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn test_shift_rect_matches_time_axis() {
        let shift = Shift::new(
            ShiftId(1),
            StaffId::Assistant(AssistantId(1)),
            "Irina",
            0,
            1,
            t(9, 30),
            t(11, 0),
        )
        .unwrap();
        let rect = shift_rect(&shift, 2, &geometry());

        assert_eq!(rect.x, 160.0);
        assert_eq!(rect.y, 70.0 + 9.5 * 50.0);
        assert_eq!(rect.height, 75.0);
    }

    #[test]
    fn test_cell_at_round_trips_slot_rect() {
        let g = geometry();
        let rect = slot_rect(2, 1, 14, 3, &g);
        let cell = cell_at(rect.x + 1.0, rect.y + 1.0, 5, 3, &g).unwrap();
        assert_eq!(
            cell,
            GridCell {
                day_idx: 2,
                cabinet_idx: 1,
                time: t(14, 0)
            }
        );
    }

    #[test]
    fn test_cell_at_outside_body() {
        let g = geometry();
        assert!(cell_at(10.0, 200.0, 5, 3, &g).is_none(), "time axis");
        assert!(cell_at(200.0, 20.0, 5, 3, &g).is_none(), "header");
        assert!(cell_at(60.0 + 15.0 * 100.0, 200.0, 5, 3, &g).is_none(), "past last column");
        assert!(cell_at(200.0, 70.0 + 24.0 * 50.0, 5, 3, &g).is_none(), "past midnight");
        assert!(cell_at(200.0, 200.0, 5, 0, &g).is_none(), "no cabinets");
    }

    #[test]
    fn test_grid_rect_contains_is_half_open() {
        let rect = GridRect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(rect.contains(0.0, 0.0));
        assert!(!rect.contains(10.0, 5.0));
    }
}
