//! Two-tier sticky header layout for the schedule grid.
//!
//! The day tier spans every cabinet of its day; the cabinet tier has one cell
//! per (day, cabinet) pair. Grid column 1 belongs to the time axis, so the
//! cabinet at `(day_idx, cabinet_idx)` sits on column
//! `day_idx * cabinets.len() + cabinet_idx + 2`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::cabinet::{Cabinet, CabinetId};
use crate::models::geometry::{GeometryConfig, GridSpan, FIRST_EVENT_COLUMN};
use crate::utils::date::format_day_label;

/// Edge markers applied only at the outer corners of the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellDecorations {
    pub round_top_left: bool,
    pub round_top_right: bool,
    pub accent_dot: bool,
}

impl CellDecorations {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayHeaderCell {
    pub day_idx: usize,
    pub date: NaiveDate,
    pub label: String,
    pub columns: GridSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CabinetHeaderCell {
    pub day_idx: usize,
    pub cabinet_idx: usize,
    pub cabinet_id: CabinetId,
    pub label: String,
    pub columns: GridSpan,
    pub decorations: CellDecorations,
}

/// Vertical placement of one sticky tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierBand {
    pub sticky_top: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderLayout {
    pub day_cells: Vec<DayHeaderCell>,
    pub cabinet_cells: Vec<CabinetHeaderCell>,
}

/// Grid column of a cabinet cell.
pub fn cabinet_column(day_idx: usize, cabinet_idx: usize, cabinet_count: usize) -> usize {
    day_idx * cabinet_count + cabinet_idx + FIRST_EVENT_COLUMN
}

impl HeaderLayout {
    pub fn build(days: &[NaiveDate], cabinets: &[Cabinet]) -> Self {
        let cabinet_count = cabinets.len();
        if days.is_empty() || cabinet_count == 0 {
            return Self::default();
        }

        let last_day = days.len() - 1;
        let last_cabinet = cabinet_count - 1;

        let day_cells = days
            .iter()
            .enumerate()
            .map(|(day_idx, date)| {
                let start = cabinet_column(day_idx, 0, cabinet_count);
                DayHeaderCell {
                    day_idx,
                    date: *date,
                    label: format_day_label(*date),
                    columns: GridSpan::new(start, start + cabinet_count),
                }
            })
            .collect();

        let mut cabinet_cells = Vec::with_capacity(days.len() * cabinet_count);
        for day_idx in 0..days.len() {
            for (cabinet_idx, cabinet) in cabinets.iter().enumerate() {
                let column = cabinet_column(day_idx, cabinet_idx, cabinet_count);
                let is_first = day_idx == 0 && cabinet_idx == 0;
                let is_last = day_idx == last_day && cabinet_idx == last_cabinet;

                cabinet_cells.push(CabinetHeaderCell {
                    day_idx,
                    cabinet_idx,
                    cabinet_id: cabinet.id,
                    label: cabinet.name.clone(),
                    columns: GridSpan::new(column, column + 1),
                    decorations: CellDecorations {
                        round_top_left: is_first,
                        round_top_right: is_last,
                        accent_dot: is_last,
                    },
                });
            }
        }

        Self {
            day_cells,
            cabinet_cells,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day_cells.is_empty() && self.cabinet_cells.is_empty()
    }

    pub fn day_tier(geometry: &GeometryConfig) -> TierBand {
        TierBand {
            sticky_top: 0.0,
            height: geometry.day_header_height,
        }
    }

    pub fn cabinet_tier(geometry: &GeometryConfig) -> TierBand {
        TierBand {
            sticky_top: geometry.day_header_height,
            height: geometry.cabinet_header_height,
        }
    }

    /// Last grid line used by the header (exclusive).
    pub fn end_column(&self) -> usize {
        self.cabinet_cells
            .last()
            .map(|cell| cell.columns.end)
            .unwrap_or(FIRST_EVENT_COLUMN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, d).unwrap()
    }

    fn cabinets(n: u32) -> Vec<Cabinet> {
        (1..=n).map(|i| Cabinet::new(i, format!("Cabinet {}", i))).collect()
    }

    #[test]
    fn test_empty_days_produce_no_cells() {
        let layout = HeaderLayout::build(&[], &cabinets(3));
        assert!(layout.is_empty());
    }

    #[test]
    fn test_empty_cabinets_produce_no_cells() {
        let layout = HeaderLayout::build(&[day(3), day(4)], &[]);
        assert!(layout.is_empty());
        assert_eq!(layout.end_column(), FIRST_EVENT_COLUMN);
    }

    #[test]
    fn test_column_formula() {
        assert_eq!(cabinet_column(0, 0, 3), 2);
        assert_eq!(cabinet_column(1, 0, 3), 5);
        assert_eq!(cabinet_column(2, 2, 3), 10);
    }

    #[test]
    fn test_only_outer_corners_are_decorated() {
        let layout = HeaderLayout::build(&[day(3), day(4), day(5)], &cabinets(3));
        assert_eq!(layout.cabinet_cells.len(), 9);

        let decorated: Vec<(usize, usize)> = layout
            .cabinet_cells
            .iter()
            .filter(|cell| !cell.decorations.is_plain())
            .map(|cell| (cell.day_idx, cell.cabinet_idx))
            .collect();
        assert_eq!(decorated, vec![(0, 0), (2, 2)]);

        // The last cabinet of a middle day stays plain.
        let middle_last = &layout.cabinet_cells[5];
        assert_eq!((middle_last.day_idx, middle_last.cabinet_idx), (1, 2));
        assert!(middle_last.decorations.is_plain());
    }

    #[test]
    fn test_single_cabinet_single_day_gets_both_corners() {
        let layout = HeaderLayout::build(&[day(3)], &cabinets(1));
        let cell = &layout.cabinet_cells[0];
        assert_eq!(
            cell.decorations,
            CellDecorations {
                round_top_left: true,
                round_top_right: true,
                accent_dot: true,
            }
        );
    }

    #[test]
    fn test_tiers_stack_vertically() {
        let geometry = GeometryConfig::default();
        let day_tier = HeaderLayout::day_tier(&geometry);
        let cabinet_tier = HeaderLayout::cabinet_tier(&geometry);
        assert_eq!(day_tier.sticky_top, 0.0);
        assert_eq!(cabinet_tier.sticky_top, geometry.day_header_height);
        assert_eq!(
            cabinet_tier.sticky_top + cabinet_tier.height,
            geometry.header_height()
        );
    }
}
