//! Schedule grid view: hour slots per (day, cabinet) column, shift blocks,
//! the sticky header and the current-time indicator.
//!
//! The view owns no state. It reports right-clicks and outside clicks back to
//! the scheduling page through [`GridInteraction`].

use chrono::{NaiveDate, Timelike};
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::{GridPalette, HeaderPalette};
use super::schedule_header::paint_schedule_header;
use super::time_indicator::paint_time_indicator;
use crate::layout::grid::{cell_at, shift_rect, slot_rect, GridRect, HOURS_PER_DAY};
use crate::layout::header::HeaderLayout;
use crate::layout::indicator::TimeIndicator;
use crate::layout::menu::{Anchor, ContextMenu};
use crate::models::cabinet::Cabinet;
use crate::models::geometry::GeometryConfig;
use crate::models::shift::{Shift, StaffId};
use crate::ui_egui::theme::ScheduleTheme;
use crate::utils::clock::Clock;
use crate::utils::date::is_weekend;

/// Inputs supplied by the scheduling page for one frame.
pub struct ScheduleGridProps<'a> {
    pub days: &'a [NaiveDate],
    pub cabinets: &'a [Cabinet],
    pub shifts: &'a [Shift],
    pub geometry: &'a GeometryConfig,
    pub theme: &'a ScheduleTheme,
    pub clock: &'a dyn Clock,
    /// Case-insensitive staff name filter; non-matching blocks are dimmed.
    pub staff_filter: &'a str,
    /// Staff whose blocks are outlined as being edited.
    pub highlighted: Option<StaffId>,
}

/// What happened on the grid this frame.
#[derive(Debug, Default)]
pub struct GridInteraction {
    /// A right-click asked for this menu to open.
    pub open_menu: Option<ContextMenu>,
    /// A primary click landed on the grid outside any menu.
    pub clicked_elsewhere: bool,
}

fn to_rect(origin: Pos2, rect: GridRect) -> Rect {
    Rect::from_min_size(
        Pos2::new(origin.x + rect.x, origin.y + rect.y),
        Vec2::new(rect.width, rect.height),
    )
}

fn matches_filter(shift: &Shift, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty()
        || shift
            .staff_name
            .to_lowercase()
            .contains(&filter.to_lowercase())
}

/// Whether `shift` falls inside the displayed days and cabinets.
fn is_visible(shift: &Shift, props: &ScheduleGridProps<'_>) -> bool {
    shift.day_idx < props.days.len() && shift.cabinet_idx < props.cabinets.len()
}

pub struct ScheduleGrid;

impl ScheduleGrid {
    pub fn show(ui: &mut egui::Ui, props: &ScheduleGridProps<'_>) -> GridInteraction {
        let mut interaction = GridInteraction::default();
        let geometry = props.geometry;
        let cabinet_count = props.cabinets.len();
        let column_count = props.days.len() * cabinet_count;

        let header = HeaderLayout::build(props.days, props.cabinets);
        let indicator = TimeIndicator::from_clock(props.clock, props.days, cabinet_count, geometry);
        let grid_palette = GridPalette::from_theme(props.theme);
        let header_palette = HeaderPalette::from_theme(props.theme);

        let total_size = Vec2::new(
            geometry.time_column_width + column_count as f32 * geometry.event_column_width,
            geometry.header_height() + geometry.day_height(),
        );

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                let (rect, response) = ui.allocate_exact_size(total_size, Sense::click());
                let origin = rect.min;
                let painter = ui.painter_at(rect);

                Self::paint_body(&painter, origin, props, &grid_palette);

                let hovered = response
                    .hover_pos()
                    .and_then(|pos| Self::body_hit(pos, origin, viewport.min.y, props));
                if let Some(slot) = hovered {
                    painter.rect_filled(slot, Rounding::same(2.0), grid_palette.hover_overlay);
                }

                Self::paint_shifts(&painter, origin, props, &grid_palette);
                paint_time_indicator(&painter, origin, indicator.as_ref(), grid_palette.indicator);

                // Header is painted last so it covers scrolled content.
                let sticky_origin = Pos2::new(origin.x, origin.y + viewport.min.y);
                paint_schedule_header(&painter, sticky_origin, &header, geometry, &header_palette);

                if response.secondary_clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        interaction.open_menu = Self::menu_at(pos, origin, viewport.min.y, props);
                    }
                } else if response.clicked() {
                    interaction.clicked_elsewhere = true;
                }
            });

        interaction
    }

    fn paint_body(
        painter: &egui::Painter,
        origin: Pos2,
        props: &ScheduleGridProps<'_>,
        palette: &GridPalette,
    ) {
        let geometry = props.geometry;
        let cabinet_count = props.cabinets.len();

        for (day_idx, date) in props.days.iter().enumerate() {
            let fill = if is_weekend(*date) {
                palette.weekend_bg
            } else {
                palette.background
            };
            for cabinet_idx in 0..cabinet_count {
                for hour in 0..HOURS_PER_DAY {
                    let slot = to_rect(
                        origin,
                        slot_rect(day_idx, cabinet_idx, hour, cabinet_count, geometry),
                    );
                    painter.rect(slot, Rounding::ZERO, fill, Stroke::new(0.5, palette.hour_line));
                }
            }

            if day_idx > 0 {
                let x = origin.x
                    + geometry.time_column_width
                    + (day_idx * cabinet_count) as f32 * geometry.event_column_width;
                painter.vline(
                    x,
                    (origin.y + geometry.header_height())..=(origin.y + geometry.header_height() + geometry.day_height()),
                    Stroke::new(2.0, palette.day_divider),
                );
            }
        }

        for hour in 0..HOURS_PER_DAY {
            let y = origin.y + geometry.header_height() + hour as f32 * geometry.slot_height;
            painter.text(
                Pos2::new(origin.x + geometry.time_column_width - 6.0, y + 2.0),
                Align2::RIGHT_TOP,
                format!("{:02}:00", hour),
                FontId::proportional(12.0),
                palette.time_text,
            );
        }
    }

    fn paint_shifts(
        painter: &egui::Painter,
        origin: Pos2,
        props: &ScheduleGridProps<'_>,
        palette: &GridPalette,
    ) {
        let cabinet_count = props.cabinets.len();
        for shift in props.shifts.iter().filter(|shift| is_visible(shift, props)) {

            let rect = to_rect(origin, shift_rect(shift, cabinet_count, props.geometry)).shrink(2.0);
            let base = match shift.staff {
                StaffId::Administrator(_) => palette.administrator_block,
                StaffId::Assistant(_) => palette.assistant_block,
            };
            let fill = if matches_filter(shift, props.staff_filter) {
                base
            } else {
                base.gamma_multiply(0.35)
            };
            let stroke = if props.highlighted == Some(shift.staff) {
                Stroke::new(2.0, palette.indicator)
            } else {
                Stroke::NONE
            };

            painter.rect(rect, Rounding::same(4.0), fill, stroke);
            painter.text(
                rect.left_top() + Vec2::new(6.0, 4.0),
                Align2::LEFT_TOP,
                format!(
                    "{}\n{}–{}",
                    shift.staff_name,
                    shift.start.format("%H:%M"),
                    shift.end.format("%H:%M")
                ),
                FontId::proportional(11.0),
                palette.block_text,
            );
        }
    }

    /// Grid coordinates of `pos`, or `None` when it falls on the sticky header.
    fn grid_point(pos: Pos2, origin: Pos2, scroll_y: f32, props: &ScheduleGridProps<'_>) -> Option<(f32, f32)> {
        let local = pos - origin;
        if local.y - scroll_y < props.geometry.header_height() {
            return None;
        }
        Some((local.x, local.y))
    }

    fn body_hit(pos: Pos2, origin: Pos2, scroll_y: f32, props: &ScheduleGridProps<'_>) -> Option<Rect> {
        let (x, y) = Self::grid_point(pos, origin, scroll_y, props)?;
        let cabinet_count = props.cabinets.len();
        let cell = cell_at(x, y, props.days.len(), cabinet_count, props.geometry)?;
        Some(to_rect(
            origin,
            slot_rect(cell.day_idx, cell.cabinet_idx, cell.time.hour(), cabinet_count, props.geometry),
        ))
    }

    /// Menu for a right-click at screen position `pos`.
    ///
    /// Only shifts that are painted can be hit; anything else under the
    /// pointer is a free cell.
    pub fn menu_at(pos: Pos2, origin: Pos2, scroll_y: f32, props: &ScheduleGridProps<'_>) -> Option<ContextMenu> {
        let (x, y) = Self::grid_point(pos, origin, scroll_y, props)?;
        let anchor = Anchor::new(pos.x, pos.y);
        let cabinet_count = props.cabinets.len();

        if let Some(shift) = props.shifts.iter().find(|shift| {
            is_visible(shift, props) && shift_rect(shift, cabinet_count, props.geometry).contains(x, y)
        })
        {
            return Some(ContextMenu::for_staff(anchor, shift.staff));
        }

        let cell = cell_at(x, y, props.days.len(), cabinet_count, props.geometry)?;
        Some(ContextMenu::empty_cell(anchor, cell.day_idx, cell.cabinet_idx, cell.time))
    }
}
