//! Paints the two-tier sticky header computed by `layout::header`.

use egui::{Align2, FontId, Pos2, Rect, Rounding, Stroke, Vec2};

use super::palette::HeaderPalette;
use crate::layout::header::{CellDecorations, HeaderLayout};
use crate::models::geometry::{GeometryConfig, GridSpan};

const CORNER_RADIUS: f32 = 8.0;
const ACCENT_DOT_RADIUS: f32 = 3.0;

fn span_rect(origin: Pos2, span: GridSpan, top: f32, height: f32, geometry: &GeometryConfig) -> Rect {
    Rect::from_min_size(
        Pos2::new(origin.x + geometry.column_x(span.start), origin.y + top),
        Vec2::new(geometry.span_width(span), height),
    )
}

fn rounding_for(decorations: CellDecorations) -> Rounding {
    Rounding {
        nw: if decorations.round_top_left { CORNER_RADIUS } else { 0.0 },
        ne: if decorations.round_top_right { CORNER_RADIUS } else { 0.0 },
        sw: 0.0,
        se: 0.0,
    }
}

/// Paint the header with its top-left corner at `origin`. The caller picks
/// `origin` so the header stays pinned while the grid scrolls.
pub fn paint_schedule_header(
    painter: &egui::Painter,
    origin: Pos2,
    layout: &HeaderLayout,
    geometry: &GeometryConfig,
    palette: &HeaderPalette,
) {
    if layout.is_empty() {
        return;
    }

    let day_tier = HeaderLayout::day_tier(geometry);
    let cabinet_tier = HeaderLayout::cabinet_tier(geometry);
    let stroke = Stroke::new(1.0, palette.border);

    // Time-axis corner covering both tiers
    let corner = Rect::from_min_size(
        origin,
        Vec2::new(geometry.time_column_width, geometry.header_height()),
    );
    painter.rect_filled(corner, Rounding::ZERO, palette.day_bg);

    for cell in &layout.day_cells {
        let rect = span_rect(origin, cell.columns, day_tier.sticky_top, day_tier.height, geometry);
        painter.rect(rect, Rounding::ZERO, palette.day_bg, stroke);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &cell.label,
            FontId::proportional(13.0),
            palette.text,
        );
    }

    for cell in &layout.cabinet_cells {
        let rect = span_rect(
            origin,
            cell.columns,
            cabinet_tier.sticky_top,
            cabinet_tier.height,
            geometry,
        );
        painter.rect(rect, rounding_for(cell.decorations), palette.cabinet_bg, stroke);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &cell.label,
            FontId::proportional(12.0),
            palette.text,
        );

        if cell.decorations.accent_dot {
            let center = Pos2::new(
                rect.right() - CORNER_RADIUS - ACCENT_DOT_RADIUS,
                rect.top() + CORNER_RADIUS,
            );
            painter.circle_filled(center, ACCENT_DOT_RADIUS, palette.accent);
        }
    }

    painter.hline(
        origin.x..=origin.x + geometry.column_x(layout.end_column()),
        origin.y + geometry.header_height(),
        Stroke::new(1.0, palette.accent),
    );
}
