//! Paints the current-time marker: label, dot and line.

use egui::{Align2, Color32, FontId, Pos2, Stroke};

use crate::layout::indicator::{TimeIndicatorLayout, DOT_RADIUS};

/// Paint `indicator` relative to the grid `origin`. Nothing is painted when
/// today is outside the displayed days.
pub fn paint_time_indicator(
    painter: &egui::Painter,
    origin: Pos2,
    indicator: Option<&TimeIndicatorLayout>,
    color: Color32,
) {
    let Some(indicator) = indicator else {
        return;
    };

    let y = origin.y + indicator.top;
    let (dot_x, dot_y) = indicator.dot_center;

    painter.text(
        Pos2::new(origin.x + indicator.line_start_x - DOT_RADIUS * 2.0, y),
        Align2::RIGHT_CENTER,
        &indicator.label,
        FontId::proportional(11.0),
        color,
    );
    painter.circle_filled(Pos2::new(origin.x + dot_x, origin.y + dot_y), DOT_RADIUS, color);
    painter.line_segment(
        [
            Pos2::new(origin.x + indicator.line_start_x, y),
            Pos2::new(origin.x + indicator.line_end_x(), y),
        ],
        Stroke::new(2.0, color),
    );
}
