//! Status bar showing the last shift-board message and the visible range.

use super::ScheduleApp;
use egui::{Color32, RichText};

/// Get theme-aware secondary text color
fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

impl ScheduleApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let color = secondary_text_color(self.active_theme.is_dark);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let (Some(first), Some(last)) = (self.state.days.first(), self.state.days.last()) {
                    ui.label(
                        RichText::new(format!(
                            "{} – {}",
                            first.format("%d.%m.%Y"),
                            last.format("%d.%m.%Y")
                        ))
                        .color(color),
                    );
                    ui.separator();
                }

                ui.label(
                    RichText::new(format!("{} shift(s)", self.state.board.shifts().len()))
                        .color(color),
                );

                if let Some(status) = self.state.board.status() {
                    ui.separator();
                    ui.label(RichText::new(status).color(color));
                }
            });
        });
    }
}
