//! Side panel listing the shifts of the staff member picked via "Edit".

use super::ScheduleApp;

impl ScheduleApp {
    pub(super) fn render_edit_panel(&mut self, ctx: &egui::Context) {
        let Some(staff) = self.state.board.editing() else {
            return;
        };

        let mut close = false;
        egui::SidePanel::right("edit_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                let name = self
                    .state
                    .board
                    .member(staff)
                    .map(|member| member.name.as_str())
                    .unwrap_or("Unknown");
                ui.heading(name);
                ui.label(staff.role_label());
                ui.separator();

                let mut any = false;
                for shift in self.state.board.shifts_for(staff) {
                    any = true;
                    let day = self
                        .state
                        .days
                        .get(shift.day_idx)
                        .map(|d| d.format("%a %d.%m").to_string())
                        .unwrap_or_else(|| format!("day {}", shift.day_idx));
                    let cabinet = self
                        .state
                        .cabinets
                        .get(shift.cabinet_idx)
                        .map(|c| c.name.as_str())
                        .unwrap_or("?");
                    ui.label(format!(
                        "{} · {} · {}–{}",
                        day,
                        cabinet,
                        shift.start.format("%H:%M"),
                        shift.end.format("%H:%M")
                    ));
                }
                if !any {
                    ui.label("No shifts this week");
                }

                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });

        if close {
            self.state.board.stop_editing();
        }
    }
}
