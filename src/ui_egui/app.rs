mod demo_data;
mod edit_panel;
mod state;
mod status_bar;

use chrono::NaiveDate;
use std::time::Duration as StdDuration;

use self::state::ScheduleState;
use crate::models::cabinet::Cabinet;
use crate::models::settings::{Settings, ThemeChoice};
use crate::services::settings::SettingsService;
use crate::services::shift::ShiftBoard;
use crate::ui_egui::theme::ScheduleTheme;
use crate::ui_egui::views::context_menu::render_context_menu;
use crate::ui_egui::views::schedule_grid::{ScheduleGrid, ScheduleGridProps};
use crate::utils::clock::{Clock, SystemClock};

pub use self::demo_data::demo_schedule;

const MIN_ROOT_WIDTH: f32 = 640.0;
const MIN_ROOT_HEIGHT: f32 = 420.0;

pub struct ScheduleApp {
    settings: Settings,
    /// Where theme changes are persisted; `None` when no config directory exists
    settings_service: Option<SettingsService>,
    active_theme: ScheduleTheme,
    clock: Box<dyn Clock>,
    state: ScheduleState,
}

impl eframe::App for ScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_edit_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let interaction = ScheduleGrid::show(
                ui,
                &ScheduleGridProps {
                    days: &self.state.days,
                    cabinets: &self.state.cabinets,
                    shifts: self.state.board.shifts(),
                    geometry: &self.settings.geometry,
                    theme: &self.active_theme,
                    clock: self.clock.as_ref(),
                    staff_filter: &self.state.staff_filter,
                    highlighted: self.state.board.editing(),
                },
            );

            if let Some(menu) = interaction.open_menu {
                self.state.menu.open(menu, &mut self.state.board);
            } else if interaction.clicked_elsewhere {
                self.state.menu.dismiss(&mut self.state.board);
            }
        });

        if let Some(action) = render_context_menu(ctx, &mut self.state.menu, &mut self.state.board) {
            log::debug!("Applied menu action {:?}", action);
        }

        // The indicator has no timer of its own; repaint on the configured cadence.
        ctx.request_repaint_after(StdDuration::from_secs(self.settings.refresh_interval_secs));
    }
}

impl ScheduleApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let (days, cabinets, board) = demo_schedule(clock.today());
        Self::with_schedule(cc, settings, settings_service, clock, days, cabinets, board)
    }

    pub fn with_schedule(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: Option<SettingsService>,
        clock: Box<dyn Clock>,
        days: Vec<NaiveDate>,
        cabinets: Vec<Cabinet>,
        board: ShiftBoard,
    ) -> Self {
        let active_theme = ScheduleTheme::for_choice(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);
        log::info!(
            "Showing {} day(s) × {} cabinet(s), theme {:?}",
            days.len(),
            cabinets.len(),
            settings.theme
        );

        Self {
            settings,
            settings_service,
            active_theme,
            clock,
            state: ScheduleState::new(days, cabinets, board),
        }
    }

    pub fn min_window_size() -> egui::Vec2 {
        egui::vec2(MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT)
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("schedule_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Schedule");
                ui.separator();

                ui.label("Staff:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.staff_filter)
                        .hint_text("filter by name")
                        .desired_width(160.0),
                );

                ui.separator();
                self.render_default_staff_picker(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = match self.settings.theme {
                        ThemeChoice::Light => "🌙 Dark",
                        ThemeChoice::Dark => "☀ Light",
                    };
                    if ui.button(label).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });
    }

    fn render_default_staff_picker(&mut self, ui: &mut egui::Ui) {
        let current = self
            .state
            .board
            .default_staff()
            .and_then(|staff| self.state.board.member(staff))
            .map(|member| member.name.clone())
            .unwrap_or_else(|| "—".to_string());

        let mut selected = None;
        egui::ComboBox::from_label("New shifts for")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for member in self.state.board.roster() {
                    let label = format!("{} ({})", member.name, member.id.role_label());
                    if ui
                        .selectable_label(self.state.board.default_staff() == Some(member.id), label)
                        .clicked()
                    {
                        selected = Some(member.id);
                    }
                }
            });

        if let Some(staff) = selected {
            self.state.board.set_default_staff(staff);
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = match self.settings.theme {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        };
        self.active_theme = ScheduleTheme::for_choice(self.settings.theme);
        self.active_theme.apply_to_context(ctx);

        if let Some(service) = &self.settings_service {
            if let Err(err) = service.save(&self.settings) {
                log::warn!("Failed to persist theme change: {:#}", err);
            }
        }
    }
}
