//! Theme module for the schedule grid
//!
//! Defines the ScheduleTheme structure and the light/dark presets selected by
//! the `theme` key in config.toml.

use egui::Color32;

use crate::models::settings::ThemeChoice;

/// Colors used by the schedule page
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Grid body background color
    pub grid_background: Color32,

    /// Background of weekend day columns
    pub weekend_background: Color32,

    /// Header cell background color
    pub header_background: Color32,

    /// Header text color
    pub header_text: Color32,

    /// Grid line color
    pub grid_line: Color32,

    /// Accent used for the corner markers and the current-time indicator
    pub accent: Color32,

    /// Administrator shift block color
    pub administrator_block: Color32,

    /// Assistant shift block color
    pub assistant_block: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color (time labels)
    pub text_secondary: Color32,
}

impl ScheduleTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            header_background: Color32::from_rgb(236, 241, 250),
            header_text: Color32::from_rgb(40, 40, 40),
            grid_line: Color32::from_rgb(220, 220, 220),
            accent: Color32::from_rgb(255, 100, 100),
            administrator_block: Color32::from_rgb(100, 150, 200),
            assistant_block: Color32::from_rgb(110, 180, 130),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            header_background: Color32::from_rgb(50, 60, 80),
            header_text: Color32::from_rgb(240, 240, 240),
            grid_line: Color32::from_rgb(60, 60, 60),
            accent: Color32::from_rgb(255, 110, 110),
            administrator_block: Color32::from_rgb(70, 110, 160),
            assistant_block: Color32::from_rgb(70, 130, 90),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
