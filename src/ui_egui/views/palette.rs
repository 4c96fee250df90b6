use crate::ui_egui::theme::ScheduleTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub struct HeaderPalette {
    pub day_bg: Color32,
    pub cabinet_bg: Color32,
    pub border: Color32,
    pub text: Color32,
    pub accent: Color32,
}

impl HeaderPalette {
    pub fn from_theme(theme: &ScheduleTheme) -> Self {
        Self {
            day_bg: theme.header_background,
            cabinet_bg: blend(theme.header_background, theme.grid_background, 0.5),
            border: theme.grid_line,
            text: theme.header_text,
            accent: theme.accent,
        }
    }
}

#[derive(Clone, Copy)]
pub struct GridPalette {
    pub background: Color32,
    pub weekend_bg: Color32,
    pub hour_line: Color32,
    pub day_divider: Color32,
    pub time_text: Color32,
    pub hover_overlay: Color32,
    pub administrator_block: Color32,
    pub assistant_block: Color32,
    pub block_text: Color32,
    pub indicator: Color32,
}

impl GridPalette {
    pub fn from_theme(theme: &ScheduleTheme) -> Self {
        Self {
            background: theme.grid_background,
            weekend_bg: theme.weekend_background,
            hour_line: with_alpha(theme.grid_line, 170),
            day_divider: theme.grid_line,
            time_text: theme.text_secondary,
            hover_overlay: with_alpha(theme.accent, if theme.is_dark { 50 } else { 30 }),
            administrator_block: theme.administrator_block,
            assistant_block: theme.assistant_block,
            block_text: Color32::WHITE,
            indicator: theme.accent,
        }
    }
}
