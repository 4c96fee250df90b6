pub mod context_menu;
mod palette;
pub mod schedule_grid;
pub mod schedule_header;
pub mod time_indicator;
