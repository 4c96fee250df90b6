//! Pure layout and interaction logic for the schedule grid.
//!
//! Nothing here touches egui; the views in `ui_egui::views` paint what these
//! modules compute.

pub mod grid;
pub mod header;
pub mod indicator;
pub mod menu;
