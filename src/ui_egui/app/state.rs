use chrono::NaiveDate;

use crate::layout::menu::MenuSlot;
use crate::models::cabinet::Cabinet;
use crate::services::shift::ShiftBoard;

/// Everything the scheduling page owns between frames.
pub struct ScheduleState {
    pub days: Vec<NaiveDate>,
    pub cabinets: Vec<Cabinet>,
    pub board: ShiftBoard,
    /// The single context-menu slot; at most one menu is open.
    pub menu: MenuSlot,
    pub staff_filter: String,
}

impl ScheduleState {
    pub fn new(days: Vec<NaiveDate>, cabinets: Vec<Cabinet>, board: ShiftBoard) -> Self {
        Self {
            days,
            cabinets,
            board,
            menu: MenuSlot::new(),
            staff_filter: String::new(),
        }
    }
}
