// Shift module
// Staff shift blocks placed on the (day, cabinet) grid

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdministratorId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssistantId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftId(pub u64);

/// Who a shift belongs to. Context menus capture only this identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffId {
    Administrator(AdministratorId),
    Assistant(AssistantId),
}

impl StaffId {
    pub fn role_label(&self) -> &'static str {
        match self {
            StaffId::Administrator(_) => "Administrator",
            StaffId::Assistant(_) => "Assistant",
        }
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffId::Administrator(id) => write!(f, "administrator #{}", id.0),
            StaffId::Assistant(id) => write!(f, "assistant #{}", id.0),
        }
    }
}

/// A shift block occupying one grid column between `start` and `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub staff: StaffId,
    pub staff_name: String,
    pub day_idx: usize,
    pub cabinet_idx: usize,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Shift {
    /// Create a shift, rejecting empty names and non-positive durations.
    pub fn new(
        id: ShiftId,
        staff: StaffId,
        staff_name: impl Into<String>,
        day_idx: usize,
        cabinet_idx: usize,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, String> {
        let staff_name = staff_name.into();
        if staff_name.trim().is_empty() {
            return Err("Staff name cannot be empty".to_string());
        }
        if end <= start {
            return Err("Shift end time must be after start time".to_string());
        }

        Ok(Self {
            id,
            staff,
            staff_name,
            day_idx,
            cabinet_idx,
            start,
            end,
        })
    }

    pub fn duration_minutes(&self) -> u32 {
        let start = self.start.num_seconds_from_midnight() / 60;
        let end = self.end.num_seconds_from_midnight() / 60;
        end - start
    }

    pub fn occupies(&self, day_idx: usize, cabinet_idx: usize, time: NaiveTime) -> bool {
        self.day_idx == day_idx
            && self.cabinet_idx == cabinet_idx
            && self.start <= time
            && time < self.end
    }
}
