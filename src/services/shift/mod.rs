// Shift board service
// In-memory shifts owned by the scheduling page; receives context-menu requests

use chrono::{Duration, NaiveTime};

use crate::layout::menu::MenuActions;
use crate::models::shift::{AdministratorId, AssistantId, Shift, ShiftId, StaffId};

/// Length of a shift created from an empty cell.
pub const DEFAULT_SHIFT_MINUTES: i64 = 60;

/// A staff member that can be placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
}

impl StaffMember {
    pub fn new(id: StaffId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

pub struct ShiftBoard {
    shifts: Vec<Shift>,
    roster: Vec<StaffMember>,
    next_id: u64,
    /// Staff used for shifts created from the empty-cell menu.
    default_staff: Option<StaffId>,
    /// Staff whose shifts are open for editing.
    editing: Option<StaffId>,
    status: Option<String>,
}

impl ShiftBoard {
    pub fn new(roster: Vec<StaffMember>) -> Self {
        let default_staff = roster.first().map(|member| member.id);
        Self {
            shifts: Vec::new(),
            roster,
            next_id: 1,
            default_staff,
            editing: None,
            status: None,
        }
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn roster(&self) -> &[StaffMember] {
        &self.roster
    }

    pub fn editing(&self) -> Option<StaffId> {
        self.editing
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn default_staff(&self) -> Option<StaffId> {
        self.default_staff
    }

    pub fn set_default_staff(&mut self, staff: StaffId) {
        if self.member(staff).is_some() {
            self.default_staff = Some(staff);
        } else {
            log::warn!("Ignoring unknown default staff {}", staff);
        }
    }

    pub fn member(&self, staff: StaffId) -> Option<&StaffMember> {
        self.roster.iter().find(|member| member.id == staff)
    }

    pub fn shifts_for(&self, staff: StaffId) -> impl Iterator<Item = &Shift> {
        self.shifts.iter().filter(move |shift| shift.staff == staff)
    }

    pub fn shift_at(&self, day_idx: usize, cabinet_idx: usize, time: NaiveTime) -> Option<&Shift> {
        self.shifts
            .iter()
            .find(|shift| shift.occupies(day_idx, cabinet_idx, time))
    }

    /// Place a shift for `staff`. Returns the new id.
    ///
    /// The board does not know which days and cabinets are displayed, so
    /// `day_idx` and `cabinet_idx` are taken as given. The grid neither paints
    /// nor hit-tests shifts outside the displayed range.
    pub fn add(
        &mut self,
        staff: StaffId,
        day_idx: usize,
        cabinet_idx: usize,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<ShiftId, String> {
        let name = self
            .member(staff)
            .map(|member| member.name.clone())
            .ok_or_else(|| format!("Unknown staff member {}", staff))?;

        if let Some(existing) = self
            .shifts
            .iter()
            .find(|s| s.day_idx == day_idx && s.cabinet_idx == cabinet_idx && s.start < end && start < s.end)
        {
            return Err(format!(
                "Cabinet is already taken by {} from {} to {}",
                existing.staff_name,
                existing.start.format("%H:%M"),
                existing.end.format("%H:%M")
            ));
        }

        let id = ShiftId(self.next_id);
        let shift = Shift::new(id, staff, name, day_idx, cabinet_idx, start, end)?;
        self.next_id += 1;
        self.shifts.push(shift);
        Ok(id)
    }

    /// Remove every shift owned by `staff`. Returns how many were removed.
    pub fn remove_staff(&mut self, staff: StaffId) -> usize {
        let before = self.shifts.len();
        self.shifts.retain(|shift| shift.staff != staff);
        if self.editing == Some(staff) {
            self.editing = None;
        }
        before - self.shifts.len()
    }

    fn delete_staff(&mut self, staff: StaffId) {
        let removed = self.remove_staff(staff);
        if removed == 0 {
            log::warn!("No shifts found for {}", staff);
            self.status = Some(format!("No shifts found for {}", staff));
        } else {
            log::info!("Deleted {} shift(s) for {}", removed, staff);
            self.status = Some(format!("Deleted {} shift(s) for {}", removed, staff));
        }
    }
}

impl MenuActions for ShiftBoard {
    fn on_edit(&mut self, staff: StaffId) {
        if self.member(staff).is_none() {
            log::warn!("Edit requested for unknown {}", staff);
            return;
        }
        log::info!("Editing shifts of {}", staff);
        self.editing = Some(staff);
    }

    fn on_delete_administrator(&mut self, id: AdministratorId) {
        self.delete_staff(StaffId::Administrator(id));
    }

    fn on_delete_assistant(&mut self, id: AssistantId) {
        self.delete_staff(StaffId::Assistant(id));
    }

    fn on_add_shift(&mut self, day_idx: usize, cabinet_idx: usize, time: NaiveTime) {
        let Some(staff) = self.default_staff else {
            log::warn!("Cannot add a shift: the roster is empty");
            return;
        };

        let (end, wrapped) = time.overflowing_add_signed(Duration::minutes(DEFAULT_SHIFT_MINUTES));
        let end = if wrapped != 0 {
            NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(time)
        } else {
            end
        };

        match self.add(staff, day_idx, cabinet_idx, time, end) {
            Ok(id) => {
                log::info!(
                    "Added shift {:?} for {} on day {} cabinet {} at {}",
                    id,
                    staff,
                    day_idx,
                    cabinet_idx,
                    time.format("%H:%M")
                );
                self.status = Some(format!("Added shift at {}", time.format("%H:%M")));
            }
            Err(err) => {
                log::warn!("Could not add shift: {}", err);
                self.status = Some(err);
            }
        }
    }

    fn on_close(&mut self) {
        log::trace!("Context menu closed");
    }
}
