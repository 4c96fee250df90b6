//! Mock clinic data shown by the desktop binary.

use chrono::{NaiveDate, NaiveTime};

use crate::models::cabinet::Cabinet;
use crate::models::shift::{AdministratorId, AssistantId, StaffId};
use crate::services::shift::{ShiftBoard, StaffMember};
use crate::utils::date::work_week;

fn hm(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

pub fn cabinets() -> Vec<Cabinet> {
    vec![
        Cabinet::new(1, "Therapy"),
        Cabinet::new(2, "Surgery"),
        Cabinet::new(3, "Hygiene"),
    ]
}

pub fn roster() -> Vec<StaffMember> {
    vec![
        StaffMember::new(StaffId::Administrator(AdministratorId(1)), "Olga Petrova"),
        StaffMember::new(StaffId::Administrator(AdministratorId(2)), "Anna Smirnova"),
        StaffMember::new(StaffId::Assistant(AssistantId(1)), "Maria Ivanova"),
        StaffMember::new(StaffId::Assistant(AssistantId(2)), "Irina Kuznetsova"),
    ]
}

/// The work week around `today`, seeded with a handful of shifts.
pub fn demo_schedule(today: NaiveDate) -> (Vec<NaiveDate>, Vec<Cabinet>, ShiftBoard) {
    let days = work_week(today);
    let cabinets = cabinets();
    let mut board = ShiftBoard::new(roster());

    let seed = [
        (StaffId::Administrator(AdministratorId(1)), 0, 0, hm(8, 0), hm(14, 0)),
        (StaffId::Assistant(AssistantId(1)), 0, 1, hm(9, 0), hm(13, 0)),
        (StaffId::Administrator(AdministratorId(2)), 1, 0, hm(14, 0), hm(20, 0)),
        (StaffId::Assistant(AssistantId(2)), 2, 2, hm(10, 30), hm(16, 0)),
        (StaffId::Assistant(AssistantId(1)), 3, 1, hm(8, 0), hm(12, 0)),
        (StaffId::Administrator(AdministratorId(1)), 4, 0, hm(9, 0), hm(15, 0)),
    ];

    for (staff, day_idx, cabinet_idx, start, end) in seed {
        let (Some(start), Some(end)) = (start, end) else {
            continue;
        };
        if let Err(err) = board.add(staff, day_idx, cabinet_idx, start, end) {
            log::warn!("Skipping demo shift: {}", err);
        }
    }

    (days, cabinets, board)
}
