//! Injected wall-clock for the schedule grid.
//!
//! Views never call `Local::now()` themselves; the scheduling page hands them a
//! [`Clock`] so rendering stays deterministic under test.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

/// Reads the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self(date.and_time(time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
