mod app;
pub mod theme;
pub mod views;

pub use app::{demo_schedule, ScheduleApp};
