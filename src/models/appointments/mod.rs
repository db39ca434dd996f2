pub mod appointment;

pub use appointment::{default_scheduled_at, ScheduleAck, ScheduleRequest, SCHEDULE_TIMESTAMP_FORMAT};
