//! Staff working-hours containment

use chrono::{Datelike, NaiveDate, NaiveTime};

use super::Interval;
use crate::models::staff::WorkingHours;

/// Wall-clock working window for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkingWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// Sunday-first day-of-week index (0..=6)
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The schedule entry for the weekday of `date`, if the staff member works that day
pub fn working_window(schedule: &[WorkingHours], date: NaiveDate) -> Option<WorkingWindow> {
    let dow = day_of_week(date);
    schedule
        .iter()
        .find(|wh| wh.day_of_week == dow)
        .map(|wh| WorkingWindow::new(wh.start_time, wh.end_time))
}

/// The whole interval must sit inside the window on the interval's start date
pub fn fits_working_hours(interval: &Interval, window: &WorkingWindow) -> bool {
    let date = interval.start.date();
    interval.start >= date.and_time(window.start) && interval.end <= date.and_time(window.end)
}
