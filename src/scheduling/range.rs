//! Selectable time range and slot grid for a given day and service duration

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

use super::{check_slot, BusinessHours, Interval, SlotRules};

/// Earliest and latest selectable start on a day.
///
/// Both bounds are `None` when no date is selected. When the service is longer
/// than the business window `max_time` precedes `min_time`; see [`Self::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SelectableRange {
    pub min_time: Option<NaiveDateTime>,
    pub max_time: Option<NaiveDateTime>,
}

impl SelectableRange {
    pub fn unconstrained() -> Self {
        Self { min_time: None, max_time: None }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.min_time.is_none() && self.max_time.is_none()
    }

    /// True when the range is inverted, i.e. there is no valid start at all
    pub fn is_empty(&self) -> bool {
        matches!((self.min_time, self.max_time), (Some(min), Some(max)) if max < min)
    }
}

/// A candidate start with its implied end and availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeSlot {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub is_available: bool,
}

/// `min_time` is opening on the selected date, `max_time` is closing minus the
/// service duration. The time-of-day of the selection is irrelevant.
pub fn compute_selectable_time_range(
    selected_date: Option<NaiveDate>,
    service_duration: u32,
    business_hours: BusinessHours,
) -> SelectableRange {
    let Some(date) = selected_date else {
        return SelectableRange::unconstrained();
    };

    SelectableRange {
        min_time: Some(business_hours.opening(date)),
        max_time: Some(business_hours.closing(date) - Duration::minutes(i64::from(service_duration))),
    }
}

/// Every `step_minutes` start between the range bounds (inclusive), each
/// evaluated against the existing bookings with the start-hour rule only.
pub fn day_slots(
    date: NaiveDate,
    service_duration: u32,
    business_hours: BusinessHours,
    step_minutes: u32,
    existing: &[Interval],
) -> Vec<TimeSlot> {
    day_slots_with_rules(
        date,
        service_duration,
        &SlotRules::lenient(business_hours),
        step_minutes,
        existing,
    )
}

/// Same grid as [`day_slots`], with closing and staff-hours rules applied
pub fn day_slots_with_rules(
    date: NaiveDate,
    service_duration: u32,
    rules: &SlotRules,
    step_minutes: u32,
    existing: &[Interval],
) -> Vec<TimeSlot> {
    let range = compute_selectable_time_range(Some(date), service_duration, rules.business_hours);
    let (Some(min_time), Some(max_time)) = (range.min_time, range.max_time) else {
        return Vec::new();
    };

    let step = Duration::minutes(i64::from(step_minutes.max(1)));
    let length = Duration::minutes(i64::from(service_duration));

    let mut slots = Vec::new();
    let mut start = min_time;
    while start <= max_time {
        slots.push(TimeSlot {
            start_time: start,
            end_time: start + length,
            is_available: check_slot(start, service_duration, rules, existing).is_available(),
        });
        start += step;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{at, day};
    use super::*;

    #[test]
    fn test_range_for_ninety_minute_service() {
        let range = compute_selectable_time_range(Some(day()), 90, BusinessHours::new(9, 17));
        assert_eq!(range.min_time, Some(at(9, 0)));
        assert_eq!(range.max_time, Some(at(15, 30)));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_unselected_date_is_unconstrained() {
        let range = compute_selectable_time_range(None, 30, BusinessHours::new(9, 17));
        assert_eq!(range, SelectableRange { min_time: None, max_time: None });
        assert!(range.is_unconstrained());
        assert!(!range.is_empty());
    }

    #[test]
    fn test_service_longer_than_window_inverts_range() {
        let range = compute_selectable_time_range(Some(day()), 9 * 60, BusinessHours::new(9, 17));
        assert_eq!(range.min_time, Some(at(9, 0)));
        assert_eq!(range.max_time, Some(at(8, 0)));
        assert!(range.is_empty());
    }

    #[test]
    fn test_service_filling_window_exactly() {
        let range = compute_selectable_time_range(Some(day()), 8 * 60, BusinessHours::new(9, 17));
        assert_eq!(range.min_time, range.max_time);
        assert!(!range.is_empty());
        let slots = day_slots(day(), 8 * 60, BusinessHours::new(9, 17), 15, &[]);
        assert_eq!(slots.len(), 1);
        assert!(slots[0].is_available);
    }

    #[test]
    fn test_day_slots_grid() {
        let existing = vec![Interval::from_duration(at(10, 0), 60)];
        let slots = day_slots(day(), 30, BusinessHours::new(9, 17), 30, &existing);

        // 09:00 .. 16:30 inclusive
        assert_eq!(slots.len(), 16);
        assert_eq!(slots.first().unwrap().start_time, at(9, 0));
        assert_eq!(slots.last().unwrap().start_time, at(16, 30));
        assert_eq!(slots[0].end_time, at(9, 30));

        let unavailable: Vec<_> = slots
            .iter()
            .filter(|s| !s.is_available)
            .map(|s| s.start_time)
            .collect();
        assert_eq!(unavailable, vec![at(10, 0), at(10, 30)]);
    }

    #[test]
    fn test_day_slots_empty_for_inverted_range() {
        assert!(day_slots(day(), 10 * 60, BusinessHours::new(9, 17), 15, &[]).is_empty());
    }

    #[test]
    fn test_slots_respect_staff_hours() {
        use crate::scheduling::{StaffHours, WorkingWindow};
        use chrono::NaiveTime;

        let window = WorkingWindow::new(
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        );
        let rules = SlotRules::lenient(BusinessHours::new(9, 17))
            .with_staff_hours(StaffHours::Within(window));
        let open: Vec<_> = day_slots_with_rules(day(), 60, &rules, 60, &[])
            .into_iter()
            .filter(|s| s.is_available)
            .map(|s| s.start_time)
            .collect();
        assert_eq!(open, vec![at(12, 0), at(13, 0)]);
    }

    #[test]
    fn test_zero_step_does_not_loop_forever() {
        let slots = day_slots(day(), 60, BusinessHours::new(9, 10), 0, &[]);
        assert_eq!(slots.len(), 1);
    }
}
