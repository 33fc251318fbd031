// --- File: crates/bookable_scheduling/src/logic.rs ---
//! The availability-slot engine.
//!
//! Given one day's operating hours, the requested service duration and the
//! day's occupied intervals, produce the ordered candidate slots with their
//! availability. Pure and synchronous: `now` is injected, never read from a
//! clock, so identical inputs always produce identical output.
//!
//! Two omission rules shape the candidate set itself, rather than marking
//! slots unavailable: a slot whose service would finish after closing is
//! never emitted, and on the current day slots starting at or before `now`
//! are dropped entirely.

use crate::error::SchedulingError;
use crate::hours::{minute_of_day, OperatingHours};
use crate::occupancy::OccupiedInterval;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A candidate appointment start time and whether it can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSlot {
    pub start: NaiveTime,
    pub available: bool,
}

/// Walk the operating window at granularity steps, emitting every slot where a
/// service of the requested duration finishes at or before closing.
///
/// All slots come out `available`; classification happens in
/// [`compute_available_slots`]. The slot count is fully determined by the
/// window, the granularity and the duration — occupancy never changes it.
pub fn generate_candidate_slots(
    hours: &OperatingHours,
    service_duration_minutes: u32,
) -> Result<Vec<CandidateSlot>, SchedulingError> {
    validate_window(hours)?;
    if service_duration_minutes == 0 {
        return Err(SchedulingError::Validation(
            "service duration must be positive".to_string(),
        ));
    }

    let open = minute_of_day(hours.opens_at);
    let close = minute_of_day(hours.closes_at);
    let step = hours.granularity_minutes;

    let mut slots = Vec::new();
    let mut cursor = open;
    while cursor < close {
        if cursor + service_duration_minutes <= close {
            slots.push(CandidateSlot {
                start: time_from_minute(cursor),
                available: true,
            });
        }
        cursor += step;
    }
    Ok(slots)
}

/// Compute the day's bookable slots.
///
/// Candidates are generated with [`generate_candidate_slots`], then classified:
/// a slot is unavailable when `[start, start + duration)` intersects the lunch
/// window or any occupied interval under half-open semantics. When `day` is
/// `now`'s date, slots starting at or before `now` are removed from the result
/// entirely.
pub fn compute_available_slots(
    day: NaiveDate,
    hours: &OperatingHours,
    service_duration_minutes: u32,
    occupied: &[OccupiedInterval],
    now: NaiveDateTime,
) -> Result<Vec<CandidateSlot>, SchedulingError> {
    for interval in occupied {
        if interval.duration_minutes == 0 {
            return Err(SchedulingError::Validation(
                "occupied interval duration must be positive".to_string(),
            ));
        }
    }

    let candidates = generate_candidate_slots(hours, service_duration_minutes)?;
    let lunch = hours
        .lunch
        .map(|window| (minute_of_day(window.start), minute_of_day(window.end)));
    let same_day = day == now.date();

    let mut slots = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if same_day && day.and_time(candidate.start) <= now {
            continue;
        }
        let slot_start = minute_of_day(candidate.start);
        let slot_end = slot_start + service_duration_minutes;
        let in_lunch = lunch
            .map_or(false, |(start, end)| overlaps(slot_start, slot_end, start, end));
        let conflicts = occupied.iter().any(|interval| {
            let occ_start = minute_of_day(interval.start);
            overlaps(
                slot_start,
                slot_end,
                occ_start,
                occ_start + interval.duration_minutes,
            )
        });
        slots.push(CandidateSlot {
            start: candidate.start,
            available: !in_lunch && !conflicts,
        });
    }
    Ok(slots)
}

/// Half-open interval intersection.
///
/// Touching boundaries do not overlap, and the test is symmetric: it holds for
/// partial overlap in either direction and for full containment either way.
fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && a_end > b_start
}

fn validate_window(hours: &OperatingHours) -> Result<(), SchedulingError> {
    if hours.granularity_minutes == 0 {
        return Err(SchedulingError::Configuration(
            "slot granularity must be positive".to_string(),
        ));
    }
    if hours.opens_at >= hours.closes_at {
        return Err(SchedulingError::Configuration(format!(
            "opening time {} is not before closing time {}",
            hours.opens_at, hours.closes_at
        )));
    }
    Ok(())
}

fn time_from_minute(minute: u32) -> NaiveTime {
    // The cursor never leaves the operating window, which NaiveTime bounds.
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
}
