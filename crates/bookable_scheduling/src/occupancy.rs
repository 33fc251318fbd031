// --- File: crates/bookable_scheduling/src/occupancy.rs ---
//! Occupied-interval collection.
//!
//! Two independent sources make a time range unavailable: committed bookings
//! and manual blocks. This module merges both, for one calendar day, into one
//! normalized list of `OccupiedInterval`s the classifier can overlap-test
//! uniformly. Output order carries no meaning; downstream treats it as a set,
//! and intervals are allowed to overlap each other.

use crate::error::SchedulingError;
use crate::hours::parse_time_of_day;
use bookable_common::services::{BlockRecord, BookingRecord};
use chrono::{Duration, NaiveTime};
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

/// Duration assumed for a booking whose service row cannot be resolved.
pub const FALLBACK_SERVICE_DURATION_MINUTES: u32 = 30;

/// A committed appointment or administrative block, `[start, start + duration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedInterval {
    pub start: NaiveTime,
    pub duration_minutes: u32,
}

impl OccupiedInterval {
    pub fn new(start: NaiveTime, duration_minutes: u32) -> Result<Self, SchedulingError> {
        if duration_minutes == 0 {
            return Err(SchedulingError::Validation(
                "occupied interval duration must be positive".to_string(),
            ));
        }
        Ok(Self {
            start,
            duration_minutes,
        })
    }
}

/// Merge booking and block rows into occupied intervals.
///
/// Bookings contribute `[start, start + service duration)`; a booking whose
/// service is unresolved falls back to [`FALLBACK_SERVICE_DURATION_MINUTES`]
/// and is warn-logged so operators can spot the data drift. Cancelled and
/// settled bookings contribute nothing. Blocks longer than one granularity
/// step are subdivided into granularity-sized chunks (last chunk truncated to
/// the remainder) so overlap checks operate on uniform units.
pub fn collect_occupied_intervals(
    bookings: &[BookingRecord],
    blocks: &[BlockRecord],
    service_durations: &HashMap<Uuid, u32>,
    granularity_minutes: u32,
) -> Result<Vec<OccupiedInterval>, SchedulingError> {
    if granularity_minutes == 0 {
        return Err(SchedulingError::Configuration(
            "slot granularity must be positive".to_string(),
        ));
    }

    let mut occupied = Vec::with_capacity(bookings.len() + blocks.len());

    for booking in bookings {
        if !booking.status.occupies_slot() {
            continue;
        }
        let start = parse_time_of_day(&booking.start_time)?;
        let duration = booking
            .service_id
            .and_then(|id| service_durations.get(&id).copied());
        let duration = match duration {
            Some(minutes) => minutes,
            None => {
                warn!(
                    booking_id = %booking.id,
                    fallback_minutes = FALLBACK_SERVICE_DURATION_MINUTES,
                    "booking references an unresolved service, assuming fallback duration"
                );
                FALLBACK_SERVICE_DURATION_MINUTES
            }
        };
        occupied.push(OccupiedInterval::new(start, duration)?);
    }

    for block in blocks {
        let start = parse_time_of_day(&block.start_time)?;
        let end = parse_time_of_day(&block.end_time)?;
        if end <= start {
            return Err(SchedulingError::Validation(format!(
                "block {} ends at or before it starts ({start}..{end})",
                block.id
            )));
        }
        let total = crate::hours::minute_of_day(end) - crate::hours::minute_of_day(start);
        let mut offset = 0;
        while offset < total {
            let chunk = granularity_minutes.min(total - offset);
            occupied.push(OccupiedInterval::new(
                start + Duration::minutes(i64::from(offset)),
                chunk,
            )?);
            offset += chunk;
        }
    }

    Ok(occupied)
}
