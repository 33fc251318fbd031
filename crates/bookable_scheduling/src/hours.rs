// --- File: crates/bookable_scheduling/src/hours.rs ---
//! Operating-hours normalization.
//!
//! The store's configuration row is loosely typed: time fields may be absent,
//! may carry a seconds component, and the lunch window may be half-specified.
//! This module turns that raw material into a validated `OperatingHours` value
//! object, and resolves the per-weekday schedule (working days plus optional
//! day-specific overrides) the rest of the pipeline runs against.

use crate::error::SchedulingError;
use bookable_common::services::BusinessConfigRecord;
use chrono::{NaiveTime, Weekday};

/// Canonical default opening time.
pub const DEFAULT_OPENS_AT: &str = "09:00";
/// Canonical default closing time.
pub const DEFAULT_CLOSES_AT: &str = "19:00";
/// Canonical default step between candidate slot start times.
pub const DEFAULT_GRANULARITY_MINUTES: u32 = 20;

const DEFAULT_WORKING_DAYS: [Weekday; 6] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Parse a time-of-day field, accepting `HH:MM` and `HH:MM:SS`.
///
/// A trailing seconds component is stripped, never interpreted: the engine
/// works at minute resolution.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, SchedulingError> {
    let trimmed = raw.trim();
    let hhmm = if trimmed.len() == 8 {
        trimmed.get(..5).unwrap_or(trimmed)
    } else {
        trimmed
    };
    NaiveTime::parse_from_str(hhmm, "%H:%M")
        .map_err(|_| SchedulingError::TimeParse(raw.to_string()))
}

/// Minute of day, 0..1440.
pub(crate) fn minute_of_day(time: NaiveTime) -> u32 {
    use chrono::Timelike;
    time.hour() * 60 + time.minute()
}

/// A validated lunch window, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunchWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Immutable operating-hours configuration for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingHours {
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
    pub lunch: Option<LunchWindow>,
    pub granularity_minutes: u32,
}

/// Raw operating-hours fields as they arrive from the store.
#[derive(Debug, Clone, Default)]
pub struct RawHours {
    pub opens_at: Option<String>,
    pub closes_at: Option<String>,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    pub granularity_minutes: Option<u32>,
}

impl OperatingHours {
    /// Normalize raw fields, substituting the documented defaults for absent
    /// ones. Normalizing an already-normalized configuration is a no-op.
    pub fn from_raw(raw: &RawHours) -> Result<Self, SchedulingError> {
        let opens_at = parse_time_of_day(raw.opens_at.as_deref().unwrap_or(DEFAULT_OPENS_AT))?;
        let closes_at = parse_time_of_day(raw.closes_at.as_deref().unwrap_or(DEFAULT_CLOSES_AT))?;
        let lunch = match (raw.lunch_start.as_deref(), raw.lunch_end.as_deref()) {
            (None, None) => None,
            (Some(start), Some(end)) => Some(LunchWindow {
                start: parse_time_of_day(start)?,
                end: parse_time_of_day(end)?,
            }),
            // A half-specified window is ambiguous; refusing beats guessing.
            _ => {
                return Err(SchedulingError::Configuration(
                    "lunch window requires both a start and an end".to_string(),
                ))
            }
        };
        let granularity_minutes = raw
            .granularity_minutes
            .unwrap_or(DEFAULT_GRANULARITY_MINUTES);
        Self::validated(opens_at, closes_at, lunch, granularity_minutes)
    }

    /// Validate and construct.
    pub fn validated(
        opens_at: NaiveTime,
        closes_at: NaiveTime,
        lunch: Option<LunchWindow>,
        granularity_minutes: u32,
    ) -> Result<Self, SchedulingError> {
        if granularity_minutes == 0 {
            return Err(SchedulingError::Configuration(
                "slot granularity must be positive".to_string(),
            ));
        }
        if opens_at >= closes_at {
            return Err(SchedulingError::Configuration(format!(
                "opening time {opens_at} is not before closing time {closes_at}"
            )));
        }
        if let Some(window) = lunch {
            if window.start >= window.end {
                return Err(SchedulingError::Configuration(format!(
                    "lunch start {} is not before lunch end {}",
                    window.start, window.end
                )));
            }
            if window.start < opens_at || window.end > closes_at {
                return Err(SchedulingError::Configuration(
                    "lunch window extends outside operating hours".to_string(),
                ));
            }
        }
        Ok(Self {
            opens_at,
            closes_at,
            lunch,
            granularity_minutes,
        })
    }
}

/// The resolved weekly schedule: which weekdays are worked, and the operating
/// hours of each.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    base: OperatingHours,
    working_days: [bool; 7],
    overrides: [Option<OperatingHours>; 7],
}

impl WeeklySchedule {
    /// Build the schedule from the raw business configuration row.
    pub fn from_record(record: &BusinessConfigRecord) -> Result<Self, SchedulingError> {
        let base = OperatingHours::from_raw(&RawHours {
            opens_at: record.opens_at.clone(),
            closes_at: record.closes_at.clone(),
            lunch_start: record.lunch_start.clone(),
            lunch_end: record.lunch_end.clone(),
            granularity_minutes: record.slot_interval_minutes,
        })?;

        let mut working_days = [false; 7];
        match &record.working_days {
            Some(days) => {
                for day in days {
                    working_days[day_index(parse_weekday(day)?)] = true;
                }
            }
            None => {
                for day in DEFAULT_WORKING_DAYS {
                    working_days[day_index(day)] = true;
                }
            }
        }

        let mut overrides: [Option<OperatingHours>; 7] = Default::default();
        if record.use_custom_hours.unwrap_or(false) {
            if let Some(custom) = &record.custom_hours {
                for weekday in [
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                    Weekday::Sat,
                    Weekday::Sun,
                ] {
                    if let Some(day_record) = custom.day(weekday) {
                        overrides[day_index(weekday)] = Some(OperatingHours::from_raw(&RawHours {
                            opens_at: Some(day_record.opens_at.clone()),
                            closes_at: Some(day_record.closes_at.clone()),
                            lunch_start: day_record.lunch_start.clone(),
                            lunch_end: day_record.lunch_end.clone(),
                            granularity_minutes: record.slot_interval_minutes,
                        })?);
                    }
                }
            }
        }

        Ok(Self {
            base,
            working_days,
            overrides,
        })
    }

    /// The operating hours of one weekday, or `None` when the shop does not
    /// work that day.
    pub fn resolve_for_weekday(&self, weekday: Weekday) -> Option<&OperatingHours> {
        let idx = day_index(weekday);
        if !self.working_days[idx] {
            return None;
        }
        Some(self.overrides[idx].as_ref().unwrap_or(&self.base))
    }

    /// The base hours, before any per-weekday override.
    pub fn base(&self) -> &OperatingHours {
        &self.base
    }
}

fn day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

fn parse_weekday(raw: &str) -> Result<Weekday, SchedulingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "mon" => Ok(Weekday::Mon),
        "tue" => Ok(Weekday::Tue),
        "wed" => Ok(Weekday::Wed),
        "thu" => Ok(Weekday::Thu),
        "fri" => Ok(Weekday::Fri),
        "sat" => Ok(Weekday::Sat),
        "sun" => Ok(Weekday::Sun),
        other => Err(SchedulingError::Configuration(format!(
            "unknown working day {other:?}"
        ))),
    }
}
