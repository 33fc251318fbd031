// --- File: crates/bookable_common/src/services.rs ---
//! Service abstractions for the remote scheduling store.
//!
//! This module provides trait definitions for the external managed store the
//! application reads from. These traits allow for dependency injection and easier
//! testing by decoupling the availability pipeline from any specific store
//! implementation. The row types here are *raw wire records*: every field the
//! store may omit is an `Option`, and the scheduling crate is responsible for
//! parsing them into validated values before any computation happens.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use uuid::Uuid;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for read access to the scheduling store.
///
/// This trait defines the queries the availability pipeline needs: the business
/// configuration row, the bookings and manual blocks of one calendar day, and
/// service rows by id. Implementations perform the I/O; the pipeline itself
/// stays pure and synchronous.
pub trait SchedulingStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get the single business configuration row.
    fn business_config(&self) -> BoxFuture<'_, BusinessConfigRecord, Self::Error>;

    /// Get the bookings of one barber on one calendar day.
    ///
    /// Implementations may pre-filter cancelled bookings; consumers must not
    /// rely on it and have to re-check the status themselves.
    fn bookings_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error>;

    /// Get the manual blocks that apply to one barber on one calendar day,
    /// including blocks that are not scoped to any barber.
    fn blocks_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BlockRecord>, Self::Error>;

    /// Get service rows by id. Unknown ids are silently absent from the result.
    fn services_by_id(
        &self,
        service_ids: &[Uuid],
    ) -> BoxFuture<'_, Vec<ServiceRecord>, Self::Error>;
}

impl<S> SchedulingStore for Arc<S>
where
    S: SchedulingStore + ?Sized,
{
    type Error = S::Error;

    fn business_config(&self) -> BoxFuture<'_, BusinessConfigRecord, Self::Error> {
        (**self).business_config()
    }

    fn bookings_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error> {
        (**self).bookings_for_day(date, barber_id)
    }

    fn blocks_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BlockRecord>, Self::Error> {
        (**self).blocks_for_day(date, barber_id)
    }

    fn services_by_id(
        &self,
        service_ids: &[Uuid],
    ) -> BoxFuture<'_, Vec<ServiceRecord>, Self::Error> {
        (**self).services_by_id(service_ids)
    }
}

/// The raw business configuration row.
///
/// Every field is optional on the wire; the scheduling crate substitutes its
/// documented defaults for absent fields and rejects self-contradictory ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessConfigRecord {
    /// Whether the shop is currently accepting bookings at all.
    pub open: Option<bool>,
    /// Message shown to customers while the shop is closed.
    pub closed_message: Option<String>,
    /// Daily opening time, `HH:MM` or `HH:MM:SS`.
    pub opens_at: Option<String>,
    /// Daily closing time, `HH:MM` or `HH:MM:SS`.
    pub closes_at: Option<String>,
    /// Working weekdays as lowercase three-letter names (`mon` .. `sun`).
    pub working_days: Option<Vec<String>>,
    /// Lunch break start, `HH:MM` or `HH:MM:SS`.
    pub lunch_start: Option<String>,
    /// Lunch break end, `HH:MM` or `HH:MM:SS`.
    pub lunch_end: Option<String>,
    /// Step between candidate slot start times, in minutes.
    pub slot_interval_minutes: Option<u32>,
    /// Whether the per-weekday overrides in `custom_hours` apply.
    pub use_custom_hours: Option<bool>,
    /// Per-weekday operating-hour overrides.
    pub custom_hours: Option<CustomHoursRecord>,
}

/// Raw per-weekday operating hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHoursRecord {
    pub opens_at: String,
    pub closes_at: String,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
}

/// Raw per-weekday override table; a `None` day falls back to the base hours.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomHoursRecord {
    pub mon: Option<DayHoursRecord>,
    pub tue: Option<DayHoursRecord>,
    pub wed: Option<DayHoursRecord>,
    pub thu: Option<DayHoursRecord>,
    pub fri: Option<DayHoursRecord>,
    pub sat: Option<DayHoursRecord>,
    pub sun: Option<DayHoursRecord>,
}

impl CustomHoursRecord {
    /// The override for one weekday, if any.
    pub fn day(&self, weekday: Weekday) -> Option<&DayHoursRecord> {
        match weekday {
            Weekday::Mon => self.mon.as_ref(),
            Weekday::Tue => self.tue.as_ref(),
            Weekday::Wed => self.wed.as_ref(),
            Weekday::Thu => self.thu.as_ref(),
            Weekday::Fri => self.fri.as_ref(),
            Weekday::Sat => self.sat.as_ref(),
            Weekday::Sun => self.sun.as_ref(),
        }
    }
}

/// Lifecycle status of a booking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    /// Whether a booking in this status keeps its time slot occupied.
    ///
    /// A cancelled booking frees its slot immediately and unconditionally;
    /// completed and no-show bookings are already in the past.
    pub fn occupies_slot(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// A raw booking row, scoped to one calendar day and one barber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub barber_id: Uuid,
    pub date: NaiveDate,
    /// Start time, `HH:MM` or `HH:MM:SS`.
    pub start_time: String,
    /// The booked service; may dangle if the service row was deleted.
    pub service_id: Option<Uuid>,
    pub status: BookingStatus,
}

/// A raw manual block row: an administrative hold on a time range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRecord {
    pub id: Uuid,
    /// The barber the block applies to; `None` blocks the whole shop.
    pub barber_id: Option<Uuid>,
    pub date: NaiveDate,
    /// Block start, `HH:MM` or `HH:MM:SS`.
    pub start_time: String,
    /// Block end (exclusive), `HH:MM` or `HH:MM:SS`.
    pub end_time: String,
    pub reason: Option<String>,
}

/// A raw service row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: u32,
    /// Price in the smallest currency unit.
    pub price_cents: i64,
    pub active: bool,
}
