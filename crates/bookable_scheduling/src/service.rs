// --- File: crates/bookable_scheduling/src/service.rs ---
//! Availability service: the I/O edge around the pure pipeline.
//!
//! Fetches the raw rows from the store, parses them, collects occupied
//! intervals and runs the slot engine. Every call recomputes from scratch;
//! nothing is cached or patched between invocations.

use crate::hours::WeeklySchedule;
use crate::logic::{compute_available_slots, CandidateSlot};
use crate::occupancy::collect_occupied_intervals;
use bookable_common::services::{BoxedError, SchedulingStore, ServiceRecord};
use bookable_common::{external_service_error, not_found, validation_error, BookableError};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// The computed availability of one barber on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// False when the shop is closed outright or the date is not a working day.
    pub open: bool,
    /// Operator-supplied message shown while the shop is closed.
    pub closed_message: Option<String>,
    pub slots: Vec<CandidateSlot>,
}

impl DayAvailability {
    fn closed(date: NaiveDate, closed_message: Option<String>) -> Self {
        Self {
            date,
            open: false,
            closed_message,
            slots: Vec::new(),
        }
    }
}

/// Computes day availability against a scheduling store.
#[derive(Clone)]
pub struct AvailabilityService {
    store: Arc<dyn SchedulingStore<Error = BoxedError>>,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn SchedulingStore<Error = BoxedError>>) -> Self {
        Self { store }
    }

    /// Compute the bookable slots for `date`, `barber_id` and the selected
    /// services. `now` is injected by the caller, resolved in the shop's
    /// timezone.
    ///
    /// The result is advisory: there is no reservation held against the store,
    /// and a concurrent booking can take a slot between this computation and
    /// the customer confirming. The store's write-time conflict check is the
    /// authority.
    pub async fn availability_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
        service_ids: &[Uuid],
        now: NaiveDateTime,
    ) -> Result<DayAvailability, BookableError> {
        if service_ids.is_empty() {
            return Err(validation_error("at least one service must be selected"));
        }

        let config = self
            .store
            .business_config()
            .await
            .map_err(|e| external_service_error("store", e))?;

        if !config.open.unwrap_or(true) {
            debug!(%date, "shop is closed, skipping slot computation");
            return Ok(DayAvailability::closed(date, config.closed_message.clone()));
        }

        let schedule = WeeklySchedule::from_record(&config)?;
        let Some(hours) = schedule.resolve_for_weekday(date.weekday()) else {
            debug!(%date, weekday = %date.weekday(), "not a working day");
            return Ok(DayAvailability::closed(date, None));
        };

        let selected = self
            .store
            .services_by_id(service_ids)
            .await
            .map_err(|e| external_service_error("store", e))?;
        for id in service_ids {
            if !selected.iter().any(|service| service.id == *id) {
                return Err(not_found(format!("service {id}")));
            }
        }
        let duration = total_duration_minutes(&selected);

        let bookings = self
            .store
            .bookings_for_day(date, barber_id)
            .await
            .map_err(|e| external_service_error("store", e))?;
        let blocks = self
            .store
            .blocks_for_day(date, barber_id)
            .await
            .map_err(|e| external_service_error("store", e))?;

        // Resolve the durations of the services the day's bookings refer to.
        let booked_service_ids: Vec<Uuid> = bookings
            .iter()
            .filter_map(|booking| booking.service_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let booked_services = if booked_service_ids.is_empty() {
            Vec::new()
        } else {
            self.store
                .services_by_id(&booked_service_ids)
                .await
                .map_err(|e| external_service_error("store", e))?
        };
        let durations: HashMap<Uuid, u32> = booked_services
            .iter()
            .map(|service| (service.id, service.duration_minutes))
            .collect();

        let occupied =
            collect_occupied_intervals(&bookings, &blocks, &durations, hours.granularity_minutes)?;
        let slots = compute_available_slots(date, hours, duration, &occupied, now)?;
        debug!(
            %date,
            %barber_id,
            slot_count = slots.len(),
            occupied_count = occupied.len(),
            "computed day availability"
        );

        Ok(DayAvailability {
            date,
            open: true,
            closed_message: None,
            slots,
        })
    }
}

/// Total duration of a multi-service booking.
pub fn total_duration_minutes(services: &[ServiceRecord]) -> u32 {
    services.iter().map(|service| service.duration_minutes).sum()
}
