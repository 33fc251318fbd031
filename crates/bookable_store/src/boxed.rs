// --- File: crates/bookable_store/src/boxed.rs ---
//! Adapter erasing a store's concrete error type.
//!
//! Trait objects need a single error type; this wrapper converts any
//! `SchedulingStore` into one with `Error = BoxedError` so the application can
//! hold `Arc<dyn SchedulingStore<Error = BoxedError>>` regardless of which
//! implementation backs it.

use bookable_common::services::{
    BlockRecord, BookingRecord, BoxFuture, BoxedError, BusinessConfigRecord, SchedulingStore,
    ServiceRecord,
};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct BoxedSchedulingStore<S> {
    inner: S,
}

impl<S> BoxedSchedulingStore<S>
where
    S: SchedulingStore,
{
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> SchedulingStore for BoxedSchedulingStore<S>
where
    S: SchedulingStore,
{
    type Error = BoxedError;

    fn business_config(&self) -> BoxFuture<'_, BusinessConfigRecord, Self::Error> {
        Box::pin(async move {
            self.inner
                .business_config()
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn bookings_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error> {
        Box::pin(async move {
            self.inner
                .bookings_for_day(date, barber_id)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn blocks_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BlockRecord>, Self::Error> {
        Box::pin(async move {
            self.inner
                .blocks_for_day(date, barber_id)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn services_by_id(
        &self,
        service_ids: &[Uuid],
    ) -> BoxFuture<'_, Vec<ServiceRecord>, Self::Error> {
        let service_ids = service_ids.to_vec();
        Box::pin(async move {
            self.inner
                .services_by_id(&service_ids)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}
