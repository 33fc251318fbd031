// --- File: crates/bookable_store/src/memory.rs ---
//! In-memory scheduling store.
//!
//! Backs tests and local development. Mutations publish an invalidation event
//! on the change feed, so consumers see the same "rows changed, recompute"
//! signal the remote store would push.

use bookable_common::notify::{ChangeEvent, ChangeFeed, StoreTable};
use bookable_common::services::{
    BlockRecord, BookingRecord, BookingStatus, BoxFuture, BusinessConfigRecord, SchedulingStore,
    ServiceRecord,
};
use chrono::NaiveDate;
use std::convert::Infallible;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct MemoryState {
    business_config: Option<BusinessConfigRecord>,
    bookings: Vec<BookingRecord>,
    blocks: Vec<BlockRecord>,
    services: Vec<ServiceRecord>,
}

/// In-memory `SchedulingStore` implementation.
pub struct MemoryStore {
    state: RwLock<MemoryState>,
    feed: ChangeFeed,
}

impl MemoryStore {
    pub fn new(feed: ChangeFeed) -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
            feed,
        }
    }

    /// The change feed this store publishes invalidation events on.
    pub fn feed(&self) -> &ChangeFeed {
        &self.feed
    }

    /// Replace the business configuration row.
    pub fn set_business_config(&self, record: BusinessConfigRecord) {
        self.write().business_config = Some(record);
        self.feed.publish(ChangeEvent {
            table: StoreTable::BusinessConfig,
        });
    }

    pub fn insert_service(&self, record: ServiceRecord) {
        self.write().services.push(record);
        self.feed.publish(ChangeEvent {
            table: StoreTable::Services,
        });
    }

    pub fn insert_booking(&self, record: BookingRecord) {
        self.write().bookings.push(record);
        self.feed.publish(ChangeEvent {
            table: StoreTable::Bookings,
        });
    }

    /// Mark a booking cancelled. Returns false when the id is unknown.
    pub fn cancel_booking(&self, booking_id: Uuid) -> bool {
        let found = {
            let mut state = self.write();
            match state.bookings.iter_mut().find(|b| b.id == booking_id) {
                Some(booking) => {
                    booking.status = BookingStatus::Cancelled;
                    true
                }
                None => false,
            }
        };
        if found {
            self.feed.publish(ChangeEvent {
                table: StoreTable::Bookings,
            });
        }
        found
    }

    pub fn insert_block(&self, record: BlockRecord) {
        self.write().blocks.push(record);
        self.feed.publish(ChangeEvent {
            table: StoreTable::Blocks,
        });
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MemoryState> {
        self.state.write().expect("memory store lock poisoned")
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryState> {
        self.state.read().expect("memory store lock poisoned")
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(ChangeFeed::default())
    }
}

impl SchedulingStore for MemoryStore {
    type Error = Infallible;

    fn business_config(&self) -> BoxFuture<'_, BusinessConfigRecord, Self::Error> {
        Box::pin(async move {
            // An unseeded store behaves like a store whose row has every field
            // null: downstream normalization substitutes the documented defaults.
            Ok(self.read().business_config.clone().unwrap_or_default())
        })
    }

    fn bookings_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error> {
        Box::pin(async move {
            // Mirrors the remote query: cancelled and settled rows are
            // pre-filtered server-side.
            Ok(self
                .read()
                .bookings
                .iter()
                .filter(|b| {
                    b.date == date && b.barber_id == barber_id && b.status.occupies_slot()
                })
                .cloned()
                .collect())
        })
    }

    fn blocks_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BlockRecord>, Self::Error> {
        Box::pin(async move {
            Ok(self
                .read()
                .blocks
                .iter()
                .filter(|b| b.date == date && b.barber_id.map_or(true, |id| id == barber_id))
                .cloned()
                .collect())
        })
    }

    fn services_by_id(
        &self,
        service_ids: &[Uuid],
    ) -> BoxFuture<'_, Vec<ServiceRecord>, Self::Error> {
        let ids = service_ids.to_vec();
        Box::pin(async move {
            Ok(self
                .read()
                .services
                .iter()
                .filter(|s| ids.contains(&s.id))
                .cloned()
                .collect())
        })
    }
}
