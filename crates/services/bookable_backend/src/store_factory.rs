// --- File: crates/services/bookable_backend/src/store_factory.rs ---
//! Store handle construction.
//!
//! The store handle is created exactly once at process start and shared by
//! `Arc` from then on; nothing else in the application constructs a client.

use bookable_common::services::{BoxedError, SchedulingStore};
use bookable_common::{configuration_error, BookableError, ChangeFeed};
use bookable_config::AppConfig;
use bookable_store::{BoxedSchedulingStore, MemoryStore, RestStore};
use std::sync::Arc;
use tracing::info;

/// Build the scheduling store the backend runs against.
///
/// With `use_rest_store` set, the managed store's REST interface is used and a
/// missing `[store]` section is a configuration error. Otherwise an empty
/// in-memory store backs the process, which is only useful for local runs.
pub fn build_store(
    config: &AppConfig,
    feed: &ChangeFeed,
) -> Result<Arc<dyn SchedulingStore<Error = BoxedError>>, BookableError> {
    if config.use_rest_store {
        let store_config = config.store.as_ref().ok_or_else(|| {
            configuration_error("store section missing while use_rest_store is set")
        })?;
        let store = RestStore::new(store_config)?;
        info!("✅ REST store initialized at {}", store_config.base_url);
        Ok(Arc::new(BoxedSchedulingStore::new(store)))
    } else {
        info!("ℹ️ No remote store configured, using in-memory store");
        Ok(Arc::new(BoxedSchedulingStore::new(MemoryStore::new(
            feed.clone(),
        ))))
    }
}
