// --- File: crates/bookable_scheduling/src/watch.rs ---
//! Recompute-on-change task.
//!
//! The store pushes invalidation events whenever occupancy or configuration
//! rows change. This task subscribes to that feed and, on every event, re-runs
//! the whole availability pipeline for the watched query, publishing the fresh
//! result over a `watch` channel. Consumers only ever read the latest value;
//! no partial update is merged into a previous result.

use crate::service::{AvailabilityService, DayAvailability};
use bookable_common::notify::ChangeFeed;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// The availability query a watch task keeps fresh.
#[derive(Debug, Clone)]
pub struct WatchedQuery {
    pub date: NaiveDate,
    pub barber_id: Uuid,
    pub service_ids: Vec<Uuid>,
}

/// Spawn a task that keeps the availability of one query current.
///
/// The receiver starts on a closed placeholder and flips to the first real
/// computation as soon as it lands; afterwards every store change triggers a
/// full recompute. The task ends when the feed closes or the last receiver is
/// dropped.
pub fn spawn_availability_watch(
    service: AvailabilityService,
    feed: &ChangeFeed,
    query: WatchedQuery,
    time_zone: Tz,
) -> (watch::Receiver<DayAvailability>, JoinHandle<()>) {
    let (sender, receiver) = watch::channel(DayAvailability {
        date: query.date,
        open: false,
        closed_message: None,
        slots: Vec::new(),
    });
    let events = feed.subscribe();
    let handle = tokio::spawn(run_availability_watch(
        service, events, query, time_zone, sender,
    ));
    (receiver, handle)
}

async fn run_availability_watch(
    service: AvailabilityService,
    mut events: broadcast::Receiver<bookable_common::notify::ChangeEvent>,
    query: WatchedQuery,
    time_zone: Tz,
    sender: watch::Sender<DayAvailability>,
) {
    refresh(&service, &query, time_zone, &sender).await;
    loop {
        match events.recv().await {
            Ok(event) => {
                debug!(table = ?event.table, date = %query.date, "store change, recomputing availability");
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                // Missed events don't matter: one recompute covers them all.
                warn!(missed, "change feed lagged, recomputing availability");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
        if sender.is_closed() {
            break;
        }
        refresh(&service, &query, time_zone, &sender).await;
    }
}

async fn refresh(
    service: &AvailabilityService,
    query: &WatchedQuery,
    time_zone: Tz,
    sender: &watch::Sender<DayAvailability>,
) {
    let now = Utc::now().with_timezone(&time_zone).naive_local();
    match service
        .availability_for_day(query.date, query.barber_id, &query.service_ids, now)
        .await
    {
        Ok(availability) => {
            let _ = sender.send(availability);
        }
        Err(err) => {
            warn!(error = %err, date = %query.date, "availability recompute failed, keeping last published result");
        }
    }
}
