//! End-to-end tests of the scheduling HTTP surface against the in-memory store.


use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bookable_common::services::BookingStatus;
use bookable_config::AppConfig;
use bookable_scheduling::routes::routes;
use bookable_store::{BoxedSchedulingStore, MemoryStore};
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use fixtures::{block, booking, open_all_week_config, seeded_store};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

fn router(store: Arc<MemoryStore>) -> Router {
    routes(
        Arc::new(AppConfig::default()),
        Arc::new(BoxedSchedulingStore::new(store)),
    )
}

async fn get_availability(
    store: Arc<MemoryStore>,
    date: NaiveDate,
    barber_id: Uuid,
    service_ids: &str,
) -> (StatusCode, serde_json::Value) {
    let uri = format!("/availability?date={date}&barber_id={barber_id}&service_ids={service_ids}");
    let response = router(store)
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

fn slot<'a>(body: &'a serde_json::Value, start: &str) -> &'a serde_json::Value {
    body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .find(|slot| slot["start"] == start)
        .unwrap_or_else(|| panic!("no slot at {start}"))
}

fn tomorrow() -> NaiveDate {
    Utc::now().date_naive() + Duration::days(1)
}

#[tokio::test]
async fn test_bookings_blocks_and_lunch_shape_the_day() {
    let (store, service) = seeded_store();
    let barber_id = Uuid::new_v4();
    let date = tomorrow();

    store.insert_booking(booking(
        date,
        barber_id,
        "10:00:00",
        service.id,
        BookingStatus::Confirmed,
    ));
    store.insert_block(block(date, "15:00:00", "16:00:00"));

    let (status, body) =
        get_availability(store, date, barber_id, &service.id.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["open"], true);

    // The confirmed booking takes 10:00-10:30.
    assert_eq!(slot(&body, "10:00")["available"], false);
    assert_eq!(slot(&body, "10:20")["available"], false);
    // A 30-minute service starting 09:40 would run into it.
    assert_eq!(slot(&body, "09:40")["available"], false);
    assert_eq!(slot(&body, "09:20")["available"], true);
    // Touching the booking's end is fine.
    assert_eq!(slot(&body, "10:40")["available"], true);

    // Lunch 12:00-13:00 under half-open semantics.
    assert_eq!(slot(&body, "11:40")["available"], false);
    assert_eq!(slot(&body, "12:00")["available"], false);
    assert_eq!(slot(&body, "12:40")["available"], false);
    assert_eq!(slot(&body, "13:00")["available"], true);

    // The block holds 15:00-16:00.
    assert_eq!(slot(&body, "14:40")["available"], false);
    assert_eq!(slot(&body, "15:00")["available"], false);
    assert_eq!(slot(&body, "15:40")["available"], false);
    assert_eq!(slot(&body, "16:00")["available"], true);
}

#[tokio::test]
async fn test_cancelled_booking_frees_its_slot() {
    let (store, service) = seeded_store();
    let barber_id = Uuid::new_v4();
    let date = tomorrow();

    let cancelled = booking(
        date,
        barber_id,
        "11:00:00",
        service.id,
        BookingStatus::Confirmed,
    );
    let cancelled_id = cancelled.id;
    store.insert_booking(cancelled);
    assert!(store.cancel_booking(cancelled_id));

    let (status, body) =
        get_availability(store, date, barber_id, &service.id.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slot(&body, "11:00")["available"], true);
}

#[tokio::test]
async fn test_other_barbers_bookings_do_not_interfere() {
    let (store, service) = seeded_store();
    let barber_id = Uuid::new_v4();
    let date = tomorrow();

    store.insert_booking(booking(
        date,
        Uuid::new_v4(),
        "10:00:00",
        service.id,
        BookingStatus::Confirmed,
    ));

    let (_, body) = get_availability(store, date, barber_id, &service.id.to_string()).await;
    assert_eq!(slot(&body, "10:00")["available"], true);
}

#[tokio::test]
async fn test_multi_service_duration_is_summed() {
    let (store, first) = seeded_store();
    let second = fixtures::haircut(40);
    store.insert_service(second.clone());
    let date = tomorrow();

    let (status, body) = get_availability(
        store,
        date,
        Uuid::new_v4(),
        &format!("{},{}", first.id, second.id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 70 minutes across 09:00-19:00 at 20-minute steps.
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), ((600 - 70) / 20 + 1) as usize);
}

#[tokio::test]
async fn test_closed_shop_reports_its_message() {
    let (store, service) = seeded_store();
    let mut config = open_all_week_config();
    config.open = Some(false);
    config.closed_message = Some("Closed for renovation".to_string());
    store.set_business_config(config);

    let (status, body) =
        get_availability(store, tomorrow(), Uuid::new_v4(), &service.id.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["open"], false);
    assert_eq!(body["closed_message"], "Closed for renovation");
    assert!(body["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_working_day_yields_no_slots() {
    let (store, service) = seeded_store();
    let mut config = open_all_week_config();
    config.working_days = Some(vec!["mon".to_string()]);
    store.set_business_config(config);

    // The nearest non-Monday inside the booking window.
    let mut date = tomorrow();
    while date.weekday() == Weekday::Mon {
        date = date + Duration::days(1);
    }

    let (status, body) =
        get_availability(store, date, Uuid::new_v4(), &service.id.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["open"], false);
    assert!(body["slots"].as_array().unwrap().is_empty());
}
