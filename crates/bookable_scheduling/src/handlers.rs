// File: crates/bookable_scheduling/src/handlers.rs
use crate::format::format_time;
use crate::service::{AvailabilityService, DayAvailability};
use crate::window::{bookable_dates, is_date_bookable, BOOKING_WINDOW_DAYS};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use bookable_common::services::{BoxedError, SchedulingStore};
use bookable_common::HttpStatusCode;
use bookable_config::AppConfig;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// Define shared state needed by scheduling handlers
#[derive(Clone)]
pub struct SchedulingState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn SchedulingStore<Error = BoxedError>>,
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-08-10"))]
    pub date: String,

    /// The barber to compute availability for
    pub barber_id: Uuid,

    /// Comma-separated service ids making up the booking
    #[cfg_attr(
        feature = "openapi",
        schema(example = "9f3c7d1a-0b64-4aa9-9d5e-7a2f9f0b1c23")
    )]
    pub service_ids: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SlotResponse {
    #[cfg_attr(feature = "openapi", schema(example = "09:20"))]
    pub start: String,
    pub available: bool,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AvailabilityResponse {
    #[cfg_attr(feature = "openapi", schema(example = "2026-08-10"))]
    pub date: String,
    /// False when the shop is closed or the date is not a working day
    pub open: bool,
    pub closed_message: Option<String>,
    pub slots: Vec<SlotResponse>,
}

impl From<DayAvailability> for AvailabilityResponse {
    fn from(availability: DayAvailability) -> Self {
        Self {
            date: availability.date.format("%Y-%m-%d").to_string(),
            open: availability.open,
            closed_message: availability.closed_message,
            slots: availability
                .slots
                .into_iter()
                .map(|slot| SlotResponse {
                    start: format_time(slot.start),
                    available: slot.available,
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookableDateResponse {
    #[cfg_attr(feature = "openapi", schema(example = "2026-08-10"))]
    pub value: String,
    #[cfg_attr(feature = "openapi", schema(example = "Monday, 10 August"))]
    pub label: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookableDatesResponse {
    pub dates: Vec<BookableDateResponse>,
}

/// Handler to get the bookable slots of one barber on one day.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<SchedulingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, String)> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })?;
    let service_ids = parse_service_ids(&query.service_ids)?;

    let time_zone = resolve_time_zone(&state.config);
    let now = Utc::now().with_timezone(&time_zone).naive_local();

    if !is_date_bookable(date, now.date()) {
        let err_msg = format!("date must be within {BOOKING_WINDOW_DAYS} days from today");
        info!("{}", err_msg);
        return Err((StatusCode::BAD_REQUEST, err_msg));
    }

    let service = AvailabilityService::new(state.store.clone());
    let availability = service
        .availability_for_day(date, query.barber_id, &service_ids, now)
        .await
        .map_err(|err| {
            (
                StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                err.to_string(),
            )
        })?;

    Ok(Json(AvailabilityResponse::from(availability)))
}

/// Handler to get the dates currently inside the booking window.
#[axum::debug_handler]
pub async fn get_bookable_dates_handler(
    State(state): State<Arc<SchedulingState>>,
) -> Json<BookableDatesResponse> {
    let time_zone = resolve_time_zone(&state.config);
    let today = Utc::now().with_timezone(&time_zone).date_naive();
    Json(BookableDatesResponse {
        dates: bookable_dates(today)
            .into_iter()
            .map(|date| BookableDateResponse {
                value: date.date.format("%Y-%m-%d").to_string(),
                label: date.label,
            })
            .collect(),
    })
}

fn parse_service_ids(raw: &str) -> Result<Vec<Uuid>, (StatusCode, String)> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Uuid::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "service_ids must be comma-separated UUIDs".to_string(),
            )
        })?;
    if ids.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "at least one service id is required".to_string(),
        ));
    }
    Ok(ids)
}

fn resolve_time_zone(config: &AppConfig) -> Tz {
    config
        .scheduling
        .time_zone
        .as_deref()
        .and_then(|name| Tz::from_str(name).ok())
        .unwrap_or(Tz::UTC)
}
