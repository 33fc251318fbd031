// File: crates/bookable_scheduling/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{
    AvailabilityQuery, AvailabilityResponse, BookableDateResponse, BookableDatesResponse,
    SlotResponse,
};

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", example = "2026-08-10", format = "date"),
        ("barber_id" = String, Query, description = "The barber to compute availability for"),
        ("service_ids" = String, Query, description = "Comma-separated service ids making up the booking")
    ),
    responses(
        (status = 200, description = "Bookable slots for the day", body = AvailabilityResponse,
         example = json!({
             "date": "2026-08-10",
             "open": true,
             "closed_message": null,
             "slots": [
                 { "start": "09:00", "available": true },
                 { "start": "09:20", "available": false }
             ]
         })
        ),
        (status = 400, description = "Bad request (invalid date, out-of-window date, malformed service ids)",
         example = json!("date must be within 15 days from today")
        ),
        (status = 404, description = "A requested service does not exist"),
        (status = 502, description = "Store unreachable")
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    get,
    path = "/dates",
    responses(
        (status = 200, description = "Dates inside the booking window", body = BookableDatesResponse,
         example = json!({
             "dates": [
                 { "value": "2026-08-10", "label": "Monday, 10 August" }
             ]
         })
        )
    )
)]
fn doc_get_bookable_dates_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_get_availability_handler, doc_get_bookable_dates_handler),
    components(
        schemas(
            AvailabilityQuery,
            AvailabilityResponse,
            SlotResponse,
            BookableDateResponse,
            BookableDatesResponse
        )
    ),
    tags(
        (name = "scheduling", description = "Availability and booking window API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct SchedulingApiDoc;
