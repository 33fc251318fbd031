// --- File: crates/bookable_scheduling/src/window.rs ---
//! The booking window: how far ahead a customer can book.

use chrono::{Duration, NaiveDate};

/// Days ahead of today (inclusive) a booking may be placed.
pub const BOOKING_WINDOW_DAYS: i64 = 15;

/// A date a customer can pick, with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookableDate {
    pub date: NaiveDate,
    pub label: String,
}

/// Whether `date` falls inside the booking window anchored at `today`.
pub fn is_date_bookable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date <= today + Duration::days(BOOKING_WINDOW_DAYS)
}

/// All dates of the booking window, today first.
pub fn bookable_dates(today: NaiveDate) -> Vec<BookableDate> {
    (0..=BOOKING_WINDOW_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset);
            BookableDate {
                date,
                label: date.format("%A, %-d %B").to_string(),
            }
        })
        .collect()
}
