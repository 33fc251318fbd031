// --- File: crates/bookable_scheduling/src/format.rs ---
//! Presentation helpers for prices, dates and durations.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Format a price held in the smallest currency unit, e.g. `3500` → `"R$ 35,00"`.
///
/// Uses a decimal comma, matching the shop's locale.
pub fn format_price_cents(cents: i64, currency_symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{sign}{currency_symbol} {},{:02}", cents / 100, cents % 100)
}

/// `"09:00"`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `"28/02/2026"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `"28/02/2026 14:30"`.
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format("%d/%m/%Y %H:%M").to_string()
}

/// `"45 min"`, `"1h"`, `"1h 30min"`.
pub fn format_duration_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, rest) => format!("{rest} min"),
        (hours, 0) => format!("{hours}h"),
        (hours, rest) => format!("{hours}h {rest}min"),
    }
}

/// The time an appointment starting at `start` finishes.
pub fn finish_time(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
    start + Duration::minutes(i64::from(duration_minutes))
}
