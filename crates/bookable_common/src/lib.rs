// --- File: crates/bookable_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod notify;   // Store change notification channel
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    configuration_error, external_service_error, not_found, validation_error, BookableError,
    Context, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, DEFAULT_TIMEOUT_SECS};

// Re-export the change feed so callers don't need the module path
pub use notify::{ChangeEvent, ChangeFeed, StoreTable};

// This crate provides common functionality that can be used across the application.
// It includes the shared error taxonomy, store boundary traits, the change feed
// and logging utilities.
