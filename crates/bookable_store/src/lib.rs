// --- File: crates/bookable_store/src/lib.rs ---
//! Store access for Bookable.
//!
//! This crate provides the two `SchedulingStore` implementations the
//! application runs against: `RestStore`, a thin client over the managed
//! relational store's REST interface, and `MemoryStore`, an in-process store
//! for tests and local development. Both are plain constructed handles that
//! are created once at startup and shared by `Arc`; there is no module-level
//! client singleton.

pub mod boxed;
pub mod memory;
pub mod rest;

pub use boxed::BoxedSchedulingStore;
pub use memory::MemoryStore;
pub use rest::{RestStore, RestStoreError};
