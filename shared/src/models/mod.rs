//! Data models
//!
//! Shared between the seat client and the kiosk screens.
//! Table ids are `i64`; the server uses `-1` for a missing id.

pub mod seat;

// Re-exports
pub use seat::*;
