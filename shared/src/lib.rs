//! Shared types for the seat kiosk
//!
//! Wire models for the seat server, request/response bodies, and the pure
//! seat layout and lock-policy core used by every screen.

pub mod client;
pub mod models;
pub mod seat;
pub mod time;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{SeatRecord, SeatStatus, TableContent, TableSnapshot, TableType};
pub use seat::{LayoutCode, LockDecision, SeatPosition, TableState};
