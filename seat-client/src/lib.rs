//! Seat Client - HTTP client for the seat server
//!
//! Every kiosk screen talks to the server through [`SeatRepository`].
//! [`HttpSeatRepository`] is the network implementation;
//! [`MemorySeatRepository`] keeps everything in process for tests and demos.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod repository;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpSeatRepository;
pub use memory::MemorySeatRepository;
pub use repository::SeatRepository;

// Re-export shared types for convenience
pub use shared::client::{
    CancelRequest, CancelSeatBody, CancelTableBody, FaceUploadResponse, UpdateTableRequest,
    UsageCheckResponse, UsageEntry,
};
pub use shared::models::TableSnapshot;
