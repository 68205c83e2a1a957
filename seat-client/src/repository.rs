//! Seat server repository trait

use async_trait::async_trait;
use shared::client::{CancelRequest, FaceUploadResponse, UpdateTableRequest, UsageCheckResponse};
use shared::models::TableSnapshot;

use crate::ClientResult;

/// Everything the kiosk asks of the seat server.
///
/// One call per method, no retries; screens decide what a failure means.
#[async_trait]
pub trait SeatRepository: Send + Sync {
    /// Current state of every table.
    async fn fetch_tables(&self) -> ClientResult<Vec<TableSnapshot>>;

    /// Replace the content of one table.
    async fn update_table(&self, request: &UpdateTableRequest) -> ClientResult<()>;

    /// Which seats `user_id` currently holds.
    async fn check_usage(&self, user_id: &str) -> ClientResult<UsageCheckResponse>;

    /// End a personal seat, a whole group table, or one group seat.
    async fn cancel(&self, request: &CancelRequest) -> ClientResult<()>;

    /// Identify the person on a JPEG face crop.
    async fn upload_face(&self, jpeg: Vec<u8>) -> ClientResult<FaceUploadResponse>;
}
