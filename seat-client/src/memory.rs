//! In-process seat repository
//!
//! Holds tables, usage answers and face verdicts in memory and records every
//! write. Table updates are applied to the stored tables, so a later
//! `fetch_tables` sees them.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use shared::client::{CancelRequest, FaceUploadResponse, UpdateTableRequest, UsageCheckResponse};
use shared::models::TableSnapshot;
use tokio::sync::Mutex;

use crate::{ClientError, ClientResult, SeatRepository};

#[derive(Debug, Default)]
struct MemoryState {
    tables: Vec<TableSnapshot>,
    usage: HashMap<String, UsageCheckResponse>,
    faces: VecDeque<FaceUploadResponse>,
    updates: Vec<UpdateTableRequest>,
    cancels: Vec<CancelRequest>,
    unavailable: bool,
}

#[derive(Debug, Default)]
pub struct MemorySeatRepository {
    state: Mutex<MemoryState>,
}

impl MemorySeatRepository {
    pub fn new(tables: Vec<TableSnapshot>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                tables,
                ..Default::default()
            }),
        }
    }

    /// Answer for `check_usage(user_id)`.
    pub async fn set_usage(&self, user_id: impl Into<String>, response: UsageCheckResponse) {
        self.state.lock().await.usage.insert(user_id.into(), response);
    }

    /// Queue the answer for the next `upload_face`.
    pub async fn push_face(&self, response: FaceUploadResponse) {
        self.state.lock().await.faces.push_back(response);
    }

    /// While set, every call fails with a 503.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().await.unavailable = unavailable;
    }

    pub async fn tables(&self) -> Vec<TableSnapshot> {
        self.state.lock().await.tables.clone()
    }

    pub async fn updates(&self) -> Vec<UpdateTableRequest> {
        self.state.lock().await.updates.clone()
    }

    pub async fn cancels(&self) -> Vec<CancelRequest> {
        self.state.lock().await.cancels.clone()
    }
}

fn unavailable() -> ClientError {
    ClientError::Server {
        status: 503,
        body: "seat server unavailable".to_string(),
    }
}

#[async_trait]
impl SeatRepository for MemorySeatRepository {
    async fn fetch_tables(&self) -> ClientResult<Vec<TableSnapshot>> {
        let state = self.state.lock().await;
        if state.unavailable {
            return Err(unavailable());
        }
        Ok(state.tables.clone())
    }

    async fn update_table(&self, request: &UpdateTableRequest) -> ClientResult<()> {
        let mut state = self.state.lock().await;
        if state.unavailable {
            return Err(unavailable());
        }
        match state.tables.iter_mut().find(|t| t.table_id == request.table_id) {
            Some(table) => table.content = request.table_content.clone(),
            None => {
                return Err(ClientError::NotFound(format!("table {}", request.table_id)));
            }
        }
        state.updates.push(request.clone());
        Ok(())
    }

    async fn check_usage(&self, user_id: &str) -> ClientResult<UsageCheckResponse> {
        let state = self.state.lock().await;
        if state.unavailable {
            return Err(unavailable());
        }
        Ok(state.usage.get(user_id).cloned().unwrap_or_else(|| UsageCheckResponse {
            success: true,
            ..Default::default()
        }))
    }

    async fn cancel(&self, request: &CancelRequest) -> ClientResult<()> {
        let mut state = self.state.lock().await;
        if state.unavailable {
            return Err(unavailable());
        }
        state.cancels.push(request.clone());
        Ok(())
    }

    async fn upload_face(&self, _jpeg: Vec<u8>) -> ClientResult<FaceUploadResponse> {
        let mut state = self.state.lock().await;
        if state.unavailable {
            return Err(unavailable());
        }
        Ok(state.faces.pop_front().unwrap_or_default())
    }
}
