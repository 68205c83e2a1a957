//! Client-related types shared with the seat server
//!
//! Request and response bodies for every endpoint the kiosk calls. Table
//! payloads themselves live in [`crate::models::seat`].

use serde::{Deserialize, Serialize};

use crate::models::{TableContent, TableType};

// =============================================================================
// Table update
// =============================================================================

/// `POST /updateTable` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTableRequest {
    #[serde(rename = "tableId")]
    pub table_id: i64,
    #[serde(rename = "tableContent")]
    pub table_content: TableContent,
}

// =============================================================================
// Usage check
// =============================================================================

/// `GET /checkUserUsage?user_id=` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageCheckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub msg: String,
    #[serde(rename = "usageList", default)]
    pub usage_list: Vec<UsageEntry>,
}

/// A seat or table the user currently holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    #[serde(rename = "tableId", default = "unknown_id")]
    pub table_id: i64,
    #[serde(rename = "seatId", default = "unknown_id")]
    pub seat_id: i64,
    /// `PERSONAL`, `GROUP` or `NONE`
    #[serde(rename = "type", default = "personal_kind")]
    pub kind: String,
}

fn unknown_id() -> i64 {
    -1
}

fn personal_kind() -> String {
    TableType::Personal.as_wire().to_string()
}

// =============================================================================
// Cancellation
// =============================================================================

/// Body for cancelling one seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSeatBody {
    /// Omitted when ending from the manual screen; the server resolves the
    /// occupant from the seat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "tableId")]
    pub table_id: i64,
    #[serde(rename = "seatId")]
    pub seat_id: i64,
}

/// Body for ending a whole group table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelTableBody {
    #[serde(rename = "tableId")]
    pub table_id: i64,
}

/// A cancellation call; serializes as the bare body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CancelRequest {
    Personal(CancelSeatBody),
    GroupAll(CancelTableBody),
    GroupSingle(CancelSeatBody),
}

impl CancelRequest {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Personal(_) => "cancelPersonal",
            Self::GroupAll(_) => "cancelGroupAll",
            Self::GroupSingle(_) => "cancelGroupSingle",
        }
    }

    pub fn table_id(&self) -> i64 {
        match self {
            Self::Personal(body) | Self::GroupSingle(body) => body.table_id,
            Self::GroupAll(body) => body.table_id,
        }
    }
}

// =============================================================================
// Face identification
// =============================================================================

/// `POST /uploadFace` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceUploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub is_new_person: bool,
    #[serde(default)]
    pub is_malicious: bool,
    #[serde(default)]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_bodies() {
        let personal = CancelRequest::Personal(CancelSeatBody {
            user_id: Some("u-1".into()),
            table_id: 2,
            seat_id: 3,
        });
        assert_eq!(personal.path(), "cancelPersonal");
        assert_eq!(
            serde_json::to_value(&personal).unwrap(),
            serde_json::json!({"user_id": "u-1", "tableId": 2, "seatId": 3})
        );

        let single = CancelRequest::GroupSingle(CancelSeatBody {
            user_id: None,
            table_id: 4,
            seat_id: 1,
        });
        assert_eq!(
            serde_json::to_value(&single).unwrap(),
            serde_json::json!({"tableId": 4, "seatId": 1})
        );

        let all = CancelRequest::GroupAll(CancelTableBody { table_id: 5 });
        assert_eq!(all.path(), "cancelGroupAll");
        assert_eq!(all.table_id(), 5);
        assert_eq!(serde_json::to_value(&all).unwrap(), serde_json::json!({"tableId": 5}));
    }

    #[test]
    fn test_usage_response_defaults() {
        let resp: UsageCheckResponse =
            serde_json::from_str(r#"{"success":true,"usageList":[{"tableId":3}]}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.msg, "");
        assert_eq!(resp.usage_list[0].table_id, 3);
        assert_eq!(resp.usage_list[0].seat_id, -1);
        assert_eq!(resp.usage_list[0].kind, "PERSONAL");
    }

    #[test]
    fn test_face_response_defaults() {
        let resp: FaceUploadResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(!resp.is_malicious);
        assert!(resp.user_id.is_empty());
    }
}
