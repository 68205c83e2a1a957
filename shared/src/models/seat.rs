//! Seat and table models
//!
//! Wire types for the table list served by `GET /all_tables`, plus the two
//! enums every screen reasons about. Parsing is deliberately forgiving: a
//! field of the wrong JSON type degrades to "absent" instead of failing the
//! whole table list.

use serde::{Deserialize, Serialize};

/// Seat status (座位状态)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    /// Free seat
    #[default]
    Empty,
    /// Held by belongings, reservation pending
    Item,
    /// Someone is sitting here
    Occupied,
}

impl SeatStatus {
    /// Parse the server status string; anything unrecognized is `Empty`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ITEM" => Self::Item,
            "OCCUPIED" => Self::Occupied,
            _ => Self::Empty,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Item => "ITEM",
            Self::Occupied => "OCCUPIED",
        }
    }

    /// Character used by the seat-grid widget layout string.
    pub fn render_code(self) -> char {
        match self {
            Self::Empty => 'A',
            Self::Item => 'R',
            Self::Occupied => 'U',
        }
    }

    pub fn from_render_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Empty),
            'R' => Some(Self::Item),
            'U' => Some(Self::Occupied),
            _ => None,
        }
    }

    /// Item or Occupied.
    pub fn is_taken(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Table reservation type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableType {
    #[default]
    Personal,
    Group,
}

impl TableType {
    /// Missing or unknown types are treated as `Personal`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("GROUP") => Self::Group,
            _ => Self::Personal,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Personal => "PERSONAL",
            Self::Group => "GROUP",
        }
    }
}

/// One seat entry of a table's `tableStatus` array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    #[serde(default, deserialize_with = "lenient::int")]
    pub row: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub col: Option<i64>,
    #[serde(rename = "userID", default, deserialize_with = "lenient::string")]
    pub user_id: Option<String>,
    #[serde(rename = "seatStatus", default, deserialize_with = "lenient::string")]
    pub seat_status: Option<String>,
    #[serde(rename = "endTime", default, deserialize_with = "lenient::string")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub empty_count: Option<i64>,
}

impl SeatRecord {
    /// Build a fully specified record for a seat.
    pub fn new(
        row: u8,
        col: u8,
        status: SeatStatus,
        user_id: Option<String>,
        end_time: Option<String>,
    ) -> Self {
        Self {
            row: Some(i64::from(row)),
            col: Some(i64::from(col)),
            user_id,
            seat_status: Some(status.as_wire().to_string()),
            end_time,
            empty_count: None,
        }
    }

    /// Status with the unrecognized-means-empty rule applied.
    pub fn status(&self) -> SeatStatus {
        self.seat_status
            .as_deref()
            .map(SeatStatus::from_wire)
            .unwrap_or_default()
    }
}

/// Table content (`content` object of a table snapshot)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableContent {
    #[serde(default, deserialize_with = "lenient::int")]
    pub timestamp: Option<i64>,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub table_type: Option<String>,
    #[serde(rename = "tableStatus", default, deserialize_with = "lenient::records")]
    pub table_status: Vec<SeatRecord>,
}

impl TableContent {
    pub fn kind(&self) -> TableType {
        TableType::from_wire(self.table_type.as_deref())
    }

    /// True if any seat is `OCCUPIED` (an `ITEM` hold does not count).
    pub fn has_person(&self) -> bool {
        self.table_status
            .iter()
            .any(|r| r.status() == SeatStatus::Occupied)
    }

    /// True if `user_id` is recorded on any seat.
    pub fn contains_user(&self, user_id: &str) -> bool {
        !user_id.is_empty()
            && self
                .table_status
                .iter()
                .any(|r| r.user_id.as_deref() == Some(user_id))
    }
}

/// One element of the `GET /all_tables` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    #[serde(default = "missing_table_id", deserialize_with = "lenient::table_id")]
    pub table_id: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub content: TableContent,
}

fn missing_table_id() -> i64 {
    -1
}

mod lenient {
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    use super::SeatRecord;

    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn table_id<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(int(d)?.unwrap_or(-1))
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn records<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<SeatRecord>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(serde_json::from_value(Value::deserialize(d)?).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_snapshot() {
        let json = r#"{
            "table_id": 2,
            "content": {
                "timestamp": 1746617833,
                "type": "GROUP",
                "tableStatus": [
                    {"row":1,"col":1,"userID":"u-1","seatStatus":"OCCUPIED","endTime":"14:30","empty_count":null},
                    {"row":2,"col":2,"userID":null,"seatStatus":"ITEM","endTime":null}
                ]
            }
        }"#;
        let snap: TableSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.table_id, 2);
        assert_eq!(snap.content.kind(), TableType::Group);
        assert_eq!(snap.content.table_status.len(), 2);
        assert_eq!(snap.content.table_status[0].status(), SeatStatus::Occupied);
        assert_eq!(snap.content.table_status[0].user_id.as_deref(), Some("u-1"));
        assert_eq!(snap.content.table_status[1].status(), SeatStatus::Item);
        assert!(snap.content.has_person());
        assert!(snap.content.contains_user("u-1"));
        assert!(!snap.content.contains_user(""));
    }

    #[test]
    fn test_sparse_and_malformed_fields_degrade() {
        let json = r#"{
            "content": {
                "type": 7,
                "tableStatus": [
                    {"row":"2","col":true,"seatStatus":"SLEEPING"},
                    42,
                    {}
                ]
            }
        }"#;
        let snap: TableSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.table_id, -1);
        assert_eq!(snap.content.kind(), TableType::Personal);
        // the bare number is dropped, the two objects survive
        assert_eq!(snap.content.table_status.len(), 2);
        let first = &snap.content.table_status[0];
        assert_eq!(first.row, Some(2));
        assert_eq!(first.col, None);
        assert_eq!(first.status(), SeatStatus::Empty);
        assert_eq!(snap.content.table_status[1], SeatRecord::default());
    }

    #[test]
    fn test_missing_or_invalid_content() {
        let snap: TableSnapshot = serde_json::from_str(r#"{"table_id":3}"#).unwrap();
        assert_eq!(snap.content, TableContent::default());

        let snap: TableSnapshot =
            serde_json::from_str(r#"{"table_id":3,"content":"oops"}"#).unwrap();
        assert!(snap.content.table_status.is_empty());

        let snap: TableSnapshot =
            serde_json::from_str(r#"{"table_id":3,"content":{"tableStatus":{}}}"#).unwrap();
        assert!(snap.content.table_status.is_empty());
    }

    #[test]
    fn test_record_serializes_with_wire_names() {
        let record = SeatRecord::new(1, 2, SeatStatus::Occupied, Some("u-9".into()), None);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["row"], 1);
        assert_eq!(value["col"], 2);
        assert_eq!(value["userID"], "u-9");
        assert_eq!(value["seatStatus"], "OCCUPIED");
        assert!(value["endTime"].is_null());
        assert!(value["empty_count"].is_null());
    }

    #[test]
    fn test_render_codes() {
        assert_eq!(SeatStatus::from_wire("EMPTY").render_code(), 'A');
        assert_eq!(SeatStatus::from_wire("ITEM").render_code(), 'R');
        assert_eq!(SeatStatus::from_wire("OCCUPIED").render_code(), 'U');
        assert_eq!(SeatStatus::from_wire("occupied"), SeatStatus::Empty);
        assert_eq!(SeatStatus::from_render_code('S'), None);
    }
}
