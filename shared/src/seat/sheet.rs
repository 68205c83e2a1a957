//! Multi-table layout sheets
//!
//! A sheet is plain text with one table layout string per non-blank line, as
//! bundled with kiosks that run without the table server. Companion end-time
//! files map a seat number or table letter to an `HH:mm` end time.

use std::collections::BTreeMap;

use super::grid::SeatPosition;
use super::layout::{LayoutError, decode_layout_row, table_letter};
use super::lock::{LockDecision, resolve_statuses};
use crate::models::{SeatRecord, SeatStatus, TableContent, TableSnapshot, TableType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSheet {
    tables: Vec<Result<[SeatStatus; 4], LayoutError>>,
}

impl LayoutSheet {
    pub fn parse(text: &str) -> Self {
        let tables = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(decode_layout_row)
            .collect();
        Self { tables }
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Statuses of a table, `None` for unknown or malformed lines.
    pub fn statuses(&self, table_index: usize) -> Option<[SeatStatus; 4]> {
        self.tables.get(table_index)?.as_ref().ok().copied()
    }

    /// Lock for a table. A malformed line is left unlocked.
    pub fn lock_for(&self, table_index: usize) -> Option<LockDecision> {
        let table = self.tables.get(table_index)?;
        Some(match table {
            Ok(statuses) => resolve_statuses(statuses),
            Err(e) => {
                tracing::debug!(table_index, error = %e, "Malformed layout line, leaving table open");
                LockDecision::None
            }
        })
    }

    /// Seats across all decodable tables.
    pub fn seat_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_ok()).count() * 4
    }

    /// The sheet as table snapshots, line `i` becoming table `i + 1`.
    ///
    /// End times are looked up by sheet-wide seat number (`4 * i + seat_id`)
    /// for taken seats; a table letter key marks the table as a group table
    /// and gives every taken seat that end time. Malformed lines become
    /// empty tables so later table ids stay aligned.
    pub fn snapshots(&self, end_times: &BTreeMap<String, String>) -> Vec<TableSnapshot> {
        (0..self.tables.len())
            .map(|index| {
                let table_id = index as i64 + 1;
                let statuses = self.statuses(index).unwrap_or([SeatStatus::Empty; 4]);
                let group_end = end_times.get(&table_letter(table_id).to_string());
                let table_type = if group_end.is_some() {
                    TableType::Group
                } else {
                    TableType::Personal
                };

                let records = SeatPosition::ALL
                    .into_iter()
                    .zip(statuses)
                    .map(|(position, status)| {
                        let seat_number = index * 4 + usize::from(position.seat_id());
                        let end_time = status
                            .is_taken()
                            .then(|| end_times.get(&seat_number.to_string()).or(group_end))
                            .flatten()
                            .cloned();
                        SeatRecord::new(position.row(), position.col(), status, None, end_time)
                    })
                    .collect();

                TableSnapshot {
                    table_id,
                    content: TableContent {
                        timestamp: None,
                        table_type: Some(table_type.as_wire().to_string()),
                        table_status: records,
                    },
                }
            })
            .collect()
    }
}

/// Parse `key: value` lines. The value is everything after the first colon,
/// so `7: 13:30` maps `7` to `13:30`.
pub fn parse_end_time_map(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_uppercase(), value.trim().to_string()))
        })
        .collect()
}
