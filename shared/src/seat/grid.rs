//! Seat grid model

use serde::{Deserialize, Serialize};

use crate::models::{SeatRecord, SeatStatus, TableContent, TableSnapshot, TableType};

/// One of the four seats of a table: `row` and `col` are both 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct SeatPosition {
    row: u8,
    col: u8,
}

/// Unchecked wire shape of a [`SeatPosition`]
#[derive(Deserialize)]
struct RawPosition {
    row: i64,
    col: i64,
}

impl TryFrom<RawPosition> for SeatPosition {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
            .ok_or_else(|| format!("seat ({}, {}) is outside the 2x2 grid", raw.row, raw.col))
    }
}

impl SeatPosition {
    /// All positions in index order: (1,1) (1,2) (2,1) (2,2).
    pub const ALL: [SeatPosition; 4] = [
        SeatPosition { row: 1, col: 1 },
        SeatPosition { row: 1, col: 2 },
        SeatPosition { row: 2, col: 1 },
        SeatPosition { row: 2, col: 2 },
    ];

    pub fn new(row: i64, col: i64) -> Option<Self> {
        match (row, col) {
            (1..=2, 1..=2) => Some(Self {
                row: row as u8,
                col: col as u8,
            }),
            _ => None,
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index, `(row-1)*2 + (col-1)`.
    pub fn index(self) -> usize {
        usize::from((self.row - 1) * 2 + (self.col - 1))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Widget seat id (1-based index).
    pub fn seat_id(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_seat_id(seat_id: i64) -> Option<Self> {
        seat_id
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(Self::from_index)
    }

    /// Geometric diagonal opposite: 0<->3, 1<->2.
    pub fn diagonal(self) -> Self {
        Self {
            row: 3 - self.row,
            col: 3 - self.col,
        }
    }
}

/// What currently sits on a seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatOccupant {
    pub status: SeatStatus,
    pub occupant_user_id: Option<String>,
    pub end_time: Option<String>,
}

/// Normalized 2x2 table. Always holds exactly four seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    table_id: i64,
    table_type: TableType,
    seats: [SeatOccupant; 4],
}

impl TableState {
    /// Build from one element of the table list.
    pub fn from_snapshot(snapshot: &TableSnapshot) -> Self {
        build_table_state(
            snapshot.table_id,
            snapshot.content.kind(),
            &snapshot.content.table_status,
        )
    }

    pub fn table_id(&self) -> i64 {
        self.table_id
    }

    pub fn table_type(&self) -> TableType {
        self.table_type
    }

    pub fn seat(&self, position: SeatPosition) -> &SeatOccupant {
        &self.seats[position.index()]
    }

    pub fn seats(&self) -> impl Iterator<Item = (SeatPosition, &SeatOccupant)> {
        SeatPosition::ALL.into_iter().zip(self.seats.iter())
    }

    pub fn statuses(&self) -> [SeatStatus; 4] {
        [
            self.seats[0].status,
            self.seats[1].status,
            self.seats[2].status,
            self.seats[3].status,
        ]
    }

    /// Copy of this table with one seat replaced.
    pub fn with_seat(&self, position: SeatPosition, occupant: SeatOccupant) -> Self {
        let mut next = self.clone();
        next.seats[position.index()] = occupant;
        next
    }

    /// Wire content with all four seats spelled out, in index order.
    pub fn to_content(&self, timestamp: i64) -> TableContent {
        TableContent {
            timestamp: Some(timestamp),
            table_type: Some(self.table_type.as_wire().to_string()),
            table_status: self
                .seats()
                .map(|(p, seat)| {
                    SeatRecord::new(
                        p.row(),
                        p.col(),
                        seat.status,
                        seat.occupant_user_id.clone(),
                        seat.end_time.clone(),
                    )
                })
                .collect(),
        }
    }

    /// Position of the seat recorded for `user_id`, if any.
    pub fn find_user(&self, user_id: &str) -> Option<SeatPosition> {
        self.seats()
            .find(|(_, seat)| seat.occupant_user_id.as_deref() == Some(user_id))
            .map(|(position, _)| position)
    }
}

/// Normalize server seat records into a complete table.
///
/// Records without `row`/`col` land on position (1,1). Records whose row or
/// column falls outside 1..=2 are skipped. Later records overwrite earlier
/// ones for the same position.
pub fn build_table_state(table_id: i64, table_type: TableType, records: &[SeatRecord]) -> TableState {
    let mut seats: [SeatOccupant; 4] = Default::default();

    for record in records {
        let row = record.row.unwrap_or(1);
        let col = record.col.unwrap_or(1);
        let Some(position) = SeatPosition::new(row, col) else {
            tracing::debug!(table_id, row, col, "Skipping seat record outside the 2x2 grid");
            continue;
        };

        seats[position.index()] = SeatOccupant {
            status: record.status(),
            occupant_user_id: present(record.user_id.as_deref()),
            end_time: present(record.end_time.as_deref()),
        };
    }

    TableState {
        table_id,
        table_type,
        seats,
    }
}

/// `None`, blank, and the literal `"null"` all mean absent.
fn present(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty() && *v != "null")
        .map(str::to_string)
}
