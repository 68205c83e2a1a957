//! Per-table render artifacts
//!
//! Every screen starts from the same derivation: server snapshot ->
//! [`TableState`] -> layout code and lock decision.

use shared::models::{SeatStatus, TableSnapshot, TableType};
use shared::seat::{
    LayoutCode, LockDecision, SeatPosition, TableState, encode_layout, resolve_lock, seat_name,
};

/// One table as a screen sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub state: TableState,
    pub layout: LayoutCode,
    pub lock: LockDecision,
}

impl TableView {
    pub fn from_snapshot(snapshot: &TableSnapshot) -> Self {
        let state = TableState::from_snapshot(snapshot);
        let layout = encode_layout(&state);
        let lock = resolve_lock(&state);
        Self { state, layout, lock }
    }

    pub fn table_id(&self) -> i64 {
        self.state.table_id()
    }

    pub fn table_type(&self) -> TableType {
        self.state.table_type()
    }

    pub fn status(&self, position: SeatPosition) -> SeatStatus {
        self.state.seat(position).status
    }

    /// Someone is physically seated (an `ITEM` hold does not count).
    pub fn has_person(&self) -> bool {
        self.state
            .seats()
            .any(|(_, seat)| seat.status == SeatStatus::Occupied)
    }

    pub fn seat_name(&self, position: SeatPosition) -> String {
        seat_name(self.table_id(), position)
    }
}

/// All tables in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBoard {
    views: Vec<TableView>,
}

impl TableBoard {
    pub fn from_snapshots(snapshots: &[TableSnapshot]) -> Self {
        Self {
            views: snapshots.iter().map(TableView::from_snapshot).collect(),
        }
    }

    pub fn get(&self, table_id: i64) -> Option<&TableView> {
        self.views.iter().find(|v| v.table_id() == table_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableView> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Resolve a widget click to a table and seat.
    pub fn locate(&self, table_id: i64, seat_id: i64) -> Option<(&TableView, SeatPosition)> {
        let view = self.get(table_id)?;
        let position = SeatPosition::from_seat_id(seat_id)?;
        Some((view, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{SeatRecord, TableContent};

    fn snapshot(table_id: i64, kind: &str, seats: &[(i64, i64, &str)]) -> TableSnapshot {
        TableSnapshot {
            table_id,
            content: TableContent {
                timestamp: None,
                table_type: Some(kind.to_string()),
                table_status: seats
                    .iter()
                    .map(|&(row, col, status)| SeatRecord {
                        row: Some(row),
                        col: Some(col),
                        seat_status: Some(status.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_end_to_end_single_occupant() {
        let view = TableView::from_snapshot(&snapshot(2, "PERSONAL", &[(1, 1, "OCCUPIED")]));
        assert_eq!(view.layout.code, "/UA/AA/__/");
        assert_eq!(view.layout.labels, ["/", "B1", "B2", "/", "B3", "B4"]);
        assert_eq!(view.lock, LockDecision::Diagonal(SeatPosition::ALL[3]));
        assert!(view.has_person());
    }

    #[test]
    fn test_board_lookup() {
        let board = TableBoard::from_snapshots(&[
            snapshot(1, "PERSONAL", &[]),
            snapshot(2, "GROUP", &[(2, 2, "ITEM")]),
        ]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.get(2).map(|v| v.lock), Some(LockDecision::Full));
        assert!(!board.get(2).unwrap().has_person());

        let (view, position) = board.locate(2, 4).unwrap();
        assert_eq!(view.status(position), SeatStatus::Item);
        assert_eq!(view.seat_name(position), "B4");
        assert!(board.locate(3, 1).is_none());
        assert!(board.locate(1, 5).is_none());
    }
}
