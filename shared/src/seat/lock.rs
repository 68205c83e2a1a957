//! Lock-policy resolver for personal reservations
//!
//! A 2x2 table seats strangers only on the diagonal: once one seat is taken,
//! only the seat across from it stays open; two taken seats close the table.

use serde::{Deserialize, Serialize};

use super::grid::{SeatPosition, TableState};
use crate::models::{SeatStatus, TableType};

/// Which empty seats the personal flow may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "allowed", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockDecision {
    /// No seat selectable
    Full,
    /// Only the given seat selectable
    Diagonal(SeatPosition),
    /// Every empty seat selectable
    None,
}

impl LockDecision {
    /// Whether the policy lets `position` be picked. Occupancy of the seat
    /// itself is checked separately by the caller.
    pub fn is_selectable(self, position: SeatPosition) -> bool {
        match self {
            Self::Full => false,
            Self::Diagonal(allowed) => allowed == position,
            Self::None => true,
        }
    }
}

/// Resolve the lock for a table. Group tables are always fully locked.
pub fn resolve_lock(state: &TableState) -> LockDecision {
    let decision = match state.table_type() {
        TableType::Group => LockDecision::Full,
        TableType::Personal => resolve_statuses(&state.statuses()),
    };
    tracing::debug!(table_id = state.table_id(), ?decision, "Resolved table lock");
    decision
}

/// The occupancy part of the policy, for a bare status grid.
pub fn resolve_statuses(statuses: &[SeatStatus; 4]) -> LockDecision {
    let mut taken = SeatPosition::ALL
        .into_iter()
        .filter(|p| statuses[p.index()].is_taken());

    match (taken.next(), taken.next()) {
        (None, _) => LockDecision::None,
        (Some(only), None) => LockDecision::Diagonal(only.diagonal()),
        (Some(_), Some(_)) => LockDecision::Full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatRecord;
    use crate::seat::build_table_state;

    fn table(kind: TableType, seats: &[(i64, i64, &str)]) -> TableState {
        let records: Vec<SeatRecord> = seats
            .iter()
            .map(|&(row, col, status)| SeatRecord {
                row: Some(row),
                col: Some(col),
                seat_status: Some(status.to_string()),
                ..Default::default()
            })
            .collect();
        build_table_state(1, kind, &records)
    }

    #[test]
    fn test_empty_personal_table_is_open() {
        assert_eq!(resolve_lock(&table(TableType::Personal, &[])), LockDecision::None);
    }

    #[test]
    fn test_group_table_always_full() {
        assert_eq!(resolve_lock(&table(TableType::Group, &[])), LockDecision::Full);
        assert_eq!(
            resolve_lock(&table(TableType::Group, &[(1, 1, "OCCUPIED")])),
            LockDecision::Full
        );
    }

    #[test]
    fn test_single_taken_seat_opens_diagonal() {
        let cases = [((1, 1), 3), ((1, 2), 2), ((2, 1), 1), ((2, 2), 0)];
        for ((row, col), allowed) in cases {
            for status in ["OCCUPIED", "ITEM"] {
                let decision = resolve_lock(&table(TableType::Personal, &[(row, col, status)]));
                assert_eq!(
                    decision,
                    LockDecision::Diagonal(SeatPosition::ALL[allowed]),
                    "seat ({row},{col}) {status}"
                );
            }
        }
    }

    #[test]
    fn test_two_or_more_taken_is_full() {
        let two = table(TableType::Personal, &[(1, 1, "OCCUPIED"), (2, 2, "ITEM")]);
        assert_eq!(resolve_lock(&two), LockDecision::Full);
        let three = table(
            TableType::Personal,
            &[(1, 1, "OCCUPIED"), (1, 2, "OCCUPIED"), (2, 1, "ITEM")],
        );
        assert_eq!(resolve_lock(&three), LockDecision::Full);
    }

    #[test]
    fn test_is_selectable() {
        let diagonal = LockDecision::Diagonal(SeatPosition::ALL[3]);
        assert!(diagonal.is_selectable(SeatPosition::ALL[3]));
        assert!(!diagonal.is_selectable(SeatPosition::ALL[1]));
        assert!(!LockDecision::Full.is_selectable(SeatPosition::ALL[0]));
        assert!(LockDecision::None.is_selectable(SeatPosition::ALL[2]));
    }
}
