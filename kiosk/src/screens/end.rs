//! Manual end screen
//!
//! Fallback when the face path cannot resolve a seat. Every taken seat is
//! clickable; the server works out the occupant from the seat, so requests
//! built here carry no user id.

use shared::client::{CancelRequest, CancelSeatBody, CancelTableBody};
use shared::models::{SeatStatus, TableSnapshot, TableType};
use shared::seat::table_letter;

use super::{CancelChoice, CancelStep};
use crate::board::TableBoard;

/// What a click on the end screen opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTarget {
    EmptySeat,
    /// Click outside any known table or seat
    Unknown,
    PersonalEnd { table_id: i64, seat_id: i64 },
    GroupEnd { table_id: i64, seat_id: i64 },
}

impl EndTarget {
    pub fn prompt(self) -> Option<String> {
        match self {
            Self::PersonalEnd { table_id, seat_id } => Some(format!(
                "End usage of seat [{}{}]?",
                table_letter(table_id),
                seat_id
            )),
            Self::GroupEnd { table_id, .. } => Some(format!(
                "End usage of every seat at table {}?",
                table_letter(table_id)
            )),
            Self::EmptySeat | Self::Unknown => None,
        }
    }

    pub fn request(self, choice: CancelChoice) -> CancelStep {
        match (self, choice) {
            (Self::PersonalEnd { table_id, seat_id }, CancelChoice::EndUsage) => {
                CancelStep::Submit(CancelRequest::Personal(CancelSeatBody {
                    user_id: None,
                    table_id,
                    seat_id,
                }))
            }
            (Self::GroupEnd { table_id, .. }, CancelChoice::EndAll) => {
                CancelStep::Submit(CancelRequest::GroupAll(CancelTableBody { table_id }))
            }
            (Self::GroupEnd { table_id, seat_id }, CancelChoice::EndMine) => {
                CancelStep::Submit(CancelRequest::GroupSingle(CancelSeatBody {
                    user_id: None,
                    table_id,
                    seat_id,
                }))
            }
            _ => CancelStep::Stay,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndScreen {
    board: TableBoard,
}

impl EndScreen {
    pub fn new(tables: &[TableSnapshot]) -> Self {
        Self {
            board: TableBoard::from_snapshots(tables),
        }
    }

    pub fn board(&self) -> &TableBoard {
        &self.board
    }

    /// Empty seats are greyed out.
    pub fn is_enabled(&self, table_id: i64, seat_id: i64) -> bool {
        self.board
            .locate(table_id, seat_id)
            .is_some_and(|(view, position)| view.status(position) != SeatStatus::Empty)
    }

    pub fn click(&self, table_id: i64, seat_id: i64) -> EndTarget {
        let Some((view, position)) = self.board.locate(table_id, seat_id) else {
            return EndTarget::Unknown;
        };

        match (view.status(position), view.table_type()) {
            (SeatStatus::Empty, _) => EndTarget::EmptySeat,
            (SeatStatus::Occupied, TableType::Personal) => EndTarget::PersonalEnd { table_id, seat_id },
            // held seats are treated as group seats
            (SeatStatus::Occupied, TableType::Group) | (SeatStatus::Item, _) => {
                EndTarget::GroupEnd { table_id, seat_id }
            }
        }
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

    fn screen() -> EndScreen {
        EndScreen::new(&[
            snapshot(1, "PERSONAL", &[(1, 1, "OCCUPIED"), (2, 1, "ITEM")]),
            snapshot(2, "GROUP", &[(1, 2, "OCCUPIED")]),
        ])
    }

    #[test]
    fn test_click_targets() {
        let s = screen();
        assert_eq!(s.click(1, 1), EndTarget::PersonalEnd { table_id: 1, seat_id: 1 });
        assert_eq!(s.click(1, 3), EndTarget::GroupEnd { table_id: 1, seat_id: 3 });
        assert_eq!(s.click(2, 2), EndTarget::GroupEnd { table_id: 2, seat_id: 2 });
        assert_eq!(s.click(1, 2), EndTarget::EmptySeat);
        assert_eq!(s.click(5, 1), EndTarget::Unknown);
        assert!(s.is_enabled(1, 1));
        assert!(!s.is_enabled(2, 1));
    }

    #[test]
    fn test_requests_carry_no_user() {
        let personal = EndTarget::PersonalEnd { table_id: 1, seat_id: 1 };
        assert!(personal.prompt().unwrap().contains("[A1]"));
        assert_eq!(
            personal.request(CancelChoice::EndUsage),
            CancelStep::Submit(CancelRequest::Personal(CancelSeatBody {
                user_id: None,
                table_id: 1,
                seat_id: 1,
            }))
        );
        assert_eq!(personal.request(CancelChoice::Back), CancelStep::Stay);

        let group = EndTarget::GroupEnd { table_id: 2, seat_id: 2 };
        assert_eq!(
            group.request(CancelChoice::EndAll),
            CancelStep::Submit(CancelRequest::GroupAll(CancelTableBody { table_id: 2 }))
        );
        assert_eq!(
            group.request(CancelChoice::EndMine),
            CancelStep::Submit(CancelRequest::GroupSingle(CancelSeatBody {
                user_id: None,
                table_id: 2,
                seat_id: 2,
            }))
        );
        assert_eq!(group.request(CancelChoice::Back), CancelStep::Stay);
        assert_eq!(EndTarget::EmptySeat.request(CancelChoice::EndUsage), CancelStep::Stay);
    }
}
