//! Personal seat reservation
//!
//! The user is already identified. They pick one seat that the table lock
//! allows, choose a duration, and the seat is written back as `OCCUPIED`
//! with the computed end time.

use chrono::NaiveTime;
use shared::client::UpdateTableRequest;
use shared::models::{SeatStatus, TableSnapshot};
use shared::seat::{SeatOccupant, SeatPosition};
use shared::time::ReservationDuration;

use super::SeatPick;
use crate::board::TableBoard;

#[derive(Debug, Clone, PartialEq)]
pub enum PersonalOutcome {
    /// Send this update to the server
    Submit(UpdateTableRequest),
    /// Confirm pressed without a selected seat
    NothingSelected,
    /// The selected seat is no longer free or allowed; selection dropped
    Rejected(SeatPick),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalSession {
    user_id: String,
    board: TableBoard,
    selected: Option<(i64, SeatPosition)>,
}

impl PersonalSession {
    pub fn new(user_id: impl Into<String>, tables: &[TableSnapshot]) -> Self {
        Self {
            user_id: user_id.into(),
            board: TableBoard::from_snapshots(tables),
            selected: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn board(&self) -> &TableBoard {
        &self.board
    }

    pub fn selected(&self) -> Option<(i64, SeatPosition)> {
        self.selected
    }

    /// Whether the widget should show a seat as selectable.
    pub fn is_enabled(&self, table_id: i64, seat_id: i64) -> bool {
        self.board.locate(table_id, seat_id).is_some_and(|(view, position)| {
            view.status(position) == SeatStatus::Empty && view.lock.is_selectable(position)
        })
    }

    /// Tap on a seat. Only one seat can be selected at a time.
    pub fn select(mut self, table_id: i64, seat_id: i64) -> (Self, SeatPick) {
        let Some((view, position)) = self.board.locate(table_id, seat_id) else {
            return (self, SeatPick::Disabled);
        };

        let pick = match view.status(position) {
            SeatStatus::Occupied => SeatPick::Occupied,
            SeatStatus::Item => SeatPick::Reserved,
            SeatStatus::Empty if !view.lock.is_selectable(position) => SeatPick::Disabled,
            SeatStatus::Empty => SeatPick::Selected {
                seat_name: view.seat_name(position),
            },
        };
        if matches!(pick, SeatPick::Selected { .. }) {
            self.selected = Some((table_id, position));
        }
        (self, pick)
    }

    pub fn cancel_selection(mut self) -> Self {
        self.selected = None;
        self
    }

    /// Replace the board with a newer table list, keeping the selection.
    pub fn refresh(mut self, tables: &[TableSnapshot]) -> Self {
        self.board = TableBoard::from_snapshots(tables);
        self
    }

    /// Duration chosen: build the table update for the selected seat.
    ///
    /// The seat is checked again against the current board, so
    /// [`refresh`](Self::refresh) first to catch seats taken elsewhere.
    pub fn confirm(
        mut self,
        duration: ReservationDuration,
        now: NaiveTime,
        timestamp: i64,
    ) -> (Self, PersonalOutcome) {
        let Some((table_id, position)) = self.selected else {
            return (self, PersonalOutcome::NothingSelected);
        };
        let Some(view) = self.board.get(table_id) else {
            self.selected = None;
            return (self, PersonalOutcome::Rejected(SeatPick::Disabled));
        };

        let blocked = match view.status(position) {
            SeatStatus::Occupied => Some(SeatPick::Occupied),
            SeatStatus::Item => Some(SeatPick::Reserved),
            SeatStatus::Empty if !view.lock.is_selectable(position) => Some(SeatPick::Disabled),
            SeatStatus::Empty => None,
        };
        if let Some(pick) = blocked {
            tracing::info!(table_id, seat_id = position.seat_id(), ?pick, "Selected seat no longer available");
            self.selected = None;
            return (self, PersonalOutcome::Rejected(pick));
        }

        let next = view.state.with_seat(
            position,
            SeatOccupant {
                status: SeatStatus::Occupied,
                occupant_user_id: Some(self.user_id.clone()),
                end_time: Some(duration.end_time_after(now)),
            },
        );
        let request = UpdateTableRequest {
            table_id,
            table_content: next.to_content(timestamp),
        };
        (self, PersonalOutcome::Submit(request))
    }
}
