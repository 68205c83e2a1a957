//! Group reservation
//!
//! A group books one whole empty table. Members take turns: pick a seat,
//! identify by face, repeat until the chosen group size is reached. The
//! finished table is written in a single update.

use shared::client::UpdateTableRequest;
use shared::models::{SeatStatus, TableSnapshot, TableType};
use shared::seat::{SeatOccupant, SeatPosition, build_table_state};
use shared::time::GroupSize;

use super::SeatPick;
use crate::board::TableBoard;

#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    /// No usable identity came back from face recognition
    IdentificationFailed,
    /// The user already holds a seat on some table
    AlreadySeatedElsewhere,
    /// The user is already part of this group
    AlreadyRegistered,
    /// Face scanned before a seat was picked
    NoSeatSelected,
    /// Member recorded, more to come
    NextSeat { remaining: u8 },
    /// Last member recorded; send this update
    Complete(UpdateTableRequest),
    /// Every member is already registered; nothing more to record
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSession {
    group_size: GroupSize,
    end_time: String,
    board: TableBoard,
    active_table: Option<i64>,
    selected: Option<SeatPosition>,
    draft: [Option<String>; 4],
    registered: u8,
}

impl GroupSession {
    pub fn new(group_size: GroupSize, end_time: impl Into<String>, tables: &[TableSnapshot]) -> Self {
        Self {
            group_size,
            end_time: end_time.into(),
            board: TableBoard::from_snapshots(tables),
            active_table: None,
            selected: None,
            draft: Default::default(),
            registered: 0,
        }
    }

    pub fn group_size(&self) -> GroupSize {
        self.group_size
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn board(&self) -> &TableBoard {
        &self.board
    }

    /// Table the group has committed to, once a seat was picked.
    pub fn active_table(&self) -> Option<i64> {
        self.active_table
    }

    pub fn selected(&self) -> Option<SeatPosition> {
        self.selected
    }

    pub fn registered(&self) -> u8 {
        self.registered
    }

    pub fn remaining(&self) -> u8 {
        self.group_size.count().saturating_sub(self.registered)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// User recorded on a seat of the draft table.
    pub fn member_at(&self, position: SeatPosition) -> Option<&str> {
        self.draft[position.index()].as_deref()
    }

    fn table_open(&self, table_id: i64) -> bool {
        self.active_table.is_none_or(|active| active == table_id)
    }

    pub fn is_enabled(&self, table_id: i64, seat_id: i64) -> bool {
        if self.is_complete() {
            return false;
        }
        self.board.locate(table_id, seat_id).is_some_and(|(view, position)| {
            !view.has_person()
                && self.table_open(table_id)
                && self.draft[position.index()].is_none()
                && view.status(position) == SeatStatus::Empty
        })
    }

    /// Tap on a seat. The first successful pick pins the group to that table.
    /// A complete group accepts no more picks.
    pub fn select(mut self, table_id: i64, seat_id: i64) -> (Self, SeatPick) {
        if self.is_complete() {
            return (self, SeatPick::Disabled);
        }
        let Some((view, position)) = self.board.locate(table_id, seat_id) else {
            return (self, SeatPick::Disabled);
        };
        if view.has_person() || !self.table_open(table_id) {
            return (self, SeatPick::Disabled);
        }
        if self.draft[position.index()].is_some() {
            return (self, SeatPick::AlreadyRegistered);
        }

        let pick = match view.status(position) {
            SeatStatus::Occupied => SeatPick::Occupied,
            SeatStatus::Item => SeatPick::Reserved,
            SeatStatus::Empty => SeatPick::Selected {
                seat_name: view.seat_name(position),
            },
        };
        if matches!(pick, SeatPick::Selected { .. }) {
            self.active_table = Some(table_id);
            self.selected = Some(position);
        }
        (self, pick)
    }

    /// Drop the current pick. The table stays pinned once a member is
    /// registered on it.
    pub fn cancel_selection(mut self) -> Self {
        self.selected = None;
        if self.registered == 0 {
            self.active_table = None;
        }
        self
    }

    /// Record `user_id` on the selected seat.
    ///
    /// `fresh` is the table list fetched right after recognition; it is used
    /// for the already-seated check and replaces the board.
    pub fn register(
        mut self,
        user_id: &str,
        fresh: &[TableSnapshot],
        timestamp: i64,
    ) -> (Self, GroupOutcome) {
        if self.is_complete() {
            return (self, GroupOutcome::Finished);
        }
        if user_id.trim().is_empty() {
            return (self, GroupOutcome::IdentificationFailed);
        }
        if fresh.iter().any(|t| t.content.contains_user(user_id)) {
            return (self, GroupOutcome::AlreadySeatedElsewhere);
        }
        if self.draft.iter().flatten().any(|member| member == user_id) {
            return (self, GroupOutcome::AlreadyRegistered);
        }
        let (Some(table_id), Some(position)) = (self.active_table, self.selected) else {
            return (self, GroupOutcome::NoSeatSelected);
        };

        self.board = TableBoard::from_snapshots(fresh);
        self.draft[position.index()] = Some(user_id.to_string());
        self.registered += 1;
        self.selected = None;
        tracing::debug!(
            table_id,
            seat_id = position.seat_id(),
            registered = self.registered,
            "Group member registered"
        );

        if !self.is_complete() {
            let remaining = self.remaining();
            return (self, GroupOutcome::NextSeat { remaining });
        }

        let request = self.draft_request(table_id, timestamp);
        (self, GroupOutcome::Complete(request))
    }

    /// The draft table: registered seats `OCCUPIED`, the rest `EMPTY`.
    fn draft_request(&self, table_id: i64, timestamp: i64) -> UpdateTableRequest {
        let draft = SeatPosition::ALL.into_iter().fold(
            build_table_state(table_id, TableType::Group, &[]),
            |table, position| match &self.draft[position.index()] {
                Some(member) => table.with_seat(
                    position,
                    SeatOccupant {
                        status: SeatStatus::Occupied,
                        occupant_user_id: Some(member.clone()),
                        end_time: Some(self.end_time.clone()),
                    },
                ),
                None => table,
            },
        );
        UpdateTableRequest {
            table_id,
            table_content: draft.to_content(timestamp),
        }
    }
}
