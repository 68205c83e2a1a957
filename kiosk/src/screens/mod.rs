//! Kiosk screens
//!
//! Each screen is a plain state value. Interaction handlers take the state by
//! value and hand back the next state together with an outcome the UI acts
//! on; no handler performs I/O.

pub mod cancel;
pub mod end;
pub mod group;
pub mod personal;
pub mod usage;

pub use cancel::{CancelChoice, CancelPlan, CancelStep};
pub use end::{EndScreen, EndTarget};
pub use group::{GroupOutcome, GroupSession};
pub use personal::{PersonalOutcome, PersonalSession};
pub use usage::{UsageRow, UsageScreen};

/// Result of tapping a seat on a reservation screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatPick {
    /// Greyed out by the table lock, or not a seat at all
    Disabled,
    /// Someone is sitting there
    Occupied,
    /// Held, reservation pending
    Reserved,
    /// Already taken by a member of the group being registered
    AlreadyRegistered,
    /// Seat is now the current selection
    Selected { seat_name: String },
}
