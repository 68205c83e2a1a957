//! Seat layout and lock-policy core
//!
//! Every table is a 2x2 grid of seats. The server hands us a sparse list of
//! seat records per table; [`grid::build_table_state`] normalizes it into a
//! [`TableState`], from which the screens derive:
//!
//! - [`layout::encode_layout`]: the layout string and label list consumed by
//!   the seat-grid widget
//! - [`lock::resolve_lock`]: which empty seats the personal flow may offer
//!
//! Everything here is pure and total.

pub mod grid;
pub mod layout;
pub mod lock;
pub mod sheet;

pub use grid::{SeatOccupant, SeatPosition, TableState, build_table_state};
pub use layout::{LayoutCode, LayoutError, decode_layout_row, encode_layout, seat_name, table_letter};
pub use lock::{LockDecision, resolve_lock, resolve_statuses};
pub use sheet::{LayoutSheet, parse_end_time_map};
