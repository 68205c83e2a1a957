//! Layout encoder for the seat-grid widget
//!
//! The widget takes a layout string where `/` starts a row and each seat is
//! one character (`A` available, `R` reserved, `U` booked, `_` spacer), plus a
//! custom title list with one entry per layout slot. Both formats belong to the
//! widget; they are reproduced exactly.

use thiserror::Error;

use super::grid::{SeatPosition, TableState};
use crate::models::SeatStatus;

/// Separator slot value in the label list.
pub const LABEL_SEPARATOR: &str = "/";

/// Filler row appended after the two seat rows.
const FILLER_ROW: &str = "__";

/// Label slot for each seat index; slots 0 and 3 are separators.
const LABEL_SLOTS: [usize; 4] = [1, 2, 4, 5];

/// Render artifacts for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCode {
    /// e.g. `/UA/AA/__/`
    pub code: String,
    /// e.g. `["/", "B1", "B2", "/", "B3", "B4"]`
    pub labels: [String; 6],
}

impl LayoutCode {
    /// Label of one seat.
    pub fn label(&self, position: SeatPosition) -> &str {
        &self.labels[LABEL_SLOTS[position.index()]]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout needs two seat rows, found {0}")]
    MissingRows(usize),

    #[error("layout row {row} has {len} seats, expected 2")]
    ShortRow { row: usize, len: usize },
}

/// Encode a table for the widget. Total and deterministic.
pub fn encode_layout(state: &TableState) -> LayoutCode {
    let code_of = |p: SeatPosition| state.seat(p).status.render_code();
    let [a, b, c, d] = SeatPosition::ALL;
    let code = format!(
        "/{}{}/{}{}/{}/",
        code_of(a),
        code_of(b),
        code_of(c),
        code_of(d),
        FILLER_ROW
    );

    let mut labels: [String; 6] = Default::default();
    labels[0] = LABEL_SEPARATOR.to_string();
    labels[3] = LABEL_SEPARATOR.to_string();
    for (position, seat) in state.seats() {
        labels[LABEL_SLOTS[position.index()]] = match &seat.end_time {
            Some(end_time) => end_time.clone(),
            None => seat_name(state.table_id(), position),
        };
    }

    LayoutCode { code, labels }
}

/// Parse a layout string back into seat statuses.
///
/// Unknown seat characters read as `Empty`; only the shape is validated.
pub fn decode_layout_row(line: &str) -> Result<[SeatStatus; 4], LayoutError> {
    let rows: Vec<&str> = line.split('/').filter(|p| !p.trim().is_empty()).collect();
    if rows.len() < 2 {
        return Err(LayoutError::MissingRows(rows.len()));
    }

    let mut statuses = [SeatStatus::Empty; 4];
    for (r, row) in rows.iter().take(2).enumerate() {
        let seats: Vec<char> = row.chars().collect();
        if seats.len() < 2 {
            return Err(LayoutError::ShortRow {
                row: r + 1,
                len: seats.len(),
            });
        }
        for c in 0..2 {
            statuses[r * 2 + c] = SeatStatus::from_render_code(seats[c]).unwrap_or_default();
        }
    }
    Ok(statuses)
}

/// Table letter: 1 -> `A`, 2 -> `B`, ... Ids outside 1..=26 give `?`.
pub fn table_letter(table_id: i64) -> char {
    match u8::try_from(table_id) {
        Ok(id @ 1..=26) => char::from(b'A' + id - 1),
        _ => '?',
    }
}

/// Human seat name such as `B3`.
pub fn seat_name(table_id: i64, position: SeatPosition) -> String {
    format!("{}{}", table_letter(table_id), position.seat_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeatRecord, TableType};
    use crate::seat::build_table_state;

    fn occupied(row: i64, col: i64) -> SeatRecord {
        SeatRecord {
            row: Some(row),
            col: Some(col),
            seat_status: Some("OCCUPIED".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_empty_table() {
        let state = build_table_state(1, TableType::Personal, &[]);
        let layout = encode_layout(&state);
        assert_eq!(layout.code, "/AA/AA/__/");
        assert_eq!(layout.labels, ["/", "A1", "A2", "/", "A3", "A4"]);
    }

    #[test]
    fn test_single_occupied_seat() {
        let state = build_table_state(2, TableType::Personal, &[occupied(1, 1)]);
        let layout = encode_layout(&state);
        assert_eq!(layout.code, "/UA/AA/__/");
        assert_eq!(layout.labels, ["/", "B1", "B2", "/", "B3", "B4"]);
    }

    #[test]
    fn test_mixed_statuses_and_end_time_labels() {
        let records = vec![
            SeatRecord {
                end_time: Some("16:40".into()),
                ..occupied(2, 2)
            },
            SeatRecord {
                row: Some(1),
                col: Some(2),
                seat_status: Some("ITEM".into()),
                end_time: Some("null".into()),
                ..Default::default()
            },
        ];
        let state = build_table_state(3, TableType::Group, &records);
        let layout = encode_layout(&state);
        assert_eq!(layout.code, "/AR/AU/__/");
        assert_eq!(layout.labels, ["/", "C1", "C2", "/", "C3", "16:40"]);
        assert_eq!(layout.label(SeatPosition::ALL[3]), "16:40");
        assert_eq!(layout.label(SeatPosition::ALL[0]), "C1");
    }

    #[test]
    fn test_decode_layout_row() {
        assert_eq!(
            decode_layout_row("/UR/AS/__/").unwrap(),
            [SeatStatus::Occupied, SeatStatus::Item, SeatStatus::Empty, SeatStatus::Empty]
        );
        assert_eq!(decode_layout_row("/AA/"), Err(LayoutError::MissingRows(1)));
        assert_eq!(
            decode_layout_row("/AA/A/__/"),
            Err(LayoutError::ShortRow { row: 2, len: 1 })
        );
    }

    #[test]
    fn test_table_letter() {
        assert_eq!(table_letter(1), 'A');
        assert_eq!(table_letter(26), 'Z');
        assert_eq!(table_letter(0), '?');
        assert_eq!(table_letter(27), '?');
        assert_eq!(seat_name(2, SeatPosition::ALL[2]), "B3");
    }
}
