//! Read-only usage board

use std::collections::BTreeMap;

use shared::models::{TableSnapshot, TableType};
use shared::seat::{LayoutCode, LayoutSheet, table_letter};

use crate::board::TableBoard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRow {
    pub table_id: i64,
    pub letter: char,
    pub table_type: TableType,
    pub layout: LayoutCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageScreen {
    board: TableBoard,
}

impl UsageScreen {
    pub fn new(tables: &[TableSnapshot]) -> Self {
        Self {
            board: TableBoard::from_snapshots(tables),
        }
    }

    /// Offline board from a layout sheet and its end-time map.
    pub fn from_sheet(sheet: &LayoutSheet, end_times: &BTreeMap<String, String>) -> Self {
        Self::new(&sheet.snapshots(end_times))
    }

    pub fn rows(&self) -> Vec<UsageRow> {
        self.board
            .iter()
            .map(|view| UsageRow {
                table_id: view.table_id(),
                letter: table_letter(view.table_id()),
                table_type: view.table_type(),
                layout: view.layout.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::seat::{LockDecision, SeatPosition, parse_end_time_map};

    #[test]
    fn test_board_from_sheet() {
        let sheet = LayoutSheet::parse("/AA/AA/__/\n/AU/AA/__/\n");
        let screen = UsageScreen::from_sheet(&sheet, &parse_end_time_map("6: 12:00\n"));
        let rows = screen.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].letter, 'A');
        assert_eq!(rows[0].layout.code, "/AA/AA/__/");
        assert_eq!(rows[1].letter, 'B');
        assert_eq!(rows[1].table_type, TableType::Personal);
        assert_eq!(rows[1].layout.code, "/AU/AA/__/");
        assert_eq!(rows[1].layout.labels, ["/", "B1", "12:00", "/", "B3", "B4"]);
        assert_eq!(sheet.lock_for(1), Some(LockDecision::Diagonal(SeatPosition::ALL[2])));
    }
}
