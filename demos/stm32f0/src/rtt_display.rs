use reaction_timer::{CharacterDisplay, COLUMNS, ROWS};
use rtt_target::rprintln;

/// 2x16 character display mirrored over RTT
///
/// Stands in for an HD44780 panel: keeps the character grid in memory and prints the
/// affected row every time it changes.
pub struct RttDisplay {
    cells: [[u8; COLUMNS]; ROWS as usize],
    row: usize,
    col: usize,
}

impl RttDisplay {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLUMNS]; ROWS as usize],
            row: 0,
            col: 0,
        }
    }

    fn print_row(&self, row: usize) {
        let text = core::str::from_utf8(&self.cells[row]).unwrap_or("?");
        rprintln!("LCD{}: |{}|", row, text);
    }
}

impl Default for RttDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterDisplay for RttDisplay {
    fn clear(&mut self) {
        self.cells = [[b' '; COLUMNS]; ROWS as usize];
        self.row = 0;
        self.col = 0;
        rprintln!("LCD: clear");
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        self.row = (row as usize).min(ROWS as usize - 1);
        self.col = (col as usize).min(COLUMNS);
    }

    fn write_str(&mut self, text: &str) {
        // Characters past the last column are dropped, as on the real panel
        for byte in text.bytes() {
            if self.col >= COLUMNS {
                break;
            }
            self.cells[self.row][self.col] = byte;
            self.col += 1;
        }
        self.print_row(self.row);
    }
}
