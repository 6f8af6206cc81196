//! Screen layouts for the 2x16 character display.

use core::fmt::Write;

use heapless::String;

use crate::io::CharacterDisplay;

/// Number of character columns per display row.
pub const COLUMNS: usize = 16;

/// Number of display rows.
pub const ROWS: u8 = 2;

/// One display row of at most [`COLUMNS`] characters.
pub type Line = String<COLUMNS>;

/// Errors from building a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Text does not fit in one row.
    TooLong { len: usize },
}

impl core::fmt::Display for LineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LineError::TooLong { len } => {
                write!(f, "line of {} characters exceeds {} columns", len, COLUMNS)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LineError {}

/// Builds a display line, rejecting text wider than the display.
pub fn line(text: &str) -> Result<Line, LineError> {
    Line::try_from(text).map_err(|_| LineError::TooLong { len: text.len() })
}

/// Formats a reaction time as `S.mmm sec`.
///
/// The fraction is always three zero-padded digits. Any `u32` fits in one row
/// (`4294967.295 sec` is 15 characters).
pub fn format_reaction_time(millis: u32) -> Line {
    let mut out = Line::new();
    // Cannot overflow: the longest possible output is 15 characters.
    let _ = write!(out, "{}.{:03} sec", millis / 1000, millis % 1000);
    out
}

/// The screens the game shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Title and "push to begin" prompt.
    Prompt,
    /// Measured reaction time in milliseconds.
    Result(u32),
}

impl Screen {
    /// First-row text for the prompt.
    pub const PROMPT_TITLE: &'static str = "A4 Reaction game";
    /// Second-row text for the prompt.
    pub const PROMPT_HINT: &'static str = "push sw to begin";
    /// First-row text for the result.
    pub const RESULT_TITLE: &'static str = "LED ON TIME:";

    /// Returns the two rows of this screen.
    pub fn lines(&self) -> [Line; 2] {
        match self {
            Screen::Prompt => [
                line(Self::PROMPT_TITLE).unwrap_or_default(),
                line(Self::PROMPT_HINT).unwrap_or_default(),
            ],
            Screen::Result(millis) => [
                line(Self::RESULT_TITLE).unwrap_or_default(),
                format_reaction_time(*millis),
            ],
        }
    }

    /// Clears the display and writes both rows from column zero.
    pub fn render<D: CharacterDisplay>(&self, display: &mut D) {
        let lines = self.lines();
        display.clear();
        for (row, text) in (0..ROWS).zip(lines.iter()) {
            display.set_cursor(row, 0);
            display.write_str(text);
        }
    }
}
