//! Shared test infrastructure for reaction-timer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use reaction_timer::{
    Button, COLUMNS, CharacterDisplay, DelayUs, Indicator, MillisClock, ROWS, ReactionGame,
};

// ============================================================================
// Mock Button
// ============================================================================

/// Scripted button line.
///
/// `press_for(n)` makes the next `n` polls read pressed, after which the line releases
/// by itself. `hold()` keeps it pressed until `release()`.
pub struct ButtonLine {
    held: Cell<bool>,
    polls_left: Cell<Option<u32>>,
    polls: Cell<u32>,
}

impl ButtonLine {
    pub fn new() -> Self {
        Self {
            held: Cell::new(false),
            polls_left: Cell::new(None),
            polls: Cell::new(0),
        }
    }

    pub fn press_for(&self, polls: u32) {
        self.held.set(polls > 0);
        self.polls_left.set(Some(polls));
    }

    pub fn tap(&self) {
        self.press_for(1);
    }

    pub fn hold(&self) {
        self.held.set(true);
        self.polls_left.set(None);
    }

    pub fn release(&self) {
        self.held.set(false);
        self.polls_left.set(None);
    }

    pub fn is_held(&self) -> bool {
        self.held.get()
    }

    pub fn poll_count(&self) -> u32 {
        self.polls.get()
    }
}

impl Button for &ButtonLine {
    fn is_pressed(&mut self) -> bool {
        self.polls.set(self.polls.get() + 1);

        if let Some(left) = self.polls_left.get() {
            if left == 0 {
                self.release();
                return false;
            }
            self.polls_left.set(Some(left - 1));
        }

        self.held.get()
    }
}

/// Button whose every poll first lets one tick of the 1 kHz interrupt run
///
/// Models time passing while the game spins on the line, so the watchdog can fire
/// between two reads the game makes within one step.
pub struct TickingButton<'a> {
    line: &'a ButtonLine,
    clock: &'a MillisClock,
    led: &'a LedProbe,
}

impl<'a> TickingButton<'a> {
    pub fn new(line: &'a ButtonLine, clock: &'a MillisClock, led: &'a LedProbe) -> Self {
        Self { line, clock, led }
    }
}

impl Button for TickingButton<'_> {
    fn is_pressed(&mut self) -> bool {
        let mut led = self.led;
        self.clock.on_tick(&mut led);

        let mut line = self.line;
        line.is_pressed()
    }
}

// ============================================================================
// Mock Indicator
// ============================================================================

/// LED probe shared between the game and the simulated tick interrupt
pub struct LedProbe {
    lit: Cell<bool>,
    writes: Cell<u32>,
}

impl LedProbe {
    pub fn new() -> Self {
        Self {
            lit: Cell::new(false),
            writes: Cell::new(0),
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit.get()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl Indicator for &LedProbe {
    fn set(&mut self, lit: bool) {
        self.lit.set(lit);
        self.writes.set(self.writes.get() + 1);
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// 2x16 character grid that panics on writes past the last column
pub struct MockDisplay {
    cells: [[u8; COLUMNS]; ROWS as usize],
    row: usize,
    col: usize,
    clears: u32,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLUMNS]; ROWS as usize],
            row: 0,
            col: 0,
            clears: 0,
        }
    }

    /// Row contents with trailing blanks removed
    pub fn row(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.cells[row]).trim_end().to_string()
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl CharacterDisplay for MockDisplay {
    fn clear(&mut self) {
        self.cells = [[b' '; COLUMNS]; ROWS as usize];
        self.row = 0;
        self.col = 0;
        self.clears += 1;
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        assert!(row < ROWS, "cursor row {} out of range", row);
        assert!((col as usize) < COLUMNS, "cursor column {} out of range", col);
        self.row = row as usize;
        self.col = col as usize;
    }

    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            assert!(self.col < COLUMNS, "display overflow writing {:?}", text);
            self.cells[self.row][self.col] = byte;
            self.col += 1;
        }
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that lets the simulated 1 kHz interrupt run while it waits
pub struct TickingDelay<'a> {
    clock: &'a MillisClock,
    led: &'a LedProbe,
    calls: heapless::Vec<u32, 64>,
}

impl<'a> TickingDelay<'a> {
    pub fn new(clock: &'a MillisClock, led: &'a LedProbe) -> Self {
        Self {
            clock,
            led,
            calls: heapless::Vec::new(),
        }
    }

    pub fn calls(&self) -> &[u32] {
        &self.calls
    }
}

impl DelayUs for TickingDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        let _ = self.calls.push(us);
        for _ in 0..us / 1_000 {
            self.clock.on_tick(&mut self.led);
        }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestGame<'a> = ReactionGame<'a, &'a ButtonLine, &'a LedProbe, MockDisplay, TickingDelay<'a>>;

pub type TickingGame<'a> =
    ReactionGame<'a, TickingButton<'a>, &'a LedProbe, MockDisplay, TickingDelay<'a>>;

/// Runs the tick interrupt `millis` times
pub fn advance(clock: &MillisClock, led: &LedProbe, millis: u32) {
    let mut led = led;
    for _ in 0..millis {
        clock.on_tick(&mut led);
    }
}

/// Builds a game wired to the given mocks
pub fn new_game<'a>(clock: &'a MillisClock, button: &'a ButtonLine, led: &'a LedProbe) -> TestGame<'a> {
    ReactionGame::new(button, led, MockDisplay::new(), TickingDelay::new(clock, led), clock)
}

/// Builds a game whose button polls advance the clock
pub fn new_ticking_game<'a>(clock: &'a MillisClock, button: &'a ButtonLine, led: &'a LedProbe) -> TickingGame<'a> {
    ReactionGame::new(
        TickingButton::new(button, clock, led),
        led,
        MockDisplay::new(),
        TickingDelay::new(clock, led),
        clock,
    )
}
