//! Reaction game state machine.
//!
//! Provides [`ReactionGame`], which polls a button and a [`MillisClock`] and walks the
//! six-state round cycle, driving an indicator and a character display.

use crate::clock::MillisClock;
use crate::io::{Button, CharacterDisplay, DelayUs, Indicator};
use crate::screen::Screen;

/// Shortest random delay before the indicator lights.
pub const DELAY_MIN_MS: u32 = 1_000;

/// Width of the random delay window; delays fall in `[DELAY_MIN_MS, DELAY_MIN_MS + DELAY_SPAN_MS)`.
pub const DELAY_SPAN_MS: u32 = 3_000;

const SEED_MULTIPLIER: u32 = 37;

/// Derives the pre-indicator delay from a clock reading.
///
/// Not a real RNG: the seed is the free-running clock at the moment the player releases
/// the button, which is unpredictable enough for a human.
#[inline]
pub fn random_delay_ms(seed: u32) -> u32 {
    DELAY_MIN_MS + seed.wrapping_mul(SEED_MULTIPLIER) % DELAY_SPAN_MS
}

/// Where the game is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Show the prompt.
    Startup,
    /// Prompt shown, waiting for the player to start a round.
    WaitForFirstPress,
    /// Round started, indicator still dark.
    WaitRandomDelay,
    /// Indicator lit, measuring reaction time.
    WaitForSecondPress,
    /// Display the measured time.
    ShowResult,
    /// Result shown, waiting for a press to start over.
    WaitForReset,
}

/// What happened during one call to [`ReactionGame::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Guard not met, state unchanged.
    Idle,
    /// Moved to a new state.
    Entered(GameState),
    /// The inactivity watchdog ended the round; back to `Startup`.
    RoundAborted,
    /// Result shown for a reaction time in milliseconds; now in `WaitForReset`.
    RoundComplete(u32),
}

/// Debounce timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameTiming {
    /// Settle delay after the button is released, in microseconds.
    pub settle_us: u32,
}

impl GameTiming {
    pub const DEFAULT: Self = Self { settle_us: 20_000 };
}

impl Default for GameTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Single-button reaction game.
///
/// Call [`step`](Self::step) from the main loop (or hand control to [`run`](Self::run)).
/// Each step evaluates the current state's guard once and takes at most one transition.
/// Press-driven transitions block until the button is released and then wait the settle
/// delay.
///
/// # Type Parameters
/// * `'c` - Lifetime of the clock reference
/// * `B` - Button input
/// * `O` - Indicator output
/// * `D` - Character display
/// * `W` - Microsecond delay
pub struct ReactionGame<'c, B, O, D, W>
where
    B: Button,
    O: Indicator,
    D: CharacterDisplay,
    W: DelayUs,
{
    button: B,
    indicator: O,
    display: D,
    delay: W,
    clock: &'c MillisClock,
    timing: GameTiming,
    state: GameState,
    random_delay: u32,
    reaction_time: Option<u32>,
}

impl<'c, B, O, D, W> ReactionGame<'c, B, O, D, W>
where
    B: Button,
    O: Indicator,
    D: CharacterDisplay,
    W: DelayUs,
{
    /// Creates a game in `Startup` with the indicator off and default timing.
    pub fn new(button: B, indicator: O, display: D, delay: W, clock: &'c MillisClock) -> Self {
        Self::with_timing(button, indicator, display, delay, clock, GameTiming::DEFAULT)
    }

    /// Creates a game with custom debounce timing.
    pub fn with_timing(
        button: B,
        mut indicator: O,
        display: D,
        delay: W,
        clock: &'c MillisClock,
        timing: GameTiming,
    ) -> Self {
        indicator.set(false);

        Self {
            button,
            indicator,
            display,
            delay,
            clock,
            timing,
            state: GameState::Startup,
            random_delay: DELAY_MIN_MS,
            reaction_time: None,
        }
    }

    /// Runs one iteration of the state machine.
    pub fn step(&mut self) -> Step {
        match self.state {
            GameState::Startup => {
                Screen::Prompt.render(&mut self.display);
                self.enter(GameState::WaitForFirstPress)
            }

            GameState::WaitForFirstPress => {
                if !self.button.is_pressed() {
                    return Step::Idle;
                }

                self.await_release();
                self.random_delay = random_delay_ms(self.clock.read());
                self.clock.reset();
                // The watchdog keeps firing while the prompt sits idle; a flag left
                // over from that must not abort the round starting now.
                self.clock.clear_inactivity();
                self.enter(GameState::WaitRandomDelay)
            }

            GameState::WaitRandomDelay => {
                if self.clock.read() < self.random_delay {
                    return Step::Idle;
                }

                self.indicator.set(true);
                self.clock.reset();
                self.await_release();
                self.enter(GameState::WaitForSecondPress)
            }

            GameState::WaitForSecondPress => {
                // Watchdog first, so a simultaneous press cannot mask it.
                if self.clock.inactivity_expired() {
                    return self.abort_round();
                }

                if !self.button.is_pressed() {
                    return Step::Idle;
                }

                let millis = self.clock.read();
                // The limit may have been reached while the button was being read.
                if self.clock.inactivity_expired() {
                    return self.abort_round();
                }

                self.reaction_time = Some(millis);
                self.indicator.set(false);
                self.await_release();
                self.enter(GameState::ShowResult)
            }

            GameState::ShowResult => {
                let millis = self.reaction_time.unwrap_or(0);
                Screen::Result(millis).render(&mut self.display);
                self.clock.reset();
                self.enter(GameState::WaitForReset);
                Step::RoundComplete(millis)
            }

            GameState::WaitForReset => {
                if !self.button.is_pressed() {
                    return Step::Idle;
                }

                self.await_release();
                self.enter(GameState::Startup)
            }
        }
    }

    /// Runs the game forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Spins until the button reads released, then waits out contact bounce.
    fn await_release(&mut self) {
        while self.button.is_pressed() {
            core::hint::spin_loop();
        }
        self.delay.delay_us(self.timing.settle_us);
    }

    /// Ends a round the watchdog expired: indicator off, flag cleared, back to `Startup`.
    fn abort_round(&mut self) -> Step {
        self.indicator.set(false);
        self.clock.clear_inactivity();
        self.clock.reset();
        self.enter(GameState::Startup);
        Step::RoundAborted
    }

    fn enter(&mut self, next: GameState) -> Step {
        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {}", self.state, next);

        self.state = next;
        Step::Entered(next)
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Delay chosen for the current (or most recent) round, in milliseconds.
    pub fn random_delay(&self) -> u32 {
        self.random_delay
    }

    /// Reaction time of the most recent completed press, if any.
    pub fn last_reaction_time(&self) -> Option<u32> {
        self.reaction_time
    }

    /// Returns the debounce timing in use.
    pub fn timing(&self) -> GameTiming {
        self.timing
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns a reference to the settle delay.
    pub fn delay(&self) -> &W {
        &self.delay
    }
}
