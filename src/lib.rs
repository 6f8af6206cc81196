#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`MillisClock`**: Millisecond counter ticked from a 1 kHz interrupt, with a 10 s inactivity watchdog
//! - **`ReactionGame`**: The round state machine, polled from the main loop
//! - **`GameState`**: Where the game is within a round
//! - **`Step`**: What one poll of the state machine did
//! - **`Screen`**: The prompt and result layouts for a 2x16 character display
//! - **`Button`**, **`Indicator`**, **`CharacterDisplay`**, **`DelayUs`**: Traits to implement for your hardware
//! - **`SharedIndicator`**: Lets the tick interrupt force the indicator off while the game owns it
//!
//! The game never counts loop iterations: all timing comes from the clock, so the polling
//! loop may run at any speed.

pub mod clock;
pub mod io;
pub mod screen;
pub mod game;

pub use clock::{ClockError, INACTIVITY_LIMIT_MS, MillisClock, TICK_HZ, Tick, systick_reload};
pub use io::{Button, CharacterDisplay, DelayUs, Indicator, SharedIndicator};
pub use screen::{COLUMNS, Line, LineError, ROWS, Screen, format_reaction_time, line};
pub use game::{
    DELAY_MIN_MS, DELAY_SPAN_MS, GameState, GameTiming, ReactionGame, Step, random_delay_ms,
};
