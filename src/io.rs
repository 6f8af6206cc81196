//! Hardware abstraction traits for the game's collaborators.
//!
//! Implement these for your board (GPIO, LCD driver, delay source) so the game can drive
//! it. All of them are infallible: handle hardware errors inside the implementation.

use core::cell::RefCell;
use critical_section::Mutex;

/// Push button input.
pub trait Button {
    /// Returns true while the button is held.
    ///
    /// This is the raw line level (active-low buttons report `true` when the pin reads
    /// low). Debouncing is done by the game.
    fn is_pressed(&mut self) -> bool;
}

/// Single-colour indicator output (typically an LED).
pub trait Indicator {
    /// Turns the indicator on (`true`) or off (`false`).
    fn set(&mut self, lit: bool);
}

/// Character display with a cursor, such as an HD44780 2x16 LCD.
pub trait CharacterDisplay {
    /// Clears the whole display.
    fn clear(&mut self);

    /// Moves the cursor to `row`, `col` (both zero-based).
    fn set_cursor(&mut self, row: u8, col: u8);

    /// Writes text at the cursor, advancing it.
    fn write_str(&mut self, text: &str);
}

/// Blocking microsecond delay.
pub trait DelayUs {
    /// Busy-waits for roughly `us` microseconds.
    fn delay_us(&mut self, us: u32);
}

/// An indicator shared between the game loop and the tick interrupt.
///
/// The watchdog in [`MillisClock::on_tick`](crate::MillisClock::on_tick) must be able to
/// force the indicator off from interrupt context while the game owns it in the main
/// loop. Put a `SharedIndicator` in a `static`, [`install`](Self::install) the pin once
/// at startup, and hand `&SHARED` to both sides.
pub struct SharedIndicator<O> {
    inner: Mutex<RefCell<Option<O>>>,
}

impl<O: Indicator> SharedIndicator<O> {
    /// Creates an empty slot. Writes are dropped until a pin is installed.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs the output, replacing any previous one.
    pub fn install(&self, output: O) {
        critical_section::with(|cs| {
            self.inner.borrow_ref_mut(cs).replace(output);
        });
    }

    /// Returns true once an output has been installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }
}

impl<O: Indicator> Default for SharedIndicator<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Indicator> Indicator for &SharedIndicator<O> {
    fn set(&mut self, lit: bool) {
        critical_section::with(|cs| {
            if let Some(output) = self.inner.borrow_ref_mut(cs).as_mut() {
                output.set(lit);
            }
        });
    }
}
