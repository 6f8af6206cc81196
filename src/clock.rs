//! Interrupt-driven millisecond clock with an inactivity watchdog.
//!
//! [`MillisClock`] is written by a 1 kHz timer interrupt through [`MillisClock::on_tick`]
//! and read/reset by the polling game loop. Both fields are word-sized atomics accessed
//! with plain `load`/`store`, so the clock works on cores without compare-and-swap
//! (Cortex-M0). A `reset` racing an increment can lose one tick.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::io::Indicator;

/// Tick rate the clock expects its interrupt to fire at.
pub const TICK_HZ: u32 = 1_000;

/// Counter value at which the watchdog fires.
pub const INACTIVITY_LIMIT_MS: u32 = 10_000;

/// Largest reload value the 24-bit SysTick counter accepts.
pub const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Outcome of a single clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Counter advanced normally.
    Counting(u32),
    /// Counter hit the inactivity limit, was reset, and raised the flag.
    Expired,
}

/// Millisecond counter shared between the tick interrupt and the game loop.
///
/// Place one in a `static` so the interrupt handler can reach it, and hand the game a
/// `&'static` reference.
pub struct MillisClock {
    millis: AtomicU32,
    inactive: AtomicBool,
}

impl MillisClock {
    /// Creates a clock at zero with the inactivity flag clear.
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
            inactive: AtomicBool::new(false),
        }
    }

    /// Advances the counter by one millisecond.
    ///
    /// Must only be called from the tick interrupt; the counter has a single writer for
    /// increments.
    pub fn tick(&self) -> Tick {
        let next = self.millis.load(Ordering::Relaxed).wrapping_add(1);

        if next == INACTIVITY_LIMIT_MS {
            self.millis.store(0, Ordering::Relaxed);
            self.inactive.store(true, Ordering::Release);
            Tick::Expired
        } else {
            self.millis.store(next, Ordering::Relaxed);
            Tick::Counting(next)
        }
    }

    /// Tick handler body: advances the counter and forces the indicator off when the
    /// watchdog fires.
    pub fn on_tick<O: Indicator>(&self, indicator: &mut O) -> Tick {
        let tick = self.tick();
        if tick == Tick::Expired {
            indicator.set(false);

            #[cfg(feature = "defmt")]
            defmt::debug!("inactivity limit reached, indicator forced off");
        }
        tick
    }

    /// Milliseconds since the last reset (or watchdog expiry).
    #[inline]
    pub fn read(&self) -> u32 {
        self.millis.load(Ordering::Relaxed)
    }

    /// Sets the counter to zero. Leaves the inactivity flag alone.
    #[inline]
    pub fn reset(&self) {
        self.millis.store(0, Ordering::Relaxed);
    }

    /// Returns true if the watchdog has fired since the flag was last cleared.
    #[inline]
    pub fn inactivity_expired(&self) -> bool {
        self.inactive.load(Ordering::Acquire)
    }

    /// Clears the inactivity flag.
    #[inline]
    pub fn clear_inactivity(&self) {
        self.inactive.store(false, Ordering::Release);
    }
}

impl Default for MillisClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick timer configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// A tick rate of zero was requested.
    ZeroTickRate,

    /// The core clock does not divide down to the tick rate exactly.
    NotExact {
        sysclk_hz: u32,
        tick_hz: u32,
    },

    /// The required reload value does not fit the 24-bit SysTick counter.
    ReloadOutOfRange {
        reload: u32,
    },
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::ZeroTickRate => write!(f, "tick rate must be non-zero"),
            ClockError::NotExact { sysclk_hz, tick_hz } => {
                write!(
                    f,
                    "core clock {} Hz cannot be divided down to exactly {} Hz",
                    sysclk_hz, tick_hz
                )
            }
            ClockError::ReloadOutOfRange { reload } => {
                write!(
                    f,
                    "reload value {} exceeds SysTick maximum of {}",
                    reload, SYSTICK_MAX_RELOAD
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

/// Computes the SysTick reload value that yields `tick_hz` interrupts from `sysclk_hz`.
///
/// # Returns
/// * `Ok(reload)` - value to program into the reload register
/// * `Err` - the rate is zero, not an exact divisor, or too slow for a 24-bit counter
pub fn systick_reload(sysclk_hz: u32, tick_hz: u32) -> Result<u32, ClockError> {
    if tick_hz == 0 {
        return Err(ClockError::ZeroTickRate);
    }

    if sysclk_hz == 0 || sysclk_hz % tick_hz != 0 {
        return Err(ClockError::NotExact { sysclk_hz, tick_hz });
    }

    let reload = sysclk_hz / tick_hz - 1;
    if reload > SYSTICK_MAX_RELOAD {
        return Err(ClockError::ReloadOutOfRange { reload });
    }

    Ok(reload)
}
