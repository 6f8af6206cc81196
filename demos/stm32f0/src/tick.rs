use cortex_m::peripheral::{scb::SystemHandler, syst::SystClkSource, SCB, SYST};
use reaction_timer::{systick_reload, ClockError, MillisClock, SharedIndicator, TICK_HZ};
use stm32f0xx_hal::gpio::{gpioa, Output, PushPull};
use stm32f0xx_hal::pac::NVIC_PRIO_BITS;

use crate::pins::PinIndicator;

/// Game LED (PA5 on the Nucleo-F072RB)
pub type GameLed = PinIndicator<gpioa::PA5<Output<PushPull>>>;

/// Millisecond clock advanced by the SysTick interrupt
///
/// Counts up from zero, wraps back to zero after 10 seconds and raises the
/// inactivity flag the game polls.
pub static CLOCK: MillisClock = MillisClock::new();

/// Game LED, shared so the SysTick handler can force it off on timeout.
pub static LED: SharedIndicator<GameLed> = SharedIndicator::new();

/// SysTick handler body.
///
/// Call this from the `SysTick` exception handler in main.rs, once per millisecond.
pub fn on_systick() {
    CLOCK.on_tick(&mut &LED);
}

/// Logical SysTick priority (0 is most urgent)
pub const SYSTICK_PRIORITY: u8 = 1;

/// Programs SysTick to interrupt at exactly 1 kHz from the core clock, at
/// [`SYSTICK_PRIORITY`].
///
/// Fails if `sysclk_hz` cannot be divided down to 1 kHz exactly or the reload value
/// does not fit the 24-bit counter. Nothing is written to SysTick on failure.
pub fn configure_systick(syst: &mut SYST, scb: &mut SCB, sysclk_hz: u32) -> Result<(), ClockError> {
    let reload = systick_reload(sysclk_hz, TICK_HZ)?;

    // SAFETY: critical sections mask interrupts globally, so they do not depend
    // on priority levels.
    unsafe {
        scb.set_priority(SystemHandler::SysTick, SYSTICK_PRIORITY << (8 - NVIC_PRIO_BITS));
    }

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    Ok(())
}
