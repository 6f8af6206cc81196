use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{gpioa, gpioc, Input, PullUp},
    pac,
    prelude::*,
};

use reaction_timer::ClockError;
use stm32f0_demo::cycle_delay::CycleDelay;
use stm32f0_demo::pins::{ActiveLowButton, PinIndicator};
use stm32f0_demo::rtt_display::RttDisplay;
use stm32f0_demo::tick::{configure_systick, LED};

/// Button type (user button on PC13)
pub type GameButton = ActiveLowButton<gpioc::PC13<Input<PullUp>>>;

/// Container for all initialized hardware peripherals
///
/// The LED is not in here: it is installed into [`LED`] so the SysTick handler can
/// reach it.
pub struct HardwareContext {
    pub button: GameButton,
    pub display: RttDisplay,
    pub delay: CycleDelay,
}

/// Ways hardware bring-up can fail. All of them are fatal.
#[derive(Debug)]
pub enum SetupError {
    /// Device or core peripherals were already taken
    PeripheralsUnavailable,
    /// SysTick cannot produce an exact 1 kHz tick from the core clock
    Clock(ClockError),
}

impl From<ClockError> for SetupError {
    fn from(err: ClockError) -> Self {
        SetupError::Clock(err)
    }
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - SysTick timer setup (1ms interrupts)
/// - Button on PC13, game LED on PA5
/// - RTT-backed display and cycle-counted delay
///
/// The LED is installed before SysTick starts so the first tick already sees it.
pub fn init_hardware() -> Result<HardwareContext, SetupError> {
    let mut dp = pac::Peripherals::take().ok_or(SetupError::PeripheralsUnavailable)?;
    let mut cp = cortex_m::Peripherals::take().ok_or(SetupError::PeripheralsUnavailable)?;

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    let sysclk_hz = rcc.clocks.sysclk().0;

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let button = setup_button(gpioc.pc13);
    setup_game_led(gpioa.pa5);

    configure_systick(&mut cp.SYST, &mut cp.SCB, sysclk_hz)?;
    rprintln!("SysTick configured for 1ms interrupts");

    Ok(HardwareContext {
        button,
        display: RttDisplay::new(),
        delay: CycleDelay::new(sysclk_hz),
    })
}

/// Configure the system clock
///
/// # Returns
/// The configured RCC (Reset and Clock Control) peripheral
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure user button (PC13) with pull-up
fn setup_button(pc13: gpioc::PC13<Input<stm32f0xx_hal::gpio::Floating>>) -> GameButton {
    let pin = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    rprintln!("Button configured on PC13");
    ActiveLowButton::new(pin)
}

/// Configure the game LED (PA5) as output and hand it to the shared slot
fn setup_game_led(pa5: gpioa::PA5<Input<stm32f0xx_hal::gpio::Floating>>) {
    let pin = cortex_m::interrupt::free(|cs| pa5.into_push_pull_output(cs));
    LED.install(PinIndicator::new(pin));

    rprintln!("Game LED configured on PA5");
}
