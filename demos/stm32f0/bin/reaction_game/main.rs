#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use stm32f0_demo::tick::{CLOCK, LED};

mod app_state;
mod hardware_setup;

use app_state::AppState;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demo::tick::on_systick();
}

/// Terminal error state: interrupts off, spin forever
fn halt() -> ! {
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::nop();
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Reaction Timer ===");
    rprintln!("Starting initialization...");

    let hw = match hardware_setup::init_hardware() {
        Ok(hw) => hw,
        Err(err) => {
            rprintln!("Hardware setup failed: {:?}", err);
            halt();
        }
    };
    rprintln!("Hardware initialized successfully");

    let mut app = AppState::new(hw, &LED, &CLOCK);

    rprintln!("=== System Ready ===");
    rprintln!("Press the user button, wait for the LED, press again.");

    // Run the main application loop (never returns)
    app.run()
}
