use reaction_timer::DelayUs;

/// Busy-wait delay counted in core clock cycles
///
/// SysTick is taken by the millisecond clock, so debounce delays spin on the
/// instruction counter instead. Accurate to a few percent while interrupts are short.
pub struct CycleDelay {
    cycles_per_us: u32,
}

impl CycleDelay {
    /// # Arguments
    /// * `sysclk_hz` - core clock frequency
    pub fn new(sysclk_hz: u32) -> Self {
        Self {
            cycles_per_us: (sysclk_hz / 1_000_000).max(1),
        }
    }
}

impl DelayUs for CycleDelay {
    fn delay_us(&mut self, us: u32) {
        cortex_m::asm::delay(us.saturating_mul(self.cycles_per_us));
    }
}
