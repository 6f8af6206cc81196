use embedded_hal::digital::v2::{InputPin, OutputPin};
use reaction_timer::{Button, Indicator};

/// Push button wired to ground (pressed when the pin reads low)
pub struct ActiveLowButton<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLowButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> Button for ActiveLowButton<P> {
    fn is_pressed(&mut self) -> bool {
        // A read error is treated as "not pressed" so the game never spins on it
        self.pin.is_low().unwrap_or(false)
    }
}

/// LED driven high-active from a push-pull output
pub struct PinIndicator<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> PinIndicator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin> Indicator for PinIndicator<P> {
    fn set(&mut self, lit: bool) {
        let _ = if lit {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}
