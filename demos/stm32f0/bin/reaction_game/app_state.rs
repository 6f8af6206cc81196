use rtt_target::rprintln;

use reaction_timer::{GameState, MillisClock, ReactionGame, SharedIndicator, Step};
use stm32f0_demo::cycle_delay::CycleDelay;
use stm32f0_demo::rtt_display::RttDisplay;
use stm32f0_demo::tick::GameLed;

use crate::hardware_setup::{GameButton, HardwareContext};

/// Type alias for the game wired to this board
type Game = ReactionGame<
    'static,
    GameButton,
    &'static SharedIndicator<GameLed>,
    RttDisplay,
    CycleDelay,
>;

/// Application state containing all runtime data
pub struct AppState {
    game: Game,
    rounds_played: u32,
    best_ms: Option<u32>,
}

impl AppState {
    /// Wire the game to the board
    pub fn new(
        hw: HardwareContext,
        led: &'static SharedIndicator<GameLed>,
        clock: &'static MillisClock,
    ) -> Self {
        let game = ReactionGame::new(hw.button, led, hw.display, hw.delay, clock);

        Self {
            game,
            rounds_played: 0,
            best_ms: None,
        }
    }

    /// Log what the last poll did
    fn report(&mut self, step: Step) {
        match step {
            Step::Idle => {}
            Step::Entered(GameState::WaitRandomDelay) => {
                rprintln!("Round started, delay {} ms", self.game.random_delay());
            }
            Step::Entered(GameState::WaitForSecondPress) => {
                rprintln!("LED on");
            }
            Step::Entered(state) => {
                rprintln!("State: {:?}", state);
            }
            Step::RoundAborted => {
                rprintln!("No press within 10 s - round abandoned");
            }
            Step::RoundComplete(millis) => {
                self.rounds_played += 1;
                let best = self.best_ms.map_or(millis, |best| best.min(millis));
                self.best_ms = Some(best);
                rprintln!(
                    "Round {}: {} ms (best {} ms)",
                    self.rounds_played,
                    millis,
                    best
                );
            }
        }
    }

    /// Run the main application loop
    pub fn run(&mut self) -> ! {
        loop {
            let step = self.game.step();
            self.report(step);
        }
    }
}
