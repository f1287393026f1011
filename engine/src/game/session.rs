use tokio::sync::mpsc;

use crate::SessionRng;
use crate::clock::GameClock;
use crate::log;

use super::game_state::GameState;
use super::observer::GameObserver;
use super::settings::SessionSettings;
use super::types::{Difficulty, Direction, SessionPhase, StepResult};

/// Commands fed into the session task. Producers (input handlers, UI) only
/// ever enqueue; the task is the sole consumer, so ticks and commands are
/// strictly serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    SetDifficulty(Difficulty),
    Start,
    Restart,
    Quit,
}

/// One playthrough: owns the game state, the clock and the RNG, and runs
/// the tick loop on a single task. Created idle; `Start` arms the clock.
pub struct GameSession {
    settings: SessionSettings,
    state: GameState,
    clock: GameClock,
    rng: SessionRng,
    phase: SessionPhase,
    tick: u64,
}

impl GameSession {
    pub fn new(settings: SessionSettings, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let state = GameState::new(settings.grid, &mut rng);
        Self {
            settings,
            state,
            clock: GameClock::new(settings.tick_interval()),
            rng,
            phase: SessionPhase::Idle,
            tick: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Drives the session until `Quit` arrives or every command sender is
    /// dropped. While the clock is stopped only commands can wake the loop.
    pub async fn run(
        mut self,
        observer: impl GameObserver,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    ) {
        loop {
            tokio::select! {
                _ = self.clock.tick() => {
                    self.step(&observer).await;
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    if !self.handle_command(command, &observer).await {
                        break;
                    }
                }
            }
        }
    }

    async fn step(&mut self, observer: &impl GameObserver) {
        let score_before = self.state.score();

        match self.state.advance(&mut self.rng) {
            StepResult::Continuing => {
                self.tick += 1;
                if self.state.score() > score_before {
                    observer.on_score_changed(self.state.score()).await;
                }
                observer.on_tick(self.state.snapshot(self.tick)).await;
            }
            StepResult::GameOver => {
                self.clock.stop();
                self.phase = SessionPhase::Ended;
                log!("game over after {} ticks. Final score: {}", self.tick, self.state.score());
                observer.on_game_over(self.state.score()).await;
            }
        }
    }

    /// Returns `false` when the session should terminate.
    async fn handle_command(
        &mut self,
        command: SessionCommand,
        observer: &impl GameObserver,
    ) -> bool {
        match command {
            SessionCommand::Turn(direction) => {
                // Direction input is accepted at any time but only has an
                // effect while the game is actually running.
                if self.phase == SessionPhase::Running {
                    self.state.set_pending_direction(direction);
                }
            }
            SessionCommand::SetDifficulty(difficulty) => {
                self.settings.difficulty = difficulty;
                self.clock.set_period(difficulty.tick_interval());
                log!(
                    "difficulty set to {:?} ({} ms per tick)",
                    difficulty,
                    difficulty.tick_interval().as_millis()
                );
            }
            SessionCommand::Start => {
                if self.phase == SessionPhase::Idle {
                    self.phase = SessionPhase::Running;
                    self.clock.start();
                    log!(
                        "session started at {:?} on a {}x{} grid",
                        self.settings.difficulty,
                        self.settings.grid.extent,
                        self.settings.grid.extent
                    );
                }
            }
            SessionCommand::Restart => {
                self.tick = 0;
                self.state.reset(&mut self.rng);
                self.phase = SessionPhase::Running;
                observer.on_reset(self.state.snapshot(self.tick)).await;
                self.clock.start();
                log!("session restarted");
            }
            SessionCommand::Quit => {
                return false;
            }
        }
        true
    }
}
