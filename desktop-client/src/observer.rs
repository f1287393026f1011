use engine::game::{GameObserver, GameSnapshot};

use crate::state::SharedState;

/// Bridges the session task to the UI: every hook lands in `SharedState`,
/// the next repaint picks it up.
#[derive(Clone)]
pub struct SessionObserver {
    shared_state: SharedState,
}

impl SessionObserver {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameObserver for SessionObserver {
    async fn on_tick(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn on_score_changed(&self, _score: u32) {
        // The score is already part of the next snapshot.
    }

    async fn on_game_over(&self, final_score: u32) {
        self.shared_state.set_game_over(final_score);
    }

    async fn on_reset(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }
}
