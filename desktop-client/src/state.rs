use std::sync::{Arc, Mutex};

use engine::game::{GameSnapshot, SessionPhase};

/// What the painter reads each frame. Written by the session observer,
/// cloned out by the UI thread.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub phase: SessionPhase,
    pub snapshot: Option<GameSnapshot>,
    pub final_score: Option<u32>,
}

#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<Mutex<ViewState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.inner.lock().unwrap().clone()
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        let mut inner = self.inner.lock().unwrap();
        inner.phase = SessionPhase::Running;
        inner.snapshot = Some(snapshot);
        inner.final_score = None;
    }

    pub fn set_game_over(&self, final_score: u32) {
        let mut inner = self.inner.lock().unwrap();
        inner.phase = SessionPhase::Ended;
        inner.final_score = Some(final_score);
    }
}
