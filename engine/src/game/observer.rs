use super::types::GameSnapshot;

/// Boundary to the presentation layer. The session task invokes these hooks
/// right after the corresponding state mutation; the core never touches the
/// UI directly.
#[allow(async_fn_in_trait)]
pub trait GameObserver: Send + 'static {
    /// Fired after every continuing step.
    async fn on_tick(&self, snapshot: GameSnapshot);

    /// Fired after every score increment, before the matching `on_tick`.
    async fn on_score_changed(&self, score: u32);

    /// Fired once when a step ends the game.
    async fn on_game_over(&self, final_score: u32);

    /// Fired after a reset/restart, with the fresh initial state.
    async fn on_reset(&self, snapshot: GameSnapshot);
}
