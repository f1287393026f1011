mod game_state;
mod observer;
mod session;
mod settings;
mod snake;
mod types;

pub use game_state::GameState;
pub use observer::GameObserver;
pub use session::{GameSession, SessionCommand};
pub use settings::SessionSettings;
pub use snake::Snake;
pub use types::{
    Difficulty, Direction, GameSnapshot, GridGeometry, Point, SessionPhase, StepResult,
};
