use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A cell on the playing field. Coordinates are in cells, not pixels; the
/// renderer multiplies by the cell size when painting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

/// Game speed selection. Lower tick interval means a faster game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(75),
        }
    }
}

/// Square playing field: `extent` cells per side, each cell `cell_size`
/// pixels on screen. Fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub extent: usize,
    pub cell_size: u32,
}

impl GridGeometry {
    pub fn new(extent: usize, cell_size: u32) -> Self {
        Self { extent, cell_size }
    }

    pub fn canvas_size(&self) -> u32 {
        self.extent as u32 * self.cell_size
    }

    pub fn center(&self) -> Point {
        Point::new(self.extent / 2, self.extent / 2)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.extent && point.y < self.extent
    }
}

/// Outcome of one simulation step. Wall and self collision are deliberately
/// folded into one terminal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Continuing,
    GameOver,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Ended,
}

/// Immutable copy of the observable state, handed to observers after each
/// step. Segments are ordered head first.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub tick: u64,
    pub segments: Vec<Point>,
    pub food: Point,
    pub score: u32,
}
