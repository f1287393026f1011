use crate::SessionRng;
use crate::log;

use super::snake::Snake;
use super::types::{Direction, GameSnapshot, GridGeometry, Point, StepResult};

/// The simulation itself: snake, heading, food and score, advanced one cell
/// per tick. Input never mutates the heading directly; it stages a pending
/// direction that is committed at the start of the next step.
pub struct GameState {
    grid: GridGeometry,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Point,
    score: u32,
}

impl GameState {
    pub fn new(grid: GridGeometry, rng: &mut SessionRng) -> Self {
        let mut state = Self {
            grid,
            snake: Snake::spawn_at(grid.center()),
            direction: Direction::Right,
            pending_direction: None,
            food: Point::new(0, 0),
            score: 0,
        };
        state.food = state.random_cell(rng);
        state
    }

    /// Back to the initial configuration: one segment at the grid center,
    /// heading right, fresh food, score zero.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::spawn_at(self.grid.center());
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.food = self.random_cell(rng);
        self.score = 0;
    }

    /// Stages the heading for the next step. A request for the exact
    /// opposite of the committed heading is silently dropped, so the snake
    /// can never reverse through its own neck.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// One simulation step. The fatal head is never appended: on a terminal
    /// step the body is left exactly as it was before the call.
    pub fn advance(&mut self, rng: &mut SessionRng) -> StepResult {
        if let Some(next) = self.pending_direction.take() {
            self.direction = next;
        }

        let head = self.snake.head();
        let Some(next_head) = self.step_from(head) else {
            log!(
                "snake hit the wall heading {:?} from ({}, {})",
                self.direction,
                head.x,
                head.y
            );
            return StepResult::GameOver;
        };

        if self.snake.occupies(next_head) {
            log!("snake ran into itself at ({}, {})", next_head.x, next_head.y);
            return StepResult::GameOver;
        }

        self.snake.grow_head(next_head);

        if next_head == self.food {
            self.score += 1;
            self.food = self.random_cell(rng);
            log!(
                "ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
        } else {
            self.snake.drop_tail();
        }

        StepResult::Continuing
    }

    /// The cell one step ahead of `head`, or `None` when that step leaves
    /// the field.
    fn step_from(&self, head: Point) -> Option<Point> {
        match self.direction {
            Direction::Up => {
                if head.y == 0 {
                    return None;
                }
                Some(Point::new(head.x, head.y - 1))
            }
            Direction::Down => {
                if head.y + 1 >= self.grid.extent {
                    return None;
                }
                Some(Point::new(head.x, head.y + 1))
            }
            Direction::Left => {
                if head.x == 0 {
                    return None;
                }
                Some(Point::new(head.x - 1, head.y))
            }
            Direction::Right => {
                if head.x + 1 >= self.grid.extent {
                    return None;
                }
                Some(Point::new(head.x + 1, head.y))
            }
        }
    }

    // Uniform over the whole field, independently per axis. No retry when
    // the cell is under the snake: food may sit beneath the body until the
    // snake moves away.
    fn random_cell(&self, rng: &mut SessionRng) -> Point {
        Point::new(
            rng.random_range(0..self.grid.extent),
            rng.random_range(0..self.grid.extent),
        )
    }

    pub fn snapshot(&self, tick: u64) -> GameSnapshot {
        GameSnapshot {
            tick,
            segments: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> GridGeometry {
        self.grid
    }

    #[cfg(test)]
    fn set_snake(&mut self, segments: &[Point]) {
        self.snake = Snake::from_segments(segments);
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.pending_direction = None;
    }

    #[cfg(test)]
    fn place_food(&mut self, rng: &mut SessionRng) {
        self.food = self.random_cell(rng);
    }
}
