use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body: a deque of cells ordered head first, mirrored by a hash set
/// for O(1) occupancy checks. The two structures always hold the same cells.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    occupied: HashSet<Point>,
}

impl Snake {
    pub fn spawn_at(start: Point) -> Self {
        let mut body = VecDeque::new();
        let mut occupied = HashSet::new();
        body.push_back(start);
        occupied.insert(start);
        Self { body, occupied }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.occupied.contains(&point)
    }

    pub fn grow_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.occupied.insert(point);
    }

    pub fn drop_tail(&mut self) {
        let tail = self.body.pop_back().expect("Snake body should never be empty");
        self.occupied.remove(&tail);
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[Point]) -> Self {
        let body: VecDeque<Point> = segments.iter().copied().collect();
        let occupied: HashSet<Point> = segments.iter().copied().collect();
        Self { body, occupied }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_single_segment() {
        let snake = Snake::spawn_at(Point::new(4, 4));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(4, 4));
        assert!(snake.occupies(Point::new(4, 4)));
    }

    #[test]
    fn test_grow_and_drop_keep_the_mirror_in_sync() {
        let mut snake = Snake::spawn_at(Point::new(4, 4));
        snake.grow_head(Point::new(5, 4));
        assert_eq!(snake.head(), Point::new(5, 4));
        assert!(snake.occupies(Point::new(4, 4)));

        snake.drop_tail();
        assert_eq!(snake.len(), 1);
        assert!(!snake.occupies(Point::new(4, 4)));
        assert!(snake.occupies(Point::new(5, 4)));
    }
}
