use std::time::Duration;

use super::types::{Difficulty, GridGeometry};

/// Everything a session is created from: the field and the starting speed.
#[derive(Clone, Copy, Debug)]
pub struct SessionSettings {
    pub grid: GridGeometry,
    pub difficulty: Difficulty,
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid.extent < 4 || self.grid.extent > 128 {
            return Err(format!(
                "Grid extent must be between 4 and 128, got {}",
                self.grid.extent
            ));
        }
        if self.grid.cell_size < 2 || self.grid.cell_size > 100 {
            return Err(format!(
                "Cell size must be between 2 and 100, got {}",
                self.grid.cell_size
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        self.difficulty.tick_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(extent: usize, cell_size: u32) -> SessionSettings {
        SessionSettings {
            grid: GridGeometry::new(extent, cell_size),
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_default_geometry_is_valid() {
        assert!(settings(18, 20).validate().is_ok());
    }

    #[test]
    fn test_tiny_grid_is_rejected() {
        assert!(settings(3, 20).validate().is_err());
    }

    #[test]
    fn test_huge_grid_is_rejected() {
        assert!(settings(200, 20).validate().is_err());
    }

    #[test]
    fn test_degenerate_cell_size_is_rejected() {
        assert!(settings(18, 1).validate().is_err());
    }

    #[test]
    fn test_tick_interval_follows_difficulty() {
        let mut s = settings(18, 20);
        s.difficulty = Difficulty::Hard;
        assert_eq!(s.tick_interval(), Duration::from_millis(75));
    }
}
