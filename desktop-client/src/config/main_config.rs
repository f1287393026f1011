use engine::config::Validate;
use engine::game::{Difficulty, GridGeometry, SessionSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GridConfig {
    pub extent: u32,
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        // 18 cells of 20px: a 360px board.
        Self {
            extent: 18,
            cell_size: 20,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct Config {
    pub grid: GridConfig,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            difficulty: Difficulty::Medium,
        }
    }
}

impl Config {
    pub fn to_settings(&self) -> SessionSettings {
        SessionSettings {
            grid: GridGeometry::new(self.grid.extent as usize, self.grid.cell_size),
            difficulty: self.difficulty,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.to_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_grid_is_rejected() {
        let mut config = Config::default();
        config.grid.extent = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_shape() {
        let config: Config =
            serde_yaml_ng::from_str("grid:\n  extent: 9\n  cell_size: 40\ndifficulty: Hard\n")
                .unwrap();
        assert_eq!(config.grid.extent, 9);
        assert_eq!(config.grid.cell_size, 40);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }
}
