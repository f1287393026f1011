mod main_config;

pub use main_config::{Config, GridConfig};
