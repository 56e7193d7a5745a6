mod main_config;
mod snake_config;

pub use main_config::{get_config_manager, Config};
pub use snake_config::SnakeConfig;
