mod app;
mod input;

pub use app::SnakeApp;
