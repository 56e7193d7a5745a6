mod clock;
mod entity;
mod events;
mod game_state;
mod prompt;
mod render;
mod session;
mod settings;
mod types;
mod walls;

pub use clock::ElapsedTime;
pub use entity::Snake;
pub use events::{CellPaint, GameEvent, SessionEvent, SessionSummary};
pub use game_state::SnakeGameState;
pub use prompt::Prompt;
pub use render::{RenderSink, Rgb, render_events};
pub use session::{SessionCommand, SnakeSession};
pub use settings::{MIN_HALF_EXTENT, MIN_WALLS_HALF_EXTENT, SessionSetup, SetupError, SnakeSessionSettings};
pub use types::{Cell, Difficulty, Direction, EndReason, GameMode, GridBounds, Input, SessionStatus};
pub use walls::build_walls;
