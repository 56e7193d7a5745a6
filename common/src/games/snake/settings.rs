use std::time::Duration;

use thiserror::Error;

use super::prompt::Prompt;
use super::types::{Difficulty, GameMode, GridBounds};

pub const MIN_HALF_EXTENT: i32 = 5;
/// Walls take two cells per side, and the snake needs room to move before reaching them.
pub const MIN_WALLS_HALF_EXTENT: i32 = MIN_HALF_EXTENT + 3;

/// What the player picked in the UI before pressing "New Game".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSetup {
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no game mode selected")]
    NoModeSelected,
    #[error("no difficulty selected")]
    NoDifficultySelected,
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("grid of {half_width}x{half_height} half-cells is too small, need at least {min_half_extent} each way")]
    GridTooSmall { half_width: i32, half_height: i32, min_half_extent: i32 },
}

impl SetupError {
    /// Prompt to show the player, if the error maps onto one of the standard prompts.
    pub fn prompt(&self) -> Option<Prompt> {
        match self {
            SetupError::NoModeSelected => Some(Prompt::SelectMode),
            SetupError::NoDifficultySelected => Some(Prompt::SelectDifficulty),
            SetupError::ZeroCellSize | SetupError::GridTooSmall { .. } => None,
        }
    }

    pub fn prompt_text(&self) -> String {
        match self.prompt() {
            Some(prompt) => prompt.to_string(),
            None => self.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub bounds: GridBounds,
    pub cell_size: u32,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub tick_interval: Duration,
}

impl SnakeSessionSettings {
    pub fn walls_enabled(&self) -> bool {
        self.mode.walls_enabled()
    }
}

impl SessionSetup {
    pub fn validate(&self) -> Result<SnakeSessionSettings, SetupError> {
        let mode = self.mode.ok_or(SetupError::NoModeSelected)?;
        let difficulty = self.difficulty.ok_or(SetupError::NoDifficultySelected)?;

        if self.cell_size == 0 {
            return Err(SetupError::ZeroCellSize);
        }

        let bounds = GridBounds::from_canvas(self.canvas_width, self.canvas_height, self.cell_size);
        let min_half_extent = if mode.walls_enabled() {
            MIN_WALLS_HALF_EXTENT
        } else {
            MIN_HALF_EXTENT
        };
        if bounds.half_width < min_half_extent || bounds.half_height < min_half_extent {
            return Err(SetupError::GridTooSmall {
                half_width: bounds.half_width,
                half_height: bounds.half_height,
                min_half_extent,
            });
        }

        Ok(SnakeSessionSettings {
            bounds,
            cell_size: self.cell_size,
            mode,
            difficulty,
            tick_interval: difficulty.tick_interval(),
        })
    }
}
