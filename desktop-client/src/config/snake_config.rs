use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::{Difficulty, GameMode, Prompt, SessionSetup};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
    #[serde(default)]
    pub last_mode: Option<GameMode>,
    #[serde(default)]
    pub last_difficulty: Option<Difficulty>,
}

impl SnakeConfig {
    pub fn setup(&self, mode: Option<GameMode>, difficulty: Option<Difficulty>) -> SessionSetup {
        SessionSetup {
            mode,
            difficulty,
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            cell_size: self.cell_size,
        }
    }

    /// Prompt to show before any game exists, based on what the config pre-selects.
    pub fn initial_prompt(&self) -> Prompt {
        match (self.last_mode, self.last_difficulty) {
            (None, _) => Prompt::SelectMode,
            (Some(_), None) => Prompt::SelectDifficulty,
            (Some(_), Some(_)) => Prompt::PressEnterToStart,
        }
    }

    /// Setup for the saved selection, when both mode and difficulty were saved.
    pub fn saved_setup(&self) -> Option<SessionSetup> {
        match (self.last_mode, self.last_difficulty) {
            (Some(mode), Some(difficulty)) => Some(self.setup(Some(mode), Some(difficulty))),
            _ => None,
        }
    }
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        if self.cell_size > 100 {
            return Err("cell_size must not exceed 100".to_string());
        }
        if self.canvas_width > 4000 || self.canvas_height > 4000 {
            return Err("canvas dimensions must not exceed 4000x4000".to_string());
        }
        // Walls mode needs the larger grid, so checking it covers both modes.
        self.setup(Some(GameMode::Walls), Some(Difficulty::Easy))
            .validate()
            .map(|_| ())
            .map_err(|e| format!("invalid canvas: {}", e))
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 600,
            cell_size: 10,
            last_mode: None,
            last_difficulty: None,
        }
    }
}
