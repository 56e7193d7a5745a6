use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    SelectMode,
    SelectDifficulty,
    PressEnterToStart,
    GameStarted,
    GameOver,
}

impl Prompt {
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::SelectMode => "Select a Mode",
            Prompt::SelectDifficulty => "Select a Difficulty",
            Prompt::PressEnterToStart => "Press Enter to Start",
            Prompt::GameStarted => "Game Started",
            Prompt::GameOver => "Game Over",
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
