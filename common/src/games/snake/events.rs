use super::clock::ElapsedTime;
use super::prompt::Prompt;
use super::types::{Cell, EndReason, Input};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellPaint {
    Empty,
    Snake,
    Food,
    Wall,
}

/// Observable consequence of a state transition, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Cleared,
    CellPainted { cell: Cell, paint: CellPaint },
    ScoreChanged(u32),
    ClockChanged(ElapsedTime),
    PromptChanged(Prompt),
    FoodEaten { cell: Cell, score: u32 },
    Ended(EndReason),
}

impl GameEvent {
    pub(crate) fn paint(cell: Cell, paint: CellPaint) -> Self {
        GameEvent::CellPainted { cell, paint }
    }
}

/// Discrete input to the state machine, produced by the tick sources and the input handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    MoveTick,
    ClockTick,
    Input(Input),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub elapsed: ElapsedTime,
    pub snake_length: usize,
    pub end_reason: Option<EndReason>,
}
