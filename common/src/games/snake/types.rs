use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Grid axis orientation: `Up` increases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }
}

/// Grid centered on the origin. Valid columns are `-half_width..half_width`,
/// valid rows are `-half_height..half_height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub half_width: i32,
    pub half_height: i32,
}

impl GridBounds {
    pub fn new(half_width: i32, half_height: i32) -> Self {
        Self { half_width, half_height }
    }

    pub fn from_canvas(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        Self {
            half_width: (canvas_width / cell_size / 2) as i32,
            half_height: (canvas_height / cell_size / 2) as i32,
        }
    }

    pub fn min_x(&self) -> i32 {
        -self.half_width
    }

    pub fn max_x(&self) -> i32 {
        self.half_width - 1
    }

    pub fn min_y(&self) -> i32 {
        -self.half_height
    }

    pub fn max_y(&self) -> i32 {
        self.half_height - 1
    }

    #[cfg(test)]
    pub fn cell_count(&self) -> usize {
        (2 * self.half_width) as usize * (2 * self.half_height) as usize
    }

    #[cfg(test)]
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_x()..=self.max_x()).contains(&cell.x)
            && (self.min_y()..=self.max_y()).contains(&cell.y)
    }

    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(
            wrap_axis(cell.x, self.half_width),
            wrap_axis(cell.y, self.half_height),
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min_y()..=self.max_y())
            .flat_map(move |y| (self.min_x()..=self.max_x()).map(move |x| Cell::new(x, y)))
    }
}

fn wrap_axis(value: i32, half_extent: i32) -> i32 {
    if value < -half_extent {
        half_extent - 1
    } else if value >= half_extent {
        -half_extent
    } else {
        value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Classic,
    Walls,
}

impl GameMode {
    pub fn walls_enabled(&self) -> bool {
        matches!(self, GameMode::Walls)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Walls => "Walls",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn tick_interval(&self) -> Duration {
        let millis = match self {
            Difficulty::Easy => 150,
            Difficulty::Medium => 100,
            Difficulty::Hard => 75,
        };
        Duration::from_millis(millis)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    SelfCollision,
    WallCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Start,
    Turn(Direction),
}
