use std::collections::{HashSet, VecDeque};

use super::types::Cell;

/// Snake body kept as an ordered queue (head at the front) plus a set of the same cells.
///
/// Both containers are only touched through `push_head` and `pop_tail`, so they always hold
/// exactly the same cells and never a duplicate.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
}

impl Snake {
    pub const INITIAL_LENGTH: i32 = 5;

    /// Horizontal snake centered on `center`, head on the right.
    pub fn centered(center: Cell) -> Self {
        let half = Self::INITIAL_LENGTH / 2;
        let cells = (-half..=half).map(|dx| Cell::new(center.x + dx, center.y));
        Self::from_tail_to_head(cells).expect("Horizontal line never overlaps itself")
    }

    /// Builds a snake from cells ordered tail first. Returns `None` for an empty input or
    /// when a cell repeats.
    pub fn from_tail_to_head(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let mut snake = Self {
            body: VecDeque::new(),
            body_set: HashSet::new(),
        };
        for cell in cells {
            if !snake.push_head(cell) {
                return None;
            }
        }
        if snake.body.is_empty() {
            return None;
        }
        Some(snake)
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    /// Cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Adds `cell` as the new head. Refuses (and changes nothing) if the cell is occupied.
    pub fn push_head(&mut self, cell: Cell) -> bool {
        if !self.body_set.insert(cell) {
            return false;
        }
        self.body.push_front(cell);
        true
    }

    /// Removes the tail cell. The last remaining cell is never removed.
    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.body.len() == self.body_set.len()
            && self.body.iter().all(|cell| self.body_set.contains(cell))
    }
}
