use std::collections::HashSet;

use super::types::{Cell, GridBounds};

/// Two nested rectangular rings: the outermost ring of the grid and the ring just inside it.
pub fn build_walls(bounds: &GridBounds) -> HashSet<Cell> {
    let mut walls = HashSet::new();
    for inset in 0..2 {
        let left = bounds.min_x() + inset;
        let right = bounds.max_x() - inset;
        let bottom = bounds.min_y() + inset;
        let top = bounds.max_y() - inset;

        for x in left..=right {
            walls.insert(Cell::new(x, bottom));
            walls.insert(Cell::new(x, top));
        }
        for y in bottom..=top {
            walls.insert(Cell::new(left, y));
            walls.insert(Cell::new(right, y));
        }
    }
    walls
}
