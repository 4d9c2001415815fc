//! Food entity - spawns randomly on the grid

use super::position::Position;

/// A food item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    /// Position of the food
    pub position: Position,
}

impl Food {
    /// Create a new food at a random position
    pub fn new(grid_size: i32) -> Self {
        Self {
            position: Position::random(grid_size),
        }
    }

    /// Create food at a specific position
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Move the food to a new random position.
    /// Cells occupied by the snake are not excluded.
    pub fn relocate(&mut self, grid_size: i32) {
        self.position = Position::random(grid_size);
    }

    /// Check if a position matches the food position exactly
    pub fn is_at(&self, pos: &Position) -> bool {
        self.position == *pos
    }
}
