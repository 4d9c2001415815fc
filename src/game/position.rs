//! Position struct for grid cells

use serde::{Deserialize, Serialize};
use std::hash::Hash;

use super::direction::Direction;

/// A cell on the game grid.
///
/// Coordinates live in `[0, grid_size]` inclusive on both axes, so a grid of
/// size N has N+1 cells per axis. The inclusive upper bound matches the
/// original playfield exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in the given direction.
    /// Wraps around the grid edges: below 0 wraps to `grid_size`, above
    /// `grid_size` wraps to 0.
    pub fn step(&self, direction: Direction, grid_size: i32) -> Position {
        let (dx, dy) = direction.delta();

        let mut new_x = self.x + dx;
        let mut new_y = self.y + dy;

        if new_x < 0 {
            new_x = grid_size;
        } else if new_x > grid_size {
            new_x = 0;
        }

        if new_y < 0 {
            new_y = grid_size;
        } else if new_y > grid_size {
            new_y = 0;
        }

        Position::new(new_x, new_y)
    }

    /// Generate a uniformly random position with both coordinates drawn
    /// independently from `[0, grid_size]` inclusive
    pub fn random(grid_size: i32) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        let x = rng.gen_range(0..=grid_size);
        let y = rng.gen_range(0..=grid_size);

        Position::new(x, y)
    }
}
