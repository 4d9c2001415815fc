//! Snake entity with movement and growth logic

use super::direction::Direction;
use super::food::Food;
use super::position::Position;

/// The player's snake
#[derive(Debug, Clone)]
pub struct Snake {
    /// Head position
    head: Position,
    /// Tail segments, index 0 nearest the head
    tail: Vec<Position>,
    /// Current movement direction
    direction: Direction,
}

impl Snake {
    /// Spawn a snake at a random position with an empty tail, facing right
    pub fn spawn(grid_size: i32) -> Self {
        Self::at(Position::random(grid_size), Direction::default())
    }

    /// Create a snake at a specific position
    pub fn at(head: Position, direction: Direction) -> Self {
        Self {
            head,
            tail: Vec::new(),
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.head
    }

    /// Get the tail segments, ordered by distance from the head
    pub fn tail(&self) -> &[Position] {
        &self.tail
    }

    /// Get the current direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the movement direction. Any direction is accepted, including a
    /// full reversal.
    pub fn steer(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance one cell in the current direction (called each game tick).
    ///
    /// The head wraps around the grid edges; each tail segment then takes
    /// the position its predecessor held before this tick, in a single pass
    /// over the tail.
    pub fn advance(&mut self, grid_size: i32) {
        let mut prev = self.head;
        self.head = self.head.step(self.direction, grid_size);

        for segment in &mut self.tail {
            // segment takes prev, prev becomes the segment's pre-move value
            std::mem::swap(segment, &mut prev);
        }
    }

    /// Append one tail segment one cell behind the current tail end (or the
    /// head if the tail is empty), opposite the current direction.
    ///
    /// Does not move existing segments and does not wrap; a segment placed
    /// past an edge is pulled back into range by the following ticks.
    pub fn grow(&mut self) {
        let anchor = self.tail.last().copied().unwrap_or(self.head);
        let (dx, dy) = self.direction.opposite().delta();
        self.tail.push(Position::new(anchor.x + dx, anchor.y + dy));
    }

    /// Check if the head is on the food, by exact position equality
    pub fn eats(&self, food: &Food) -> bool {
        food.is_at(&self.head)
    }
}
