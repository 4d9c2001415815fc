//! Simulation state and the per-tick state transition

use serde::Serialize;
use tracing::debug;

use crate::config::GameConfig;

use super::direction::Direction;
use super::food::Food;
use super::position::Position;
use super::snake::Snake;

/// Read-only view of the simulation, consumed by the renderer and the
/// event log
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub grid_size: i32,
    pub head: Position,
    pub tail: Vec<Position>,
    pub food: Position,
    pub score: u32,
}

/// The complete single-player simulation: one snake, one food, a score.
///
/// All state transitions are synchronous and infallible; scheduling and
/// rendering belong to the driver.
pub struct Simulation {
    config: GameConfig,
    snake: Snake,
    food: Food,
    score: u32,
}

impl Simulation {
    /// Create a fresh simulation from a validated config
    pub fn new(config: GameConfig) -> Self {
        Self {
            snake: Snake::spawn(config.grid_size),
            food: Food::new(config.grid_size),
            score: 0,
            config,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Order matters: the snake moves first, then a food collision is
    /// resolved (score, growth, relocation), so a newly grown segment shows
    /// up at the trailing position on the next tick. Returns true when food
    /// was eaten this tick.
    pub fn tick(&mut self) -> bool {
        self.snake.advance(self.config.grid_size);

        let ate = self.snake.eats(&self.food);
        if ate {
            self.score += 1;
            self.snake.grow();
            self.food.relocate(self.config.grid_size);
            debug!(score = self.score, "food eaten");
        }

        ate
    }

    /// Change the snake's facing direction
    pub fn steer(&mut self, direction: Direction) {
        self.snake.steer(direction);
    }

    /// Reinitialize food, snake and score from scratch, optionally with a
    /// new grid size. Must be used instead of a live resize.
    pub fn reset(&mut self, grid_size: Option<i32>) {
        if let Some(size) = grid_size {
            self.config.grid_size = size;
        }
        self.snake = Snake::spawn(self.config.grid_size);
        self.food = Food::new(self.config.grid_size);
        self.score = 0;
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current config
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Capture the state needed for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.config.grid_size,
            head: self.snake.head(),
            tail: self.snake.tail().to_vec(),
            food: self.food.position,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_with(head: Position, direction: Direction, food: Position) -> Simulation {
        let mut sim = Simulation::new(GameConfig::default());
        sim.snake = Snake::at(head, direction);
        sim.food = Food::at(food);
        sim
    }

    #[test]
    fn test_tick_without_food() {
        let mut sim = sim_with(
            Position::new(5, 5),
            Direction::Right,
            Position::new(0, 0),
        );

        let ate = sim.tick();
        assert!(!ate);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.snake.head(), Position::new(6, 5));
        assert!(sim.snake.tail().is_empty());
        // food stays put when not eaten
        assert_eq!(sim.food.position, Position::new(0, 0));
    }

    #[test]
    fn test_tick_consumption() {
        // head=(5,5) facing right, food directly ahead
        let mut sim = sim_with(
            Position::new(5, 5),
            Direction::Right,
            Position::new(6, 5),
        );

        let ate = sim.tick();
        assert!(ate);
        assert_eq!(sim.score(), 1);
        assert_eq!(sim.snake.head(), Position::new(6, 5));
        assert_eq!(sim.snake.tail(), &[Position::new(5, 5)]);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut sim = sim_with(
            Position::new(5, 5),
            Direction::Right,
            Position::new(6, 5),
        );

        sim.tick();
        let after_eat = sim.score();
        assert_eq!(after_eat, 1);

        // Subsequent ticks without food never lower the score
        sim.food = Food::at(Position::new(0, 0));
        for _ in 0..10 {
            sim.tick();
            assert!(sim.score() >= after_eat);
        }
    }

    #[test]
    fn test_wraparound_through_tick() {
        let mut sim = sim_with(
            Position::new(0, 5),
            Direction::Left,
            Position::new(10, 10),
        );
        sim.tick();
        assert_eq!(sim.snake.head(), Position::new(20, 5));
    }

    #[test]
    fn test_reset_with_new_grid_size() {
        let mut sim = sim_with(
            Position::new(5, 5),
            Direction::Right,
            Position::new(6, 5),
        );
        sim.tick();
        assert_eq!(sim.score(), 1);

        sim.reset(Some(15));
        assert_eq!(sim.config().grid_size, 15);
        assert_eq!(sim.score(), 0);
        assert!(sim.snake.tail().is_empty());
        assert!((0..=15).contains(&sim.snake.head().x));
        assert!((0..=15).contains(&sim.snake.head().y));
        assert!((0..=15).contains(&sim.food.position.x));
        assert!((0..=15).contains(&sim.food.position.y));
    }

    #[test]
    fn test_reset_keeps_grid_size_when_unspecified() {
        let mut sim = Simulation::new(GameConfig::default());
        let size = sim.config().grid_size;
        sim.reset(None);
        assert_eq!(sim.config().grid_size, size);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut sim = sim_with(
            Position::new(5, 5),
            Direction::Right,
            Position::new(6, 5),
        );
        sim.tick();

        let snap = sim.snapshot();
        assert_eq!(snap.head, Position::new(6, 5));
        assert_eq!(snap.tail, vec![Position::new(5, 5)]);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.grid_size, sim.config().grid_size);
    }
}
