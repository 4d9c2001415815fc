//! Game module

pub mod direction;
pub mod food;
pub mod game_loop;
pub mod position;
pub mod sim;
pub mod snake;

pub use direction::Direction;
pub use food::Food;
pub use position::Position;
pub use sim::{Simulation, Snapshot};
pub use snake::Snake;
