//! Game loop - the tick scheduler owned by the driver

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::interval;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::event_log::{EventLogger, GameEvent};

use super::direction::Direction;
use super::sim::{Simulation, Snapshot};

/// Commands accepted by the game loop between ticks
#[derive(Debug, Clone, Copy)]
pub enum Command {
    /// Change the snake's facing direction
    Steer(Direction),
    /// Reinitialize the simulation, optionally with a new grid size
    Reset(Option<i32>),
    /// Stop the loop
    Shutdown,
}

/// Handle to a running game loop
pub struct GameHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl GameHandle {
    /// Send a command to the loop; ignored if the loop already stopped
    pub async fn send(&self, command: Command) {
        let _ = self.commands.send(command).await;
    }

    /// Subscribe to state snapshots published after every tick
    pub fn snapshots(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }
}

/// Spawn the game loop task.
///
/// Ticks run strictly sequentially on a `tokio::time::interval`; commands
/// are applied between ticks, so state mutation within a tick is atomic from
/// the driver's point of view. A reset replaces the interval outright, which
/// guarantees at most one active tick schedule.
pub fn spawn_game_loop(config: GameConfig, logger: Arc<EventLogger>) -> GameHandle {
    let (command_tx, mut command_rx) = mpsc::channel::<Command>(32);

    let mut sim = Simulation::new(config);
    let (snapshot_tx, snapshot_rx) = watch::channel(sim.snapshot());

    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(config.tick_delay_ms()));
        info!(
            grid_size = config.grid_size,
            tick_ms = config.tick_delay_ms(),
            "game loop started"
        );

        loop {
            tokio::select! {
                command = command_rx.recv() => {
                    match command {
                        Some(Command::Steer(direction)) => {
                            sim.steer(direction);
                            logger.log(GameEvent::DirectionChanged { direction });
                        }
                        Some(Command::Reset(grid_size)) => {
                            sim.reset(grid_size);
                            // Replace the pending schedule before resuming
                            ticker = interval(Duration::from_millis(
                                sim.config().tick_delay_ms(),
                            ));
                            logger.log(GameEvent::Reset {
                                grid_size: sim.config().grid_size,
                            });
                            let _ = snapshot_tx.send(sim.snapshot());
                            debug!(grid_size = sim.config().grid_size, "simulation reset");
                        }
                        Some(Command::Shutdown) | None => {
                            info!("game loop stopped");
                            break;
                        }
                    }
                }
                _ = ticker.tick() => {
                    let ate = sim.tick();
                    if ate {
                        logger.log(GameEvent::FoodEaten {
                            position: sim.snapshot().head,
                            score: sim.score(),
                        });
                    }
                    if snapshot_tx.send(sim.snapshot()).is_err() {
                        // No renderer left listening
                        break;
                    }
                }
            }
        }
    });

    GameHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    }
}
