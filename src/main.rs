//! Single-player grid Snake
//!
//! The simulation core lives in `game`; this binary is the driver: it owns
//! the terminal, the keyboard, and the tick scheduler.

use std::io::{stdout, Stdout, Write};
use std::sync::Arc;

use crossterm::{
    cursor::{Hide, Show},
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod event_log;
mod game;
mod input;
mod render;

use config::GameConfig;
use event_log::EventLogger;
use game::game_loop::{spawn_game_loop, Command, GameHandle};
use input::{InputHandler, KeyAction};
use render::Renderer;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Logs go to stderr; the game itself draws on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snake_sim=info".into()),
        )
        .init();

    let config = GameConfig::from_env();
    info!(
        grid_size = config.grid_size,
        ticks_per_second = config.ticks_per_second,
        "starting snake"
    );

    let logger = Arc::new(EventLogger::new());
    let handle = spawn_game_loop(config, logger);

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, Hide)?;

    let result = run(&handle, &mut out).await;

    execute!(out, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    handle.send(Command::Shutdown).await;
    result
}

/// Drive the game: feed key presses to the loop, draw every snapshot
async fn run(handle: &GameHandle, out: &mut Stdout) -> std::io::Result<()> {
    let input_handler = InputHandler::new();
    let renderer = Renderer::new();
    let mut events = EventStream::new();
    let mut snapshots = handle.snapshots();

    renderer.draw(out, &snapshots.borrow().clone())?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(Ok(event)) = maybe_event else {
                    break;
                };
                if let Event::Key(key) = event {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match input_handler.handle_key_event(key) {
                        KeyAction::Steer(direction) => {
                            handle.send(Command::Steer(direction)).await;
                        }
                        KeyAction::Restart => {
                            handle.send(Command::Reset(None)).await;
                        }
                        KeyAction::Quit => break,
                        KeyAction::None => {}
                    }
                }
            }

            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                renderer.draw(out, &snapshot)?;
            }
        }
    }

    out.flush()
}
