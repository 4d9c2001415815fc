//! Game configuration

use tracing::warn;

/// Default grid size N; coordinates range over [0, N] inclusive
pub const DEFAULT_GRID_SIZE: i32 = 20;

/// Default simulation rate in ticks per second
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Environment variable overriding the grid size
pub const GRID_SIZE_ENV: &str = "SNAKE_GRID_SIZE";

/// Environment variable overriding the tick rate
pub const TICK_RATE_ENV: &str = "SNAKE_TICK_RATE";

/// Enable the JSONL game event log
pub const ENABLE_EVENT_LOGGING: bool = true;

/// Event log file path
pub const EVENT_LOG_FILE: &str = "game_events.log";

/// Validated simulation configuration.
///
/// The core only ever sees positive values; anything non-numeric or
/// non-positive coming from the environment is coerced to the defaults here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid size N (grid spans [0, N] inclusive per axis)
    pub grid_size: i32,
    /// Simulation rate in ticks per second
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

impl GameConfig {
    /// Build a config from the environment, falling back to defaults for
    /// missing, non-numeric or non-positive values
    pub fn from_env() -> Self {
        Self {
            grid_size: env_positive(GRID_SIZE_ENV, DEFAULT_GRID_SIZE),
            ticks_per_second: env_positive(TICK_RATE_ENV, DEFAULT_TICKS_PER_SECOND),
        }
    }

    /// Tick interval in milliseconds. Rates above 1000 ticks per second
    /// floor to a 1ms interval; the scheduler requires a non-zero period.
    pub fn tick_delay_ms(&self) -> u64 {
        (1000 / u64::from(self.ticks_per_second)).max(1)
    }
}

fn env_positive<T>(var: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + From<u8> + Copy + std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => parse_positive(var, &raw, default),
        Err(_) => default,
    }
}

fn parse_positive<T>(var: &str, raw: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + From<u8> + Copy + std::fmt::Display,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::from(0u8) => value,
        _ => {
            warn!("{var}={raw:?} is not a positive integer, using {default}");
            default
        }
    }
}
