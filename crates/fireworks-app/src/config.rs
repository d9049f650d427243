//! Runner configuration, read from the environment.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use fireworks_core::constants::{
    DEFAULT_TICK_RATE, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use fireworks_core::viewport::Viewport;
use fireworks_sim::SimConfig;

pub const SEED_VAR: &str = "FIREWORKS_SEED";
pub const WIDTH_VAR: &str = "FIREWORKS_WIDTH";
pub const HEIGHT_VAR: &str = "FIREWORKS_HEIGHT";
pub const TICK_RATE_VAR: &str = "FIREWORKS_TICK_RATE";
pub const FRAMES_VAR: &str = "FIREWORKS_FRAMES";
pub const OUTPUT_VAR: &str = "FIREWORKS_OUTPUT";
pub const STATS_EVERY_VAR: &str = "FIREWORKS_STATS_EVERY";

/// Frames between overlay log lines by default (one second at 60Hz).
const DEFAULT_STATS_EVERY: u64 = 60;

/// Where each frame goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Overlay label through tracing.
    #[default]
    Log,
    /// One JSON frame snapshot per line on stdout.
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log" => Ok(OutputMode::Log),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("unknown output mode `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    InvalidValue { key: &'static str, value: String },
    /// A numeric variable parsed but must be non-zero.
    Zero { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
            ConfigError::Zero { key } => write!(f, "{} must be greater than zero", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Fixed RNG seed; `None` draws fresh randomness each run.
    pub seed: Option<u64>,
    pub viewport: Viewport,
    /// Target frames per second.
    pub tick_rate: u32,
    /// Frames to run before exiting; 0 runs until killed.
    pub frames: u64,
    pub output: OutputMode,
    /// Frames between overlay log lines.
    pub stats_every: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            viewport: Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            tick_rate: DEFAULT_TICK_RATE,
            frames: 0,
            output: OutputMode::default(),
            stats_every: DEFAULT_STATS_EVERY,
        }
    }
}

impl RunnerConfig {
    /// Read from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read from an arbitrary key lookup. Malformed values are logged and
    /// replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &'static str| lookup(key);

        Self {
            seed: or_default(parse_var(SEED_VAR, get(SEED_VAR)).map(|v| v.map(Some)), None),
            viewport: Viewport::new(
                or_default(non_zero(WIDTH_VAR, get(WIDTH_VAR)), defaults.viewport.width),
                or_default(non_zero(HEIGHT_VAR, get(HEIGHT_VAR)), defaults.viewport.height),
            ),
            tick_rate: or_default(
                non_zero(TICK_RATE_VAR, get(TICK_RATE_VAR)),
                defaults.tick_rate,
            ),
            frames: or_default(parse_var(FRAMES_VAR, get(FRAMES_VAR)), defaults.frames),
            output: or_default(parse_var(OUTPUT_VAR, get(OUTPUT_VAR)), defaults.output),
            stats_every: or_default(
                non_zero(STATS_EVERY_VAR, get(STATS_EVERY_VAR)),
                defaults.stats_every,
            ),
        }
    }

    /// Nominal duration of one frame.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate.max(1) as u64)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            ..Default::default()
        }
    }
}

/// Parse `value` if present. `Ok(None)` when unset or blank.
fn parse_var<T: FromStr>(
    key: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn non_zero<T>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr + Default + PartialEq,
{
    match parse_var::<T>(key, value)? {
        Some(v) if v == T::default() => Err(ConfigError::Zero { key }),
        other => Ok(other),
    }
}

fn or_default<T>(parsed: Result<Option<T>, ConfigError>, default: T) -> T {
    match parsed {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(err) => {
            tracing::warn!(error = %err, "using default");
            default
        }
    }
}
