//! Configuration system for MoveForge.
//!
//! Load solver configuration from TOML or YAML files to choose the search
//! strategy, pruning mode and termination limits without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use moveforge_config::{PruningMode, SolverConfig, Strategy};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     distance = 1
//!     strategy = "reduction"
//!     pruning = "strict"
//!     first_only = true
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     move_count_limit = 12
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, Strategy::Reduction);
//! assert_eq!(config.pruning, PruningMode::Strict);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.move_count_limit(), Some(12));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use moveforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("moveforge.toml").unwrap_or_default();
//! assert_eq!(config.distance, 1);
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SolverConfig {
    /// Distance from the source to the sink.
    pub distance: i64,

    /// Which search produces candidate solutions.
    pub strategy: Strategy,

    /// Partner ranges used by the base/blacklist search.
    pub pruning: PruningMode,

    /// Stop each level at the first realizable solution.
    pub first_only: bool,

    /// First move count tried by the driver.
    pub start_k: u32,

    /// Termination configuration.
    pub termination: Option<TerminationConfig>,

    /// Progress reporting configuration.
    pub progress: ProgressConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            distance: 1,
            strategy: Strategy::default(),
            pruning: PruningMode::default(),
            first_only: false,
            start_k: 1,
            termination: None,
            progress: ProgressConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no search can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.distance < 1 {
            return Err(ConfigError::Invalid(format!(
                "distance must be at least 1, got {}",
                self.distance
            )));
        }
        if self.strategy == Strategy::Reduction && self.distance != 1 {
            return Err(ConfigError::Invalid(format!(
                "the reduction strategy requires distance 1, got {}",
                self.distance
            )));
        }
        if self.progress.interval_seconds == 0 {
            return Err(ConfigError::Invalid(
                "progress interval must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the source-to-sink distance.
    pub fn with_distance(mut self, distance: i64) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the pruning mode.
    pub fn with_pruning(mut self, pruning: PruningMode) -> Self {
        self.pruning = pruning;
        self
    }

    /// Stops each level at the first realizable solution.
    pub fn with_first_only(mut self, first_only: bool) -> Self {
        self.first_only = first_only;
        self
    }

    /// Sets the first move count tried.
    pub fn with_start_k(mut self, start_k: u32) -> Self {
        self.start_k = start_k;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the largest move count the driver will try.
    pub fn with_move_count_limit(mut self, limit: u32) -> Self {
        self.termination = Some(TerminationConfig {
            move_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress.interval_seconds = interval.as_secs().max(1);
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the move count ceiling, if configured.
    pub fn move_count_limit(&self) -> Option<u32> {
        self.termination.as_ref().and_then(|t| t.move_count_limit)
    }

    /// Resolves [`Strategy::Auto`] for the configured distance.
    pub fn effective_strategy(&self) -> Strategy {
        self.strategy.resolve(self.distance)
    }
}

/// Search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Reduction table for distance 1, multiset search otherwise.
    #[default]
    Auto,

    /// Memoized reduction over smaller and larger problems plus the
    /// base/blacklist search. Distance 1 only.
    Reduction,

    /// Enumerate magnitude multisets by the sum-of-squares identity, then
    /// realize each with forward moves. Any distance.
    Multiset,
}

impl Strategy {
    /// Replaces `Auto` with the concrete strategy for `distance`.
    pub fn resolve(self, distance: i64) -> Self {
        match self {
            Strategy::Auto if distance == 1 => Strategy::Reduction,
            Strategy::Auto => Strategy::Multiset,
            other => other,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Auto => write!(f, "auto"),
            Strategy::Reduction => write!(f, "reduction"),
            Strategy::Multiset => write!(f, "multiset"),
        }
    }
}

/// Partner ranges for the base/blacklist search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PruningMode {
    /// Partners within `n` of the base on both sides. Wider partner
    /// ranges; slower.
    Strict,

    /// Partners clipped to the corridor right of the sink. Faster, but
    /// may miss minimal solutions.
    #[default]
    Lenient,
}

impl fmt::Display for PruningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PruningMode::Strict => write!(f, "strict"),
            PruningMode::Lenient => write!(f, "lenient"),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Largest move count to try before giving up.
    pub move_count_limit: Option<u32>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_add(self.minutes_spent_limit.unwrap_or(0).saturating_mul(60));
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }
}

/// Progress reporting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ProgressConfig {
    /// Minimum seconds between two progress reports from a running search.
    pub interval_seconds: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300,
        }
    }
}

impl ProgressConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

#[cfg(test)]
mod tests;
