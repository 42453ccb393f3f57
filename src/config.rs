//! Runtime configuration read from `PACMAN_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PACMAN_TICK_MS` | 20 | Tick interval in milliseconds |
//! | `PACMAN_LIVES` | 3 | Starting lives (1-9) |
//! | `PACMAN_SEED` | random | Seed for ghost redirection |
//! | `PACMAN_LOG_PATH` | unset | Log file; logging is off without it |
//!
//! Unparsable or out-of-range values fall back to the default and are
//! listed in [`GameConfig::ignored`] so the caller can log them once the
//! logger is up.

use crate::types::{STARTING_LIVES, TICK_MS};

pub const ENV_TICK_MS: &str = "PACMAN_TICK_MS";
pub const ENV_LIVES: &str = "PACMAN_LIVES";
pub const ENV_SEED: &str = "PACMAN_SEED";
pub const ENV_LOG_PATH: &str = "PACMAN_LOG_PATH";

const MAX_LIVES: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_ms: u32,
    pub lives: u8,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    /// Variables that were set but could not be used
    pub ignored: Vec<&'static str>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            lives: STARTING_LIVES,
            seed: None,
            log_path: None,
            ignored: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman::config::GameConfig;
    ///
    /// let config = GameConfig::from_lookup(|key| match key {
    ///     "PACMAN_LIVES" => Some("5".to_string()),
    ///     "PACMAN_TICK_MS" => Some("fast".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.lives, 5);
    /// assert_eq!(config.tick_ms, 20);
    /// assert_eq!(config.ignored, vec!["PACMAN_TICK_MS"]);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        if let Some(raw) = get(ENV_TICK_MS) {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.tick_ms = ms,
                _ => config.ignored.push(ENV_TICK_MS),
            }
        }

        if let Some(raw) = get(ENV_LIVES) {
            match raw.parse::<u8>() {
                Ok(n) if (1..=MAX_LIVES).contains(&n) => config.lives = n,
                _ => config.ignored.push(ENV_LIVES),
            }
        }

        if let Some(raw) = get(ENV_SEED) {
            match raw.parse::<u32>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.ignored.push(ENV_SEED),
            }
        }

        config.log_path = get(ENV_LOG_PATH);
        config
    }

    /// The configured seed, or a fresh one from the OS entropy source.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
