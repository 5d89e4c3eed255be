//! Render configuration, read from `TUI_CRAFT_*` environment variables.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_FRAME_MS, DEFAULT_MAX_RENDER};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Furthest depth drawn; also the depth a reset cell holds.
    pub max_render: f64,
    /// Fixed sleep between frames.
    pub frame_delay: Duration,
    /// Scene color seed.
    pub seed: u32,
    /// Log file; logging is off when unset (stdout is the render surface).
    pub log_path: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_render: DEFAULT_MAX_RENDER,
            frame_delay: Duration::from_millis(DEFAULT_FRAME_MS),
            seed: 1,
            log_path: None,
        }
    }
}

impl RenderConfig {
    /// Create from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults; an unset seed
    /// is derived from the wall clock.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let max_render = lookup("TUI_CRAFT_MAX_RENDER")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 1.0)
            .unwrap_or(defaults.max_render);

        let frame_delay = lookup("TUI_CRAFT_FRAME_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.frame_delay);

        let seed = lookup("TUI_CRAFT_SEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("TUI_CRAFT_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            max_render,
            frame_delay,
            seed,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
