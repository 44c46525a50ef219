//! Tunable runtime constants with serde-backed overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal margin kept on each side of a new window.
pub const DEFAULT_PLACEMENT_MARGIN: i32 = 20;
/// Cascade step applied per already-open window.
pub const DEFAULT_CASCADE_STEP: i32 = 20;
/// First z-index handed out; sits above the static desktop layers.
pub const DEFAULT_INITIAL_Z_INDEX: u32 = 10;
/// Viewports narrower than this are laid out as mobile.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: i32 = 768;
/// Highest accepted z-index seed. Leaves half of the range for allocations, which never wrap.
pub const MAX_INITIAL_Z_INDEX: u32 = u32::MAX / 2;
/// Toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub margin: i32,
    pub cascade_step: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_PLACEMENT_MARGIN,
            cascade_step: DEFAULT_CASCADE_STEP,
        }
    }
}

/// Boot screen pacing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootTiming {
    pub progress_duration_ms: u32,
    pub progress_tick_ms: u32,
    pub progress_settle_ms: u32,
    pub log_line_ms: u32,
    pub log_settle_ms: u32,
    pub lock_line_ms: u32,
    pub unlock_delay_ms: u32,
}

impl Default for BootTiming {
    fn default() -> Self {
        Self {
            progress_duration_ms: 2500,
            progress_tick_ms: 30,
            progress_settle_ms: 500,
            log_line_ms: 50,
            log_settle_ms: 800,
            lock_line_ms: 200,
            unlock_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub placement: PlacementConfig,
    pub initial_z_index: u32,
    pub mobile_breakpoint_px: i32,
    pub toast_duration_ms: u32,
    pub boot: BootTiming,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            placement: PlacementConfig::default(),
            initial_z_index: DEFAULT_INITIAL_Z_INDEX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            boot: BootTiming::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid desktop config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid desktop config: {0}")]
    Invalid(&'static str),
}

impl DesktopConfig {
    /// Parses a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`] when a value
    /// would break placement or timer scheduling.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placement.margin < 0 || self.placement.cascade_step < 0 {
            return Err(ConfigError::Invalid("placement values must be non-negative"));
        }
        if self.initial_z_index > MAX_INITIAL_Z_INDEX {
            return Err(ConfigError::Invalid("initial z-index leaves no room to stack windows"));
        }
        if self.mobile_breakpoint_px < 0 {
            return Err(ConfigError::Invalid("mobile breakpoint must be non-negative"));
        }
        if self.boot.progress_tick_ms == 0
            || self.boot.log_line_ms == 0
            || self.boot.lock_line_ms == 0
        {
            return Err(ConfigError::Invalid("boot tick intervals must be positive"));
        }
        Ok(())
    }
}
