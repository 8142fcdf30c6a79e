//! Tracker configuration.
//!
//! A [`TouchConfig`] is an immutable value built once per tracker. Defaults
//! match the behaviour hosts expect from a free two-axis scroller with
//! momentum enabled.

use crate::axis::AxisSet;
use std::fmt;

/// Default minimum travel (px) before a release can produce momentum.
pub const DEFAULT_MIN_PX_FOR_MOMENTUM: f32 = 3.0;

/// Default number of trailing speed samples averaged for momentum.
pub const DEFAULT_MAX_POINTS_FOR_MOMENTUM: usize = 3;

/// Default idle time (ms) between the last move and release that still
/// allows momentum.
pub const DEFAULT_MAX_TIME_DIFF_FOR_MOMENTUM_MS: u64 = 66;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchConfig {
    /// Axes to track.
    pub axis: AxisSet,
    /// Axis-lock arbitration against sibling consumers. Single axis only.
    pub lock: bool,
    /// Hint for the host to register its native listeners in the capture
    /// phase. Forced on by `lock`.
    pub capture: bool,
    pub momentum: bool,
    pub min_px_for_momentum: f32,
    pub max_points_for_momentum: usize,
    pub max_time_diff_for_momentum_ms: u64,
    /// Ask the host to suppress native default behaviour on every handled event.
    pub prevent_default_events: bool,
    /// Ask the host to stop propagation of every handled event.
    pub stop_events: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            axis: AxisSet::XY,
            lock: false,
            capture: false,
            momentum: true,
            min_px_for_momentum: DEFAULT_MIN_PX_FOR_MOMENTUM,
            max_points_for_momentum: DEFAULT_MAX_POINTS_FOR_MOMENTUM,
            max_time_diff_for_momentum_ms: DEFAULT_MAX_TIME_DIFF_FOR_MOMENTUM_MS,
            prevent_default_events: false,
            stop_events: false,
        }
    }
}

impl TouchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: impl Into<AxisSet>) -> Self {
        self.axis = axis.into();
        self
    }

    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_momentum(mut self, momentum: bool) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_min_px_for_momentum(mut self, px: f32) -> Self {
        self.min_px_for_momentum = px;
        self
    }

    pub fn with_max_points_for_momentum(mut self, points: usize) -> Self {
        self.max_points_for_momentum = points;
        self
    }

    pub fn with_max_time_diff_for_momentum_ms(mut self, ms: u64) -> Self {
        self.max_time_diff_for_momentum_ms = ms;
        self
    }

    pub fn with_prevent_default_events(mut self, prevent: bool) -> Self {
        self.prevent_default_events = prevent;
        self
    }

    pub fn with_stop_events(mut self, stop: bool) -> Self {
        self.stop_events = stop;
        self
    }

    /// Checks the configuration and returns its normalised form.
    ///
    /// Locking needs exactly one free axis, so `lock` is dropped when both
    /// axes are configured. A locked tracker always captures.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.axis.is_empty() {
            return Err(ConfigError::EmptyAxis);
        }
        if self.max_points_for_momentum == 0 {
            return Err(ConfigError::ZeroMomentumSamples);
        }
        if !self.min_px_for_momentum.is_finite() || self.min_px_for_momentum < 0.0 {
            return Err(ConfigError::InvalidMinDistance(self.min_px_for_momentum));
        }

        if self.lock && self.axis.len() > 1 {
            log::warn!("axis lock ignored: {:?} tracks more than one axis", self.axis);
            self.lock = false;
        }
        if self.lock {
            self.capture = true;
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidAxis(char),
    EmptyAxis,
    ZeroMomentumSamples,
    InvalidMinDistance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAxis(c) => write!(f, "unknown axis '{c}'; expected 'x' or 'y'"),
            ConfigError::EmptyAxis => write!(f, "at least one axis must be tracked"),
            ConfigError::ZeroMomentumSamples => {
                write!(f, "max_points_for_momentum must be at least 1")
            }
            ConfigError::InvalidMinDistance(px) => {
                write!(f, "min_px_for_momentum must be a finite, non-negative value; got {px}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
