// SPDX-License-Identifier: MPL-2.0
//! Video widget newtypes.
//!
//! This module provides type-safe wrappers for widget values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, the range a media element accepts).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f64 = crate::config::MIN_VOLUME;
    /// Maximum volume level.
    pub const MAX: f64 = crate::config::MAX_VOLUME;
    /// Default volume level.
    pub const DEFAULT: f64 = crate::config::DEFAULT_VOLUME;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// A media element rejects anything outside this range, so the newtype
/// clamps on construction. NaN collapses to silence.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    /// Silence. Writing this to a media element is what "mute" means here.
    pub const MUTED: Self = Self(volume_bounds::MIN);

    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self::MUTED;
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true only for a volume of exactly zero.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 == volume_bounds::MIN
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// ScrubberValue
// =============================================================================

/// Scrubber bounds, matching the `min`/`max` of the range input.
pub mod scrubber_bounds {
    /// Start of the media.
    pub const MIN: f64 = crate::config::SCRUBBER_MIN;
    /// End of the media.
    pub const MAX: f64 = crate::config::SCRUBBER_MAX;
}

/// Position of the scrubber in percent of the media duration.
///
/// Construction sanitizes the way a range input does: out-of-range values
/// clamp, and a value that is not a number falls back to the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScrubberValue(f64);

impl ScrubberValue {
    /// Creates a scrubber value, sanitizing like a range input.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::midpoint();
        }
        Self(value.clamp(scrubber_bounds::MIN, scrubber_bounds::MAX))
    }

    /// Scrubber value for `current_secs` of `duration_secs`.
    ///
    /// No rounding is applied beyond float precision.
    #[must_use]
    pub fn from_position(current_secs: f64, duration_secs: f64) -> Self {
        Self::new((current_secs / duration_secs) * scrubber_bounds::MAX)
    }

    fn midpoint() -> Self {
        Self(scrubber_bounds::MIN + (scrubber_bounds::MAX - scrubber_bounds::MIN) / 2.0)
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Media position this scrubber value points at.
    #[must_use]
    pub fn position_secs(self, duration_secs: f64) -> f64 {
        (self.0 / scrubber_bounds::MAX) * duration_secs
    }
}

impl Default for ScrubberValue {
    fn default() -> Self {
        Self(scrubber_bounds::MIN)
    }
}

impl fmt::Display for ScrubberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// IdleTimeout
// =============================================================================

/// Idle timeout bounds in milliseconds.
pub mod idle_bounds {
    /// Minimum idle delay.
    pub const MIN: u64 = crate::config::MIN_IDLE_TIMEOUT_MS;
    /// Maximum idle delay.
    pub const MAX: u64 = crate::config::MAX_IDLE_TIMEOUT_MS;
    /// Default idle delay.
    pub const DEFAULT: u64 = crate::config::DEFAULT_IDLE_TIMEOUT_MS;
}

/// Delay without pointer movement after which a playing widget turns idle.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms – 60 s).
///
/// # Example
///
/// ```
/// use video_block::domain::video::IdleTimeout;
///
/// let timeout = IdleTimeout::new(5000);
/// assert_eq!(timeout.as_millis(), 5000);
///
/// // Values outside range are clamped
/// let too_high = IdleTimeout::new(1_000_000);
/// assert_eq!(too_high.as_millis(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimeout(u64);

impl IdleTimeout {
    /// Creates a new idle timeout, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(idle_bounds::MIN, idle_bounds::MAX))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self(idle_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
