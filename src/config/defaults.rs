// SPDX-License-Identifier: MPL-2.0
//! Bounds and defaults shared by the config layer and the domain newtypes.
//!
//! # Categories
//!
//! - **Idle**: Auto-fade timeout for on-screen controls
//! - **Volume**: Media element volume range
//! - **Scrubber**: Range input bounds

// ==========================================================================
// Idle Defaults
// ==========================================================================

/// Default delay without pointer movement before a playing widget turns idle.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 3000;

/// Minimum allowed idle delay.
pub const MIN_IDLE_TIMEOUT_MS: u64 = 500;

/// Maximum allowed idle delay.
pub const MAX_IDLE_TIMEOUT_MS: u64 = 60_000;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Minimum media volume (silent).
pub const MIN_VOLUME: f64 = 0.0;

/// Maximum media volume.
pub const MAX_VOLUME: f64 = 1.0;

/// Volume of a freshly created media element.
pub const DEFAULT_VOLUME: f64 = 1.0;

// ==========================================================================
// Scrubber Defaults
// ==========================================================================

/// Lower bound of the scrubber range input.
pub const SCRUBBER_MIN: f64 = 0.0;

/// Upper bound of the scrubber range input.
pub const SCRUBBER_MAX: f64 = 100.0;
