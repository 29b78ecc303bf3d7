// SPDX-License-Identifier: MPL-2.0
//! Domain layer: value types and playback rules of a video widget.
//!
//! Nothing here depends on markup, media hosts or timers, only on `std`.
//!
//! - [`video`]: [`PlaybackState`](video::PlaybackState),
//!   [`Volume`](video::Volume), [`ScrubberValue`](video::ScrubberValue),
//!   [`IdleTimeout`](video::IdleTimeout)

pub mod video;
