// SPDX-License-Identifier: MPL-2.0
//! Media element capability.
//!
//! The controller observes and commands the playable resource only through
//! [`MediaElement`]. Hosts wrap their real element; tests and the CLI use
//! [`SimulatedMedia`].

mod event;
mod simulated;

pub use event::MediaEvent;
pub use simulated::SimulatedMedia;

use crate::domain::video::Volume;

/// Observed state and commands of a media element.
///
/// Commands are fire-and-forget. The element reports their effect later
/// through [`MediaEvent`]s (a `play()` is followed by a `play` event, and so on).
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Duration in seconds. NaN until metadata is known, infinite for streams.
    fn duration(&self) -> f64;

    /// Current volume.
    fn volume(&self) -> Volume;

    /// Whether playback is paused.
    fn is_paused(&self) -> bool;

    /// Whether playback reached the end.
    fn is_ended(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    fn set_volume(&mut self, volume: Volume);

    /// Seeks to `secs`.
    fn set_current_time(&mut self, secs: f64);
}

/// A media element that queues the events it fires until the host collects them.
pub trait MediaEventSource {
    /// Removes and returns queued events in firing order.
    fn take_events(&mut self) -> Vec<MediaEvent>;
}
