// SPDX-License-Identifier: MPL-2.0
//! Media events the widget reacts to.

use std::fmt;
use std::str::FromStr;

/// Native media events, named after the DOM events they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// Enough data to start playing.
    CanPlay,
    /// Enough data to play to the end without buffering.
    CanPlayThrough,
    /// Playback stalled waiting for data.
    Waiting,
    DurationChange,
    TimeUpdate,
    Play,
    VolumeChange,
    Pause,
    Ended,
}

impl MediaEvent {
    pub const ALL: [Self; 9] = [
        Self::CanPlay,
        Self::CanPlayThrough,
        Self::Waiting,
        Self::DurationChange,
        Self::TimeUpdate,
        Self::Play,
        Self::VolumeChange,
        Self::Pause,
        Self::Ended,
    ];

    /// DOM event name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CanPlay => "canplay",
            Self::CanPlayThrough => "canplaythrough",
            Self::Waiting => "waiting",
            Self::DurationChange => "durationchange",
            Self::TimeUpdate => "timeupdate",
            Self::Play => "play",
            Self::VolumeChange => "volumechange",
            Self::Pause => "pause",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an event name the widget does not listen to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMediaEvent(pub String);

impl fmt::Display for UnknownMediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown media event `{}`", self.0)
    }
}

impl std::error::Error for UnknownMediaEvent {}

impl FromStr for MediaEvent {
    type Err = UnknownMediaEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownMediaEvent(s.to_string()))
    }
}
