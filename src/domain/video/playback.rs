// SPDX-License-Identifier: MPL-2.0
//! Video widget playback state.
//!
//! The three mutually exclusive playback classes a widget can carry.

/// Represents the current playback state of a video widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing played yet, or playback reached the end.
    #[default]
    Ready,
    /// Media is currently playing.
    Playing,
    /// Media is paused at current position.
    Paused,
}

impl PlaybackState {
    /// Returns true if the media is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the media is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the widget is ready (initial or ended).
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Class name written to the container for this state.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }

    /// All states, in class-writing order.
    pub const ALL: [Self; 3] = [Self::Ready, Self::Playing, Self::Paused];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ready() {
        assert_eq!(PlaybackState::default(), PlaybackState::Ready);
    }

    #[test]
    fn test_state_checks() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Paused.is_playing());

        assert!(PlaybackState::Paused.is_paused());
        assert!(!PlaybackState::Playing.is_paused());

        assert!(PlaybackState::Ready.is_ready());
        assert!(!PlaybackState::Playing.is_ready());
    }

    #[test]
    fn test_class_names_are_distinct() {
        let names: Vec<_> = PlaybackState::ALL.iter().map(|s| s.class_name()).collect();
        assert_eq!(names, ["ready", "playing", "paused"]);
    }
}
