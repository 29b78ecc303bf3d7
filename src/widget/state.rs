// SPDX-License-Identifier: MPL-2.0
//! Widget state: one playback state plus independent overlays.
//!
//! Every transition is a small method on a `Copy` value, so the rules can
//! be checked without any markup, media or timer attached.

use crate::domain::video::PlaybackState;

/// Class written while the volume is zero.
pub const MUTED_CLASS: &str = "muted";

/// Class written while a playing widget has seen no pointer movement.
pub const IDLE_CLASS: &str = "idle";

/// Class written on each control while controls are disabled.
pub const DISABLED_CLASS: &str = "disabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    playback: PlaybackState,
    muted: bool,
    idle: bool,
    controls_enabled: bool,
}

impl WidgetState {
    /// Fresh widget: ready, not muted, not idle.
    #[must_use]
    pub fn new(controls_enabled: bool) -> Self {
        Self {
            playback: PlaybackState::Ready,
            muted: false,
            idle: false,
            controls_enabled,
        }
    }

    #[must_use]
    pub fn playback(self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn is_muted(self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self.idle
    }

    #[must_use]
    pub fn controls_enabled(self) -> bool {
        self.controls_enabled
    }

    /// `play` event.
    pub fn play(&mut self) {
        self.playback = PlaybackState::Playing;
    }

    /// `pause` event. Leaving playback also leaves idle.
    pub fn pause(&mut self) {
        self.playback = PlaybackState::Paused;
        self.idle = false;
    }

    /// `ended` event. Leaving playback also leaves idle.
    pub fn end(&mut self) {
        self.playback = PlaybackState::Ready;
        self.idle = false;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Enters idle. Refused unless playing; returns whether idle is now set.
    pub fn enter_idle(&mut self) -> bool {
        if self.playback.is_playing() {
            self.idle = true;
        }
        self.idle
    }

    pub fn leave_idle(&mut self) {
        self.idle = false;
    }

    pub fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    /// Every container class this state controls, paired with whether it is set.
    pub fn classes(self) -> impl Iterator<Item = (&'static str, bool)> {
        PlaybackState::ALL
            .into_iter()
            .map(move |state| (state.class_name(), state == self.playback))
            .chain([(MUTED_CLASS, self.muted), (IDLE_CLASS, self.idle)])
    }

    /// Names of the container classes currently set.
    pub fn active_classes(self) -> impl Iterator<Item = &'static str> {
        self.classes().filter_map(|(class, on)| on.then_some(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playback_classes(state: WidgetState) -> usize {
        state
            .active_classes()
            .filter(|c| ["ready", "playing", "paused"].contains(c))
            .count()
    }

    #[test]
    fn new_state_is_ready_only() {
        let state = WidgetState::new(true);
        assert_eq!(state.active_classes().collect::<Vec<_>>(), ["ready"]);
        assert!(state.controls_enabled());
    }

    #[test]
    fn exactly_one_playback_class_after_any_sequence() {
        type Step = fn(&mut WidgetState);
        let steps: [Step; 3] = [WidgetState::play, WidgetState::pause, WidgetState::end];

        // Every sequence of length four over {play, pause, end}.
        for n in 0..81 {
            let mut state = WidgetState::new(true);
            let mut code = n;
            for _ in 0..4 {
                steps[code % 3](&mut state);
                code /= 3;
                assert_eq!(playback_classes(state), 1, "sequence {n} broke exclusivity");
            }
        }
    }

    #[test]
    fn idle_requires_playing() {
        let mut state = WidgetState::new(true);
        assert!(!state.enter_idle());

        state.play();
        assert!(state.enter_idle());
        assert!(state.is_idle());

        state.pause();
        assert!(!state.is_idle());
        assert!(!state.enter_idle());
    }

    #[test]
    fn ending_clears_idle() {
        let mut state = WidgetState::new(true);
        state.play();
        state.enter_idle();
        state.end();
        assert!(!state.is_idle());
        assert_eq!(state.playback(), PlaybackState::Ready);
    }

    #[test]
    fn overlays_are_independent_of_playback() {
        let mut state = WidgetState::new(false);
        state.set_muted(true);
        state.play();
        state.enter_idle();
        assert_eq!(
            state.active_classes().collect::<Vec<_>>(),
            ["playing", "muted", "idle"]
        );
        state.set_muted(false);
        assert!(!state.is_muted());
        assert!(state.is_idle());
    }
}
