// SPDX-License-Identifier: MPL-2.0
//! Click dispatch inside a video block.

use crate::error::MarkupError;
use crate::markup::{Element, Selector};

/// What a click inside the container resolved to.
///
/// Rules are tried in declaration order; the first whose selector matches
/// the target or any of its ancestors wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PlayButton,
    PauseButton,
    MuteButton,
    UnmuteButton,
    /// Any other button, input or the controls region. The native control
    /// handles the click.
    NativeControl,
    /// The video surface itself.
    Surface,
}

/// Outcome of a click, for hosts that need to know what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Target was disabled; the host should prevent the default action.
    Suppressed,
    Play,
    Pause,
    Mute,
    Unmute,
    /// Left to the native control.
    Native,
}

/// Parsed selectors of the click dispatch table.
#[derive(Debug, Clone)]
pub(crate) struct ClickRules {
    rules: Vec<(Selector, ClickTarget)>,
}

impl ClickRules {
    pub(crate) fn new() -> Result<Self, MarkupError> {
        let table = [
            (".btn-play", ClickTarget::PlayButton),
            (".btn-pause", ClickTarget::PauseButton),
            (".btn-mute", ClickTarget::MuteButton),
            (".btn-unmute", ClickTarget::UnmuteButton),
            ("button", ClickTarget::NativeControl),
            ("input", ClickTarget::NativeControl),
            (".controls", ClickTarget::NativeControl),
        ];
        let rules = table
            .into_iter()
            .map(|(source, target)| Ok((Selector::parse(source)?, target)))
            .collect::<Result<_, MarkupError>>()?;
        Ok(Self { rules })
    }

    /// Resolves a click given the target element and its ancestors, target first.
    pub(crate) fn resolve(&self, chain: &[&Element]) -> ClickTarget {
        self.rules
            .iter()
            .find(|(selector, _)| chain.iter().any(|el| selector.matches(el)))
            .map_or(ClickTarget::Surface, |&(_, target)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(chain: &[Element]) -> ClickTarget {
        let refs: Vec<&Element> = chain.iter().collect();
        ClickRules::new().unwrap().resolve(&refs)
    }

    #[test]
    fn button_class_on_target() {
        let chain = [
            Element::new("button").with_class("btn-pause"),
            Element::new("div").with_class("video-block"),
        ];
        assert_eq!(resolve(&chain), ClickTarget::PauseButton);
    }

    #[test]
    fn icon_inside_button_resolves_to_button() {
        let chain = [
            Element::new("svg"),
            Element::new("button").with_class("btn-unmute"),
            Element::new("div").with_class("controls"),
            Element::new("div").with_class("video-block"),
        ];
        assert_eq!(resolve(&chain), ClickTarget::UnmuteButton);
    }

    #[test]
    fn transport_classes_win_over_generic_rules() {
        // A `.btn-play` wrapper around a plain button still plays.
        let chain = [
            Element::new("button"),
            Element::new("span").with_class("btn-play"),
            Element::new("div").with_class("video-block"),
        ];
        assert_eq!(resolve(&chain), ClickTarget::PlayButton);
    }

    #[test]
    fn other_controls_are_native() {
        let range = [
            Element::new("input").with_attribute("type", "range"),
            Element::new("div").with_class("video-block"),
        ];
        assert_eq!(resolve(&range), ClickTarget::NativeControl);

        let gap = [
            Element::new("span").with_class("elapsed"),
            Element::new("div").with_class("controls"),
            Element::new("div").with_class("video-block"),
        ];
        assert_eq!(resolve(&gap), ClickTarget::NativeControl);
    }

    #[test]
    fn anything_else_is_the_surface() {
        let chain = [
            Element::new("video"),
            Element::new("div").with_class("video-block"),
        ];
        assert_eq!(resolve(&chain), ClickTarget::Surface);
    }
}
