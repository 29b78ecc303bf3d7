// SPDX-License-Identifier: MPL-2.0
//! Standard video block markup.

use crate::markup::Element;

/// Class identifying a video block container.
pub const CONTAINER_CLASS: &str = "video-block";

fn button(class: &str, label: &str) -> Element {
    Element::new("button")
        .with_class("btn")
        .with_class(class)
        .with_attribute("type", "button")
        .with_attribute("disabled", "")
        .with_attribute("aria-label", label)
}

/// Builds the markup a video block is rendered with.
///
/// Controls start disabled and are enabled once the media can play.
pub fn template() -> Element {
    Element::new("div")
        .with_class(CONTAINER_CLASS)
        .with_child(Element::new("video").with_attribute("preload", "metadata"))
        .with_child(
            Element::new("div")
                .with_class("controls")
                .with_child(button("btn-play", "Play"))
                .with_child(button("btn-pause", "Pause"))
                .with_child(button("btn-mute", "Mute"))
                .with_child(button("btn-unmute", "Unmute"))
                .with_child(
                    Element::new("input")
                        .with_attribute("type", "range")
                        .with_attribute("min", "0")
                        .with_attribute("max", "100")
                        .with_attribute("step", "any")
                        .with_attribute("value", "0")
                        .with_attribute("disabled", ""),
                )
                .with_child(Element::new("span").with_class("elapsed").with_text("00:00:00"))
                .with_child(Element::new("span").with_class("duration").with_text("00:00:00")),
        )
}
