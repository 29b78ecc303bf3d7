// SPDX-License-Identifier: MPL-2.0
//! `video_block` is a headless controller for HTML-style video widgets.
//!
//! It binds to a container with a media element, a scrubber, time labels and
//! transport buttons, and turns media events and pointer input into state
//! classes on that container. Media, timers and markup are injected, so the
//! whole widget runs without a browser.

#![doc(html_root_url = "https://docs.rs/video_block/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod markup;
pub mod media;
pub mod scheduler;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;
