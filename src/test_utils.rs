// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests: float assertions and a bound test widget.

pub use approx::assert_abs_diff_eq;

use crate::domain::video::IdleTimeout;
use crate::media::SimulatedMedia;
use crate::scheduler::ManualScheduler;
use crate::widget::{template, VideoBlock};

/// Widget bound to the standard template, a simulated media element and a fake clock.
pub type TestBlock = VideoBlock<SimulatedMedia, ManualScheduler>;

/// Binds a widget to the standard template with the default idle timeout.
pub fn bound_block(media: SimulatedMedia) -> TestBlock {
    VideoBlock::bind(template(), media, ManualScheduler::new(), IdleTimeout::default())
        .expect("template satisfies the markup contract")
}
