// SPDX-License-Identifier: MPL-2.0
//! Video block widget.
//!
//! A [`VideoBlock`] binds to a container holding a media element, a
//! scrubber, elapsed/duration labels and transport buttons, then turns
//! media events and pointer input into state classes on that container.
//!
//! # Example
//!
//! ```
//! use video_block::domain::video::{IdleTimeout, PlaybackState, Volume};
//! use video_block::markup::Selector;
//! use video_block::media::SimulatedMedia;
//! use video_block::scheduler::ManualScheduler;
//! use video_block::widget::{template, VideoBlock};
//!
//! let media = SimulatedMedia::new(Volume::new(0.8));
//! let mut block =
//!     VideoBlock::bind(template(), media, ManualScheduler::new(), IdleTimeout::default())?;
//! block.media_mut().load(125.0);
//! block.pump_media_events();
//!
//! let play = block
//!     .container()
//!     .query_selector(&Selector::parse(".btn-play")?)
//!     .expect("template has a play button");
//! block.handle_click(&play)?;
//! block.pump_media_events();
//!
//! assert_eq!(block.playback(), PlaybackState::Playing);
//! assert!(block.container().has_class("playing"));
//! # Ok::<(), video_block::error::Error>(())
//! ```

mod click;
mod controller;
mod state;
mod template;
mod time_format;

pub use click::{ClickAction, ClickTarget};
pub use controller::{bind_all, VideoBlock};
pub use state::{WidgetState, DISABLED_CLASS, IDLE_CLASS, MUTED_CLASS};
pub use template::{template, CONTAINER_CLASS};
pub use time_format::format_clock;
