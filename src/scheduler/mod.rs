// SPDX-License-Identifier: MPL-2.0
//! Single-shot deferred actions.
//!
//! The widget arms and cancels its idle timer through [`Scheduler`]. When a
//! timer fires, the host hands its [`TimerId`] back to the widget, which
//! ignores ids it no longer waits for.
//!
//! - [`ManualScheduler`]: fake clock advanced explicitly, for tests and
//!   deterministic hosts.
//! - [`TokioScheduler`]: real timers on a Tokio runtime, reported over a channel.

mod manual;
mod runtime;

pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

use std::fmt;
use std::time::Duration;

/// Identifies one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Hands out increasing timer ids.
#[derive(Debug, Default)]
struct TimerIdSequence(u64);

impl TimerIdSequence {
    fn next(&mut self) -> TimerId {
        self.0 += 1;
        TimerId(self.0)
    }
}

/// Capability to arm and cancel single-shot timers.
pub trait Scheduler {
    /// Arms a timer firing once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancels a timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}
