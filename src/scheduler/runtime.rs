// SPDX-License-Identifier: MPL-2.0
//! Scheduler backed by Tokio timers.

use super::{Scheduler, TimerId, TimerIdSequence};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Arms each timer as a Tokio task that reports its id when it fires.
///
/// Must be used from within a Tokio runtime. A timer cancelled after its
/// task already sent the id can still show up on the receiver; the widget
/// discards such stale ids.
#[derive(Debug)]
pub struct TokioScheduler {
    ids: TimerIdSequence,
    fired: mpsc::UnboundedSender<TimerId>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Creates the scheduler and the receiving end for fired timer ids.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (fired, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            ids: TimerIdSequence::default(),
            fired,
            tasks: HashMap::new(),
        };
        (scheduler, receiver)
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        let id = self.ids.next();
        let fired = self.fired.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host shut down.
            let _ = fired.send(id);
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
