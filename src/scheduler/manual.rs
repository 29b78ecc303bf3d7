// SPDX-License-Identifier: MPL-2.0
//! Fake-clock scheduler.

use super::{Scheduler, TimerId, TimerIdSequence};
use std::time::Duration;

/// Scheduler whose clock only moves when [`advance`](Self::advance) is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    ids: TimerIdSequence,
    pending: Vec<(TimerId, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the fake clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|&(pending, _)| pending == id)
    }

    /// Moves the clock forward and returns the timers that came due, in
    /// deadline order. Returned timers are no longer pending.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<_> = self
            .pending
            .iter()
            .copied()
            .filter(|&(_, deadline)| deadline <= now)
            .collect();
        due.sort_by_key(|&(id, deadline)| (deadline, id));

        self.pending.retain(|&(_, deadline)| deadline > now);
        due.into_iter().map(|(id, _)| id).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = self.ids.next();
        self.pending.push((id, self.now + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(pending, _)| pending != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn timer_fires_once_at_deadline() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.schedule(3000 * MS);

        assert!(scheduler.advance(2999 * MS).is_empty());
        assert!(scheduler.is_pending(id));
        assert_eq!(scheduler.advance(MS), [id]);
        assert!(!scheduler.is_pending(id));
        assert!(scheduler.advance(10_000 * MS).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.schedule(100 * MS);
        scheduler.cancel(id);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.advance(200 * MS).is_empty());
    }

    #[test]
    fn due_timers_come_back_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let late = scheduler.schedule(300 * MS);
        let early = scheduler.schedule(100 * MS);
        assert_eq!(scheduler.advance(500 * MS), [early, late]);
        assert_eq!(scheduler.now(), 500 * MS);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.schedule(MS);
        scheduler.cancel(first);
        let second = scheduler.schedule(MS);
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn deadlines_are_relative_to_current_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(1000 * MS);
        let id = scheduler.schedule(500 * MS);
        assert!(scheduler.advance(499 * MS).is_empty());
        assert_eq!(scheduler.advance(MS), [id]);
    }
}
