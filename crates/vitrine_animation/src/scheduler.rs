//! Timer scheduler
//!
//! Interval and timeout timers driven by an explicit logical clock. Hosts
//! advance the clock from their frame loop and dispatch the fired ids in the
//! order they came due.

use slotmap::{new_key_type, Key, KeyData, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle of a scheduled timer
    pub struct TimerId;
}

impl TimerId {
    /// Raw form for carrying the id through host event payloads
    pub fn to_raw(self) -> u64 {
        self.data().as_ffi()
    }

    pub fn from_raw(raw: u64) -> Self {
        KeyData::from_ffi(raw).into()
    }
}

#[derive(Clone, Copy, Debug)]
enum TimerKind {
    /// Re-arms after each firing
    Interval { period_ms: u64 },
    /// Fires once, then is removed
    Timeout,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    kind: TimerKind,
    due_ms: u64,
    /// Creation order, breaks ties between timers due at the same instant
    seq: u64,
}

/// Fired timer ids from one clock advance
pub type Fired = SmallVec<[TimerId; 4]>;

/// The scheduler that owns every host timer
pub struct Scheduler {
    timers: SlotMap<TimerId, Timer>,
    now_ms: u64,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Current logical time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule a repeating timer. Periods below 1ms are raised to 1ms.
    pub fn set_interval(&mut self, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        self.insert(TimerKind::Interval { period_ms }, period_ms)
    }

    /// Schedule a one-shot timer
    pub fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.insert(TimerKind::Timeout, delay_ms)
    }

    fn insert(&mut self, kind: TimerKind, delay_ms: u64) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.timers.insert(Timer {
            kind,
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
        });
        tracing::trace!(?id, ?kind, delay_ms, "timer scheduled");
        id
    }

    /// Cancel a timer, returning whether it was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance the clock by `dt_ms` and collect every firing in due order
    ///
    /// An interval that came due several times within the step appears once
    /// per period, matching what a host event loop would deliver.
    pub fn advance(&mut self, dt_ms: u64) -> Fired {
        let target = self.now_ms.saturating_add(dt_ms);
        let mut fired = Fired::new();

        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, t)| t.due_ms <= target)
                .min_by_key(|(_, t)| (t.due_ms, t.seq))
                .map(|(id, t)| (id, *t));

            let Some((id, timer)) = next else {
                break;
            };

            self.now_ms = timer.due_ms;
            fired.push(id);

            match timer.kind {
                TimerKind::Interval { period_ms } => {
                    if let Some(t) = self.timers.get_mut(id) {
                        t.due_ms = timer.due_ms.saturating_add(period_ms);
                    }
                }
                TimerKind::Timeout => {
                    self.timers.remove(id);
                }
            }
        }

        self.now_ms = target;
        fired
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_fires_once() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_timeout(100);

        assert!(scheduler.advance(99).is_empty());
        assert_eq!(scheduler.advance(1).as_slice(), &[id]);
        assert!(!scheduler.is_active(id));
        assert!(scheduler.advance(1000).is_empty());
    }

    #[test]
    fn test_interval_repeats() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_interval(6000);

        assert!(scheduler.advance(5999).is_empty());
        assert_eq!(scheduler.advance(1).len(), 1);
        // Long step covers two periods
        assert_eq!(scheduler.advance(12_000).as_slice(), &[id, id]);
        assert!(scheduler.is_active(id));
        assert_eq!(scheduler.now_ms(), 18_000);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_interval(10);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance(100).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        let late = scheduler.set_timeout(30);
        let early = scheduler.set_timeout(10);
        let tie = scheduler.set_timeout(30);

        assert_eq!(scheduler.advance(50).as_slice(), &[early, late, tie]);
    }

    #[test]
    fn test_raw_round_trip() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_timeout(5);
        assert_eq!(TimerId::from_raw(id.to_raw()), id);
    }
}
