#![forbid(unsafe_code)]

//! Repeating timers driven by the host.
//!
//! Tickers never own a thread. They register an interval with a
//! [`Scheduler`] and receive its [`TimerId`] back on every firing. The host
//! is responsible for noticing that time has passed and dispatching the
//! fired ids, one at a time and in firing order.
//!
//! [`DeterministicScheduler`] is the reference host: a monotonic clock that
//! only moves when [`DeterministicScheduler::advance`] is called.

use std::fmt;
use std::time::Duration;

/// Smallest interval accepted by [`DeterministicScheduler`].
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle returned by [`Scheduler::set_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Registry of repeating timers.
pub trait Scheduler {
    /// Register a timer that fires every `interval` until cleared.
    fn set_interval(&mut self, interval: Duration) -> TimerId;

    /// Cancel a timer. Pending firings for `id` must not be delivered
    /// afterwards. Clearing an unknown id is a no-op.
    fn clear_interval(&mut self, id: TimerId);

    /// Whether `id` is still registered.
    fn is_active(&self, id: TimerId) -> bool;
}

#[derive(Debug, Clone)]
struct Interval {
    id: TimerId,
    every: Duration,
    next_due: Duration,
}

/// Host-advanced scheduler with a virtual monotonic clock.
///
/// Firings are produced in chronological order; timers due at the same
/// instant fire in registration order.
#[derive(Debug, Default, Clone)]
pub struct DeterministicScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<Interval>,
}

impl DeterministicScheduler {
    /// Create a scheduler whose clock starts at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    pub const fn now(&self) -> Duration {
        self.now
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Advance the clock by `dt`, returning every firing that fell due, in
    /// order. A timer that is due several times within `dt` appears several
    /// times.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        let target = self.now.saturating_add(dt);
        let mut fired = Vec::new();
        loop {
            let Some(next) = self
                .timers
                .iter_mut()
                .filter(|t| t.next_due <= target)
                .min_by_key(|t| (t.next_due, t.id))
            else {
                break;
            };
            fired.push(next.id);
            next.next_due = next.next_due.saturating_add(next.every);
        }
        self.now = target;
        fired
    }
}

impl Scheduler for DeterministicScheduler {
    fn set_interval(&mut self, interval: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let every = interval.max(MIN_INTERVAL);
        self.timers.push(Interval {
            id,
            every,
            next_due: self.now.saturating_add(every),
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn clock_starts_at_zero() {
        let sched = DeterministicScheduler::new();
        assert_eq!(sched.now(), Duration::ZERO);
        assert_eq!(sched.active_count(), 0);
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut sched = DeterministicScheduler::new();
        let id = sched.set_interval(ms(20));
        assert!(sched.advance(ms(19)).is_empty());
        assert_eq!(sched.advance(ms(1)), vec![id]);
        assert_eq!(sched.advance(ms(60)), vec![id, id, id]);
        assert_eq!(sched.now(), ms(80));
    }

    #[test]
    fn simultaneous_timers_fire_in_registration_order() {
        let mut sched = DeterministicScheduler::new();
        let a = sched.set_interval(ms(10));
        let b = sched.set_interval(ms(10));
        assert_eq!(sched.advance(ms(20)), vec![a, b, a, b]);
    }

    #[test]
    fn mixed_periods_interleave_chronologically() {
        let mut sched = DeterministicScheduler::new();
        let fast = sched.set_interval(ms(10));
        let slow = sched.set_interval(ms(25));
        assert_eq!(
            sched.advance(ms(50)),
            vec![fast, fast, slow, fast, fast, fast, slow]
        );
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut sched = DeterministicScheduler::new();
        let id = sched.set_interval(ms(5));
        sched.clear_interval(id);
        assert!(!sched.is_active(id));
        assert!(sched.advance(ms(100)).is_empty());
    }

    #[test]
    fn re_registered_timer_restarts_its_phase() {
        let mut sched = DeterministicScheduler::new();
        let first = sched.set_interval(ms(20));
        sched.advance(ms(30));
        sched.clear_interval(first);
        let second = sched.set_interval(ms(20));
        assert_ne!(first, second);
        assert!(sched.advance(ms(19)).is_empty());
        assert_eq!(sched.advance(ms(1)), vec![second]);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut sched = DeterministicScheduler::new();
        let id = sched.set_interval(Duration::ZERO);
        assert_eq!(sched.advance(ms(3)), vec![id, id, id]);
    }

    #[test]
    fn clearing_unknown_id_is_noop() {
        let mut sched = DeterministicScheduler::new();
        let id = sched.set_interval(ms(5));
        sched.clear_interval(TimerId(99));
        assert!(sched.is_active(id));
    }
}
