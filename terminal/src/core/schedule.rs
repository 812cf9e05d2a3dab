//! # Scheduled Tasks
//!
//! Cancellable timers polled from the UI thread.
//!
//! Neither type owns a thread or a tokio timer. The app calls `poll(now)` once
//! per frame with the time from its [`Clock`](super::clock::Clock), which keeps
//! every state change on the UI thread and lets tests drive time by hand.
//!
//! - [`Debouncer`]: single-slot delayed value. A new `schedule` replaces the
//!   pending one and restarts the window.
//! - [`IntervalTask`]: fixed-period repeating trigger.

use std::time::{Duration, Instant};

/// Single-slot debouncer holding the most recent value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the window at `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Yield the pending value once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.cancel(),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value fires.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}

/// Repeating trigger with a fixed period.
#[derive(Debug, Clone)]
pub struct IntervalTask {
    period: Duration,
    next: Option<Instant>,
}

impl IntervalTask {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the first tick one period after `now`. No-op when already running.
    pub fn start(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.period);
        }
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    /// Push the next tick to one full period after `now`, if running.
    pub fn reschedule(&mut self, now: Instant) {
        if self.next.is_some() {
            self.next = Some(now + self.period);
        }
    }

    /// True once per elapsed period.
    ///
    /// Missed ticks are coalesced: after a long stall the task fires once and
    /// the next tick lands a full period after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                let following = next + self.period;
                self.next = Some(if following > now {
                    following
                } else {
                    now + self.period
                });
                true
            }
            _ => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_debouncer_keeps_only_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300 * MS);

        for (i, text) in ["T", "TA", "TAT", "TATA", "TATAS"].iter().enumerate() {
            let now = start + (i as u32 * 50) * MS;
            debouncer.schedule(text.to_string(), now);
            assert_eq!(debouncer.poll(now), None);
        }

        // Last keystroke at 200ms, so nothing fires before 500ms.
        assert_eq!(debouncer.poll(start + 499 * MS), None);
        assert_eq!(debouncer.poll(start + 500 * MS), Some("TATAS".to_string()));
        assert_eq!(debouncer.poll(start + 900 * MS), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debouncer_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300 * MS);
        debouncer.schedule(1, start);
        assert_eq!(debouncer.deadline(), Some(start + 300 * MS));
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.poll(start + 1000 * MS), None);
    }

    #[test]
    fn test_interval_fires_once_per_period() {
        let start = Instant::now();
        let mut task = IntervalTask::new(100 * MS);
        assert!(!task.poll(start + 1000 * MS));

        task.start(start);
        assert!(task.is_running());
        assert!(!task.poll(start + 99 * MS));
        assert!(task.poll(start + 100 * MS));
        assert!(!task.poll(start + 150 * MS));
        assert!(task.poll(start + 200 * MS));
    }

    #[test]
    fn test_interval_coalesces_missed_ticks() {
        let start = Instant::now();
        let mut task = IntervalTask::new(100 * MS);
        task.start(start);

        assert!(task.poll(start + 1050 * MS));
        assert!(!task.poll(start + 1100 * MS));
        assert!(task.poll(start + 1150 * MS));
    }

    #[test]
    fn test_interval_start_is_idempotent_and_cancellable() {
        let start = Instant::now();
        let mut task = IntervalTask::new(100 * MS);
        task.start(start);
        task.start(start + 50 * MS);
        assert_eq!(task.next_tick(), Some(start + 100 * MS));

        task.reschedule(start + 80 * MS);
        assert_eq!(task.next_tick(), Some(start + 180 * MS));

        task.cancel();
        assert!(!task.is_running());
        assert!(!task.poll(start + 500 * MS));
        task.reschedule(start + 500 * MS);
        assert!(!task.is_running());
    }
}
