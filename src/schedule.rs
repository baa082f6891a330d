//! Fixed-interval tickers for the clock and weather refresh.

use std::time::{Duration, Instant};

/// Fires once per `interval`. Missed periods collapse into one firing so a
/// stalled loop does not replay a backlog of ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First firing is one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// First firing is at `now`.
    pub fn immediate(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now,
        }
    }

    /// True when the tick is due; advances the schedule past `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        let mut next = self.next_due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = next;
        true
    }

    pub fn time_until(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1), start);
        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert!(ticker.poll(start + Duration::from_secs(1)));
        assert!(!ticker.poll(start + Duration::from_millis(1500)));
        assert!(ticker.poll(start + Duration::from_secs(2)));
    }

    #[test]
    fn immediate_fires_at_start() {
        let start = Instant::now();
        let mut ticker = Ticker::immediate(Duration::from_secs(600), start);
        assert!(ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_secs(599)));
        assert!(ticker.poll(start + Duration::from_secs(600)));
    }

    #[test]
    fn stall_collapses_missed_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1), start);
        let late = start + Duration::from_secs(10);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late + Duration::from_millis(500)));
        assert_eq!(ticker.time_until(late), Duration::from_secs(1));
    }

    #[test]
    fn time_until_counts_down() {
        let start = Instant::now();
        let ticker = Ticker::new(Duration::from_secs(1), start);
        assert_eq!(ticker.time_until(start), Duration::from_secs(1));
        assert_eq!(
            ticker.time_until(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert_eq!(ticker.time_until(start + Duration::from_secs(5)), Duration::ZERO);
    }
}
