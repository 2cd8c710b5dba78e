//! Short-lived UI flags that dismiss themselves after a fixed delay

use std::time::{Duration, Instant};

/// A flag that is visible for `ttl` after being shown.
///
/// Time is passed in explicitly so callers (and tests) own the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transient {
    shown_at: Option<Instant>,
    ttl: Duration,
}

impl Transient {
    pub fn new(ttl: Duration) -> Self {
        Self { shown_at: None, ttl }
    }

    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match self.shown_at {
            Some(at) => now.saturating_duration_since(at) < self.ttl,
            None => false,
        }
    }

    /// Drop the flag once it has expired. Returns true if it just expired.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() && !self.is_visible(now) {
            self.shown_at = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_until_ttl() {
        let start = Instant::now();
        let mut flag = Transient::new(Duration::from_secs(3));
        assert!(!flag.is_visible(start));

        flag.show(start);
        assert!(flag.is_visible(start + Duration::from_millis(2999)));
        assert!(!flag.is_visible(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_expire_reports_once() {
        let start = Instant::now();
        let mut flag = Transient::new(Duration::from_secs(2));
        flag.show(start);
        assert!(!flag.expire(start + Duration::from_secs(1)));
        assert!(flag.expire(start + Duration::from_secs(2)));
        assert!(!flag.expire(start + Duration::from_secs(5)));
    }
}
