//! Progressive reveal pacing for formatted replies.

use std::time::{Duration, Instant};

/// Tracks how many chunks of a reply are visible. Replies with a single
/// chunk, or without formatting, show everything at once; otherwise one more
/// chunk appears each time `delay` elapses. Dropping the state cancels the
/// remaining schedule.
#[derive(Debug, Clone)]
pub(crate) struct RevealState {
    visible: usize,
    total: usize,
    delay: Duration,
    last_reveal: Instant,
}

impl RevealState {
    pub(crate) fn new(total: usize, paced: bool, delay: Duration, now: Instant) -> Self {
        let visible = if paced && total > 1 { 1 } else { total };
        Self {
            visible,
            total,
            delay,
            last_reveal: now,
        }
    }

    /// Advance if the delay elapsed. Returns true when a chunk was revealed.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        if self.done() {
            return false;
        }
        if now.duration_since(self.last_reveal) >= self.delay {
            self.visible += 1;
            self.last_reveal = now;
            true
        } else {
            false
        }
    }

    pub(crate) fn visible(&self) -> usize {
        self.visible
    }

    pub(crate) fn done(&self) -> bool {
        self.visible >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(800);

    #[test]
    fn single_chunk_shows_immediately() {
        let state = RevealState::new(1, true, DELAY, Instant::now());
        assert_eq!(state.visible(), 1);
        assert!(state.done());
    }

    #[test]
    fn unpaced_reply_shows_everything() {
        let state = RevealState::new(4, false, DELAY, Instant::now());
        assert_eq!(state.visible(), 4);
        assert!(state.done());
    }

    #[test]
    fn paced_reply_starts_with_one_chunk() {
        let state = RevealState::new(3, true, DELAY, Instant::now());
        assert_eq!(state.visible(), 1);
        assert!(!state.done());
    }

    #[test]
    fn tick_advances_once_per_elapsed_delay() {
        let start = Instant::now();
        let mut state = RevealState::new(3, true, DELAY, start);

        assert!(!state.tick(start + Duration::from_millis(100)));
        assert_eq!(state.visible(), 1);

        assert!(state.tick(start + DELAY));
        assert_eq!(state.visible(), 2);

        // next reveal is measured from the previous one
        assert!(!state.tick(start + DELAY + Duration::from_millis(100)));
        assert!(state.tick(start + DELAY + DELAY));
        assert_eq!(state.visible(), 3);
        assert!(state.done());
    }

    #[test]
    fn tick_stops_at_total() {
        let start = Instant::now();
        let mut state = RevealState::new(2, true, DELAY, start);
        assert!(state.tick(start + DELAY));
        assert!(!state.tick(start + DELAY + DELAY));
        assert_eq!(state.visible(), 2);
    }
}
