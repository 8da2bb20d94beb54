//! Sliding-window counter used by the request limiter.
//!
//! The estimate for a hit at time `t` weights the previous window's count by the
//! share of it still covered by a window ending at `t`:
//! `previous_count * (1 - elapsed / W) + count + 1`.

use chrono::{DateTime, TimeDelta, Utc};

/// Stored counter state for one limiter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub window_start: DateTime<Utc>,
    pub count: i32,
    pub previous_count: i32,
}

impl WindowState {
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            window_start: now,
            count: 0,
            previous_count: 0,
        }
    }

    pub fn from_entity(entity: &entity::rate_limit_token::Model) -> Self {
        Self {
            window_start: entity.window_start,
            count: entity.count,
            previous_count: entity.previous_count,
        }
    }
}

/// Result of registering one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    /// Denied; the client should retry after this many seconds.
    Denied { retry_after: u64 },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// Limit of `limit` hits per `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    pub limit: u32,
    pub window: TimeDelta,
}

impl SlidingWindow {
    pub fn new(limit: u32, window_seconds: u64) -> Self {
        let seconds = i64::try_from(window_seconds.max(1)).unwrap_or(i64::MAX);

        Self {
            limit,
            window: TimeDelta::seconds(seconds),
        }
    }

    /// Registers a hit at `now` against `state`.
    ///
    /// Returns the state to store and the decision. A denied hit leaves the
    /// current count untouched.
    pub fn hit(&self, state: Option<WindowState>, now: DateTime<Utc>) -> (WindowState, Decision) {
        let mut state = state.unwrap_or_else(|| WindowState::fresh(now));

        let elapsed = now - state.window_start;
        if elapsed >= self.window * 2 || elapsed < TimeDelta::zero() {
            state = WindowState::fresh(now);
        } else if elapsed >= self.window {
            state.previous_count = state.count;
            state.count = 0;
            state.window_start += self.window;
        }

        let window_ms = self.window.num_milliseconds() as f64;
        let elapsed_ms = (now - state.window_start).num_milliseconds() as f64;
        let weight = (1.0 - elapsed_ms / window_ms).clamp(0.0, 1.0);
        let estimate = f64::from(state.previous_count) * weight + f64::from(state.count) + 1.0;

        if estimate > f64::from(self.limit) {
            let remaining = state.window_start + self.window - now;
            let retry_after = remaining.num_seconds().max(1) as u64;

            return (state, Decision::Denied { retry_after });
        }

        state.count += 1;

        (state, Decision::Allowed)
    }

    /// Rows untouched for this long carry no information and can be purged.
    pub fn stale_after(&self) -> TimeDelta {
        self.window * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn admits_up_to_the_limit_then_denies() {
        let limiter = SlidingWindow::new(3, 60);
        let mut state = None;

        for _ in 0..3 {
            let (next, decision) = limiter.hit(state, at(0));
            assert!(decision.is_allowed());
            state = Some(next);
        }

        let (next, decision) = limiter.hit(state, at(1));
        assert_eq!(decision, Decision::Denied { retry_after: 59 });
        assert_eq!(next.count, 3);
    }

    #[test]
    fn weights_previous_window() {
        let limiter = SlidingWindow::new(4, 60);
        let state = WindowState {
            window_start: at(0),
            count: 4,
            previous_count: 0,
        };

        // Halfway through the next window the previous 4 hits weigh as 2.
        let (state, decision) = limiter.hit(Some(state), at(90));
        assert!(decision.is_allowed());
        assert_eq!(state.window_start, at(60));
        assert_eq!(state.previous_count, 4);
        assert_eq!(state.count, 1);

        let (state, decision) = limiter.hit(Some(state), at(90));
        assert!(decision.is_allowed());

        let (_, decision) = limiter.hit(Some(state), at(90));
        assert!(!decision.is_allowed());
    }

    #[test]
    fn resets_after_two_idle_windows() {
        let limiter = SlidingWindow::new(2, 60);
        let state = WindowState {
            window_start: at(0),
            count: 2,
            previous_count: 2,
        };

        let (state, decision) = limiter.hit(Some(state), at(125));
        assert!(decision.is_allowed());
        assert_eq!(state, WindowState {
            window_start: at(125),
            count: 1,
            previous_count: 0,
        });
    }
}
