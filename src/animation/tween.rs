use crate::animation::ease::Ease;
use crate::foundation::core::{Millis, Point};

/// One time-bounded interpolation of a position.
///
/// A particle holds at most one tween; installing a new one replaces the old
/// interpolation entirely, with the particle's current visual position as the
/// new start. Position queries are pure: the same `now` always yields the
/// same point, and any query at or past `start_at + duration` yields the
/// target exactly.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    start: Point,
    target: Point,
    start_at: Millis,
    duration: Millis,
    ease: Ease,
}

impl Tween {
    pub fn new(start: Point, target: Point, start_at: Millis, duration: Millis, ease: Ease) -> Self {
        Self {
            start,
            target,
            start_at,
            duration,
            ease,
        }
    }

    pub fn position_at(&self, now: Millis) -> Point {
        let elapsed = now.saturating_sub(self.start_at);
        if self.duration.0 == 0 || elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_f64() / self.duration.as_f64();
        self.start.lerp(self.target, self.ease.apply(t))
    }

    pub fn is_done(&self, now: Millis) -> bool {
        now.saturating_sub(self.start_at) >= self.duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
