use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::core::{Canvas, Millis, Point, Rgba8};
use crate::foundation::rng::Rng64;
use crate::render::surface::Surface;

/// How long one move toward a new target takes.
pub const MOVE_DURATION: Millis = Millis(500);

/// Semi-transparent fill shared by every particle.
pub const PARTICLE_FILL: Rgba8 = Rgba8::new(0x54, 0x45, 0x54, 0x4d);

/// Radius bounds in display units; scaled by pixel density at spawn.
const RADIUS_RANGE: (f64, f64) = (2.0, 7.0);

/// One reusable dot of the clock face.
///
/// A particle owns its position and a fixed radius, plus at most one
/// in-flight [`Tween`]. Issuing a new move replaces the old tween outright,
/// starting from wherever the particle currently is, so stale interpolations
/// can never fight over the position.
#[derive(Clone, Debug)]
pub struct Particle {
    pos: Point,
    radius: f64,
    tween: Option<Tween>,
}

impl Particle {
    /// Spawn at a random angle on the entrance circle of radius
    /// `min(width, height) / 2` centered on the canvas, with a radius drawn
    /// from the density-scaled range.
    pub fn spawn(canvas: Canvas, scale: f64, rng: &mut Rng64) -> Self {
        let lo = (RADIUS_RANGE.0 * scale).round() as i64;
        let hi = (RADIUS_RANGE.1 * scale).round() as i64;
        let radius = rng.range_inclusive(lo, hi) as f64;

        let r = f64::from(canvas.shorter_side()) / 2.0;
        let rad = (rng.range_inclusive(0, 360) as f64).to_radians();
        let center = canvas.center();
        let pos = Point::new(center.x + r * rad.cos(), center.y + r * rad.sin());

        Self {
            pos,
            radius,
            tween: None,
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_moving(&self) -> bool {
        self.tween.is_some()
    }

    /// Begin (or restart) a linear move from the current position to
    /// `target` over [`MOVE_DURATION`].
    pub fn move_to(&mut self, target: Point, now: Millis) {
        self.tween = Some(Tween::new(self.pos, target, now, MOVE_DURATION, Ease::Linear));
    }

    /// Advance the in-flight move, snapping to the target and retiring the
    /// tween once its duration has elapsed.
    pub fn step(&mut self, now: Millis) {
        let Some(tween) = self.tween else {
            return;
        };
        self.pos = tween.position_at(now);
        if tween.is_done(now) {
            self.tween = None;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, PARTICLE_FILL);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/particle.rs"]
mod tests;
