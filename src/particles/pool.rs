use crate::foundation::core::{Canvas, Millis, TargetPoint};
use crate::foundation::rng::Rng64;
use crate::particles::particle::Particle;
use crate::render::surface::Surface;

/// Owns the particle collection and keeps it sized to the current target set.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Resize the pool to match `targets` and issue one move per particle.
    ///
    /// Targets are assigned by index: particle `i` flies to `targets[i]`.
    /// Existing particles keep their identity and radius; the deficit is
    /// filled with fresh spawns on the entrance circle, and the surplus is
    /// truncated from the tail.
    #[tracing::instrument(skip(self, targets, rng), fields(targets = targets.len(), pool = self.particles.len()))]
    pub fn reconcile(
        &mut self,
        targets: &[TargetPoint],
        canvas: Canvas,
        scale: f64,
        now: Millis,
        rng: &mut Rng64,
    ) {
        for (i, target) in targets.iter().enumerate() {
            if i == self.particles.len() {
                self.particles.push(Particle::spawn(canvas, scale, rng));
            }
            self.particles[i].move_to(target.to_point(), now);
        }
        self.particles.truncate(targets.len());
    }

    /// Advance every in-flight move to `now`.
    pub fn step(&mut self, now: Millis) {
        for p in &mut self.particles {
            p.step(now);
        }
    }

    /// Redraw every pool member at its current position, mid-move or not.
    pub fn draw_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            p.draw(surface);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/pool.rs"]
mod tests;
