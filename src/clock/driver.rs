use crate::clock::time_text;
use crate::foundation::core::{Millis, Rgba8};
use crate::foundation::error::MoteclockResult;
use crate::foundation::rng::Rng64;
use crate::mask::sample::{INK_STRIDE, sample_ink_points};
use crate::particles::pool::ParticlePool;
use crate::render::surface::Surface;

/// Base glyph size in display units; multiplied by the surface scale.
pub const TEXT_SIZE_BASE_PX: f32 = 140.0;

const TEXT_FILL: Rgba8 = Rgba8::opaque_black();

/// Source of both the animation timebase and the displayed wall-clock time.
///
/// The engine reads wall-clock time at one-second display granularity only;
/// `now` feeds the sub-second tween math and should be monotonic.
pub trait Clock {
    fn now(&self) -> Millis;
    fn time_of_day(&self) -> chrono::NaiveTime;
}

/// Process clock: monotonic milliseconds since construction plus the local
/// wall-clock time of day.
pub struct SystemClock {
    started: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        Millis(self.started.elapsed().as_millis() as u64)
    }

    fn time_of_day(&self) -> chrono::NaiveTime {
        chrono::Local::now().time()
    }
}

/// Per-frame driver of the whole animation.
///
/// Owns the particle pool, the RNG, and the last displayed text; the host
/// owns the frame loop and calls [`ClockLoop::tick`] once per display frame
/// until teardown. There are no globals: dropping the loop drops the whole
/// animation state.
pub struct ClockLoop {
    pool: ParticlePool,
    last_text: Option<String>,
    rng: Rng64,
}

impl ClockLoop {
    pub fn new(seed: u64) -> Self {
        Self {
            pool: ParticlePool::new(),
            last_text: None,
            rng: Rng64::new(seed),
        }
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Run one display frame.
    ///
    /// Clears the surface, then on a second boundary rasterizes the new time
    /// text, samples it for ink points (a blocking whole-surface readback),
    /// and reconciles the pool; on every frame, in-flight moves advance and
    /// all particles are redrawn. On change frames the text stays on the
    /// surface beneath the particles until the next clear.
    pub fn tick<S, C>(&mut self, surface: &mut S, clock: &C) -> MoteclockResult<()>
    where
        S: Surface + ?Sized,
        C: Clock + ?Sized,
    {
        let now = clock.now();
        surface.clear();

        let text = time_text::format_time(clock.time_of_day());
        if self.last_text.as_deref() != Some(text.as_str()) {
            let size_px = TEXT_SIZE_BASE_PX * surface.scale() as f32;
            surface.fill_text_centered(&text, size_px, TEXT_FILL)?;
            let frame = surface.readback_rgba8()?;
            let targets = sample_ink_points(&frame, INK_STRIDE);
            tracing::debug!(
                text = %text,
                targets = targets.len(),
                pool = self.pool.len(),
                "time text changed"
            );
            self.pool.reconcile(
                &targets,
                surface.canvas(),
                surface.scale(),
                now,
                &mut self.rng,
            );
            self.last_text = Some(text);
        }

        self.pool.step(now);
        self.pool.draw_all(surface);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/driver.rs"]
mod tests;
