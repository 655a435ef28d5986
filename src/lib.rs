//! Moteclock renders a digital clock out of animated particles.
//!
//! Once per displayed second the current time is rasterized as text on a CPU
//! pixel surface, the resulting mask is stride-sampled for "ink" points, and a
//! pool of reusable particles is reconciled against those points. Each
//! particle then eases toward its target over a fixed duration while the host
//! redraws the pool every frame.
//!
//! # Frame pipeline
//!
//! 1. **Format**: `Clock::time_of_day -> "HH:MM:SS"`
//! 2. **Rasterize** (on change): centered text onto the [`Surface`]
//! 3. **Sample** (on change): synchronous whole-surface readback, stride grid
//!    scan for opaque-black pixels (`TargetPoint`s)
//! 4. **Reconcile** (on change): resize the pool to the target count and issue
//!    one move per particle
//! 5. **Step + draw**: every frame, regardless of whether the text changed
//!
//! Everything runs on the host's frame callback; there is no parallelism and
//! no shared mutable state outside the [`ClockLoop`].
#![forbid(unsafe_code)]

mod animation;
mod clock;
mod foundation;
mod mask;
mod particles;
mod render;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use clock::driver::{Clock, ClockLoop, SystemClock, TEXT_SIZE_BASE_PX};
pub use clock::time_text::format_time;
pub use foundation::core::{Canvas, FrameRgba, Millis, Point, Rgba8, TargetPoint, Vec2};
pub use foundation::error::{MoteclockError, MoteclockResult};
pub use foundation::rng::Rng64;
pub use mask::sample::{INK_STRIDE, sample_ink_points};
pub use particles::particle::{MOVE_DURATION, PARTICLE_FILL, Particle};
pub use particles::pool::ParticlePool;
pub use render::cpu::CpuSurface;
pub use render::surface::Surface;
