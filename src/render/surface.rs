use crate::foundation::core::{Canvas, FrameRgba, Point, Rgba8};
use crate::foundation::error::MoteclockResult;

/// Drawing surface the engine renders against.
///
/// The engine only needs four capabilities from its host surface: clearing,
/// filled circles, centered text, and a synchronous whole-surface pixel
/// readback. [`crate::CpuSurface`] is the shipped implementation; tests
/// substitute doubles.
pub trait Surface {
    /// Pixel dimensions of the surface.
    fn canvas(&self) -> Canvas;

    /// Display pixel density the surface was sized with. Glyph and particle
    /// sizes scale by this factor.
    fn scale(&self) -> f64;

    /// Drop everything drawn since the last clear.
    fn clear(&mut self);

    /// Queue a filled circle at `center` with the given radius and fill.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// Queue the given string centered both horizontally and vertically.
    fn fill_text_centered(&mut self, text: &str, size_px: f32, color: Rgba8)
    -> MoteclockResult<()>;

    /// Rasterize everything queued since the last clear and copy out the
    /// pixels. Blocking and O(width × height); callers should treat it as a
    /// deliberate sampling step, not a cheap accessor.
    fn readback_rgba8(&mut self) -> MoteclockResult<FrameRgba>;
}
