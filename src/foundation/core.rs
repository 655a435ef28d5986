pub use kurbo::{Point, Vec2};

/// Animation timebase in milliseconds since an arbitrary epoch.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub fn saturating_sub(self, other: Millis) -> Millis {
        Millis(self.0.saturating_sub(other.0))
    }

    pub fn saturating_add(self, other: Millis) -> Millis {
        Millis(self.0.saturating_add(other.0))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn shorter_side(self) -> u32 {
        self.width.min(self.height)
    }
}

/// Straight-alpha RGBA8 fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque_black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

/// One sampled "ink" pixel of the rasterized time text, a particle's
/// destination. Recomputed fully on every text change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TargetPoint {
    pub x: u32,
    pub y: u32,
}

impl TargetPoint {
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Premultiplied RGBA8 pixels, row-major, 4 bytes per pixel.
///
/// Produced by [`crate::Surface::readback_rgba8`]; reading one back is a
/// synchronous O(width × height) copy of the whole surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}
