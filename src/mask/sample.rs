use crate::foundation::core::{FrameRgba, TargetPoint};

/// Grid stride, in device pixels, between sampled mask positions.
pub const INK_STRIDE: u32 = 6;

/// Scan a read-back frame for opaque-black pixels on a fixed grid.
///
/// The grid steps by `stride` on both axes, outer loop over x and inner loop
/// over y, both ascending. That scan order is a contract: target index `i`
/// is assigned to particle index `i`, so reordering the scan reassigns which
/// particle flies to which point.
///
/// Only an exact `(0, 0, 0, 255)` match counts as ink; antialiased glyph
/// edges fall below full alpha and are skipped. The result is fully
/// materialized because reconciliation needs the total count up front.
pub fn sample_ink_points(frame: &FrameRgba, stride: u32) -> Vec<TargetPoint> {
    let stride = stride.max(1) as usize;
    let w = frame.width as usize;
    let h = frame.height as usize;

    let mut points = Vec::new();
    for x in (0..w).step_by(stride) {
        for y in (0..h).step_by(stride) {
            let idx = (y * w + x) * 4;
            let Some(px) = frame.data.get(idx..idx + 4) else {
                continue;
            };
            if px == [0, 0, 0, 255] {
                points.push(TargetPoint {
                    x: x as u32,
                    y: y as u32,
                });
            }
        }
    }
    points
}

#[cfg(test)]
#[path = "../../tests/unit/mask/sample.rs"]
mod tests;
