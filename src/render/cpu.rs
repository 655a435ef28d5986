use std::sync::Arc;

use kurbo::Shape;

use crate::foundation::core::{Canvas, FrameRgba, Point, Rgba8};
use crate::foundation::error::{MoteclockError, MoteclockResult};
use crate::render::surface::Surface;

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrush {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

enum DrawOp {
    Circle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    Glyphs {
        layout: Arc<parley::Layout<TextBrush>>,
        origin: Point,
    },
}

/// CPU surface backed by `vello_cpu` for vector/text rasterization.
///
/// Draw calls record ops; [`Surface::readback_rgba8`] replays everything
/// queued since the last clear into the pixmap and copies the buffer out.
/// The surface is allocated at `display × scale` pixels so glyphs and
/// particles stay crisp on dense displays.
pub struct CpuSurface {
    canvas: Canvas,
    scale: f64,
    ops: Vec<DrawOp>,

    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,

    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    font_bytes: Vec<u8>,
    font: Option<(String, vello_cpu::peniko::FontData)>,
}

impl CpuSurface {
    /// Build a surface for a `display_width × display_height` viewport at the
    /// given pixel density. Fails fast on unusable dimensions; nothing
    /// downstream is meaningful without a surface.
    pub fn new(
        display_width: u32,
        display_height: u32,
        scale: f64,
        font_bytes: Vec<u8>,
    ) -> MoteclockResult<Self> {
        if display_width == 0 || display_height == 0 {
            return Err(MoteclockError::validation(
                "surface dimensions must be > 0",
            ));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MoteclockError::validation(
                "surface scale must be finite and > 0",
            ));
        }

        let width = (f64::from(display_width) * scale).round() as u64;
        let height = (f64::from(display_height) * scale).round() as u64;
        let w: u16 = width
            .try_into()
            .map_err(|_| MoteclockError::validation(format!("surface width exceeds u16: {width}")))?;
        let h: u16 = height.try_into().map_err(|_| {
            MoteclockError::validation(format!("surface height exceeds u16: {height}"))
        })?;
        if w == 0 || h == 0 {
            return Err(MoteclockError::validation(
                "scaled surface dimensions must be > 0",
            ));
        }

        let canvas = Canvas {
            width: u32::from(w),
            height: u32::from(h),
        };
        tracing::info!(
            width = canvas.width,
            height = canvas.height,
            scale,
            "cpu surface ready"
        );

        Ok(Self {
            canvas,
            scale,
            ops: Vec::new(),
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            font_bytes,
            font: None,
        })
    }

    fn ensure_font(&mut self) -> MoteclockResult<String> {
        if let Some((family, _)) = &self.font {
            return Ok(family.clone());
        }
        if self.font_bytes.is_empty() {
            return Err(MoteclockError::validation(
                "no font bytes provided for text rasterization",
            ));
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(self.font_bytes.clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            MoteclockError::validation("no font families registered from font bytes")
        })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MoteclockError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.font_bytes.clone()),
            0,
        );
        self.font = Some((family.clone(), font));
        Ok(family)
    }
}

impl Surface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text_centered(
        &mut self,
        text: &str,
        size_px: f32,
        color: Rgba8,
    ) -> MoteclockResult<()> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MoteclockError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let family = self.ensure_font()?;

        let brush = TextBrush {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);

        let origin = Point::new(
            (f64::from(self.canvas.width) - f64::from(layout.width())) / 2.0,
            (f64::from(self.canvas.height) - f64::from(layout.height())) / 2.0,
        );
        self.ops.push(DrawOp::Glyphs {
            layout: Arc::new(layout),
            origin,
        });
        Ok(())
    }

    fn readback_rgba8(&mut self) -> MoteclockResult<FrameRgba> {
        self.ctx.reset();
        for op in &self.ops {
            match op {
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        color.r, color.g, color.b, color.a,
                    ));
                    let circle = kurbo::Circle::new((center.x, center.y), *radius);
                    let mut path = vello_cpu::kurbo::BezPath::new();
                    for el in circle.path_elements(0.1) {
                        path.push(el);
                    }
                    self.ctx.fill_path(&path);
                }
                DrawOp::Glyphs { layout, origin } => {
                    let Some((_, font)) = &self.font else {
                        return Err(MoteclockError::surface(
                            "glyph op recorded without a registered font",
                        ));
                    };
                    self.ctx
                        .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
                    for line in layout.lines() {
                        for item in line.items() {
                            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                                continue;
                            };
                            let brush = run.style().brush;
                            self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                                brush.r, brush.g, brush.b, brush.a,
                            ));
                            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                                id: g.id,
                                x: g.x,
                                y: g.y,
                            });
                            self.ctx
                                .glyph_run(font)
                                .font_size(run.run().font_size())
                                .fill_glyphs(glyphs);
                        }
                    }
                }
            }
        }
        self.ctx.flush();

        for px in self.pixmap.data_as_u8_slice_mut() {
            *px = 0;
        }
        self.ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRgba {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
