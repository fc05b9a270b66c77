use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{TitleError, TitleResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TextBrushRgba8 {
    pub fn opaque(rgb: Rgb) -> Self {
        let quant = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: quant(rgb.r),
            g: quant(rgb.g),
            b: quant(rgb.b),
            a: 255,
        }
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out plain text using provided font bytes and styling.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> TitleResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(TitleError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TitleError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TitleError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// A laid-out text block with its placement on the canvas: `anchor_x` is the
/// horizontal center of the block, `top_y` the top of its first line.
pub struct PositionedText {
    pub layout: parley::Layout<TextBrushRgba8>,
    pub anchor_x: f64,
    pub top_y: f64,
}

/// Rasterize the positioned blocks into a transparent overlay and composite
/// the result onto the canvas.
pub fn render_text_layer(
    canvas: &mut Canvas,
    font: &vello_cpu::peniko::FontData,
    blocks: &[PositionedText],
) -> TitleResult<()> {
    let width_u16: u16 = canvas
        .width()
        .try_into()
        .map_err(|_| TitleError::render("canvas width exceeds u16"))?;
    let height_u16: u16 = canvas
        .height()
        .try_into()
        .map_err(|_| TitleError::render("canvas height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    let mut drew_any = false;

    for block in blocks {
        let x = block.anchor_x - f64::from(block.layout.width()) / 2.0;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, block.top_y)));

        for line in block.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
                drew_any = true;
            }
        }
    }

    if !drew_any {
        return Ok(());
    }

    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    canvas.composite_premul_rgba8(pixmap.data_as_u8_slice())
}
