use crate::canvas::{Canvas, Region};
use crate::color;
use crate::config::TitleConfig;
use crate::error::TitleResult;
use crate::fonts;
use crate::layout::{TitleStyle, stack_centered};
use crate::text::{PositionedText, TextBrushRgba8, TextLayoutEngine, render_text_layer};

/// Run the full pipeline for one configuration: background fill, text
/// measurement and placement, glyph rasterization. Returns the finished
/// canvas, ready for the writer.
#[tracing::instrument(skip(config), fields(width = config.size.width, height = config.size.height))]
pub fn render_title(config: &TitleConfig) -> TitleResult<Canvas> {
    config.validate()?;

    let size = config.size;
    let mut canvas = Canvas::new(size.width, size.height)?;
    let region = Region::full(size.width, size.height);

    // Background: gradient when a known name was requested, flat otherwise.
    let mut painted = false;
    if let Some(name) = config.gradient.as_deref() {
        tracing::info!(gradient = %name, "resolving gradient");
        if let Some((start, end)) = color::resolve_gradient(name) {
            canvas.fill_vertical_gradient(region, start, end);
            painted = true;
        }
    }
    if !painted {
        canvas.fill(region, config.background);
    }

    let style = TitleStyle::for_variant(config.variant, size.height);
    tracing::debug!(
        title_px = style.title_px,
        subtitle_px = style.subtitle_px,
        spacing_px = style.spacing_px,
        "text style"
    );

    let font_bytes = fonts::load_font_bytes(fonts::DEFAULT_FONT)?;
    let brush = TextBrushRgba8::opaque(config.color);
    let mut engine = TextLayoutEngine::new();

    let title = engine.layout_plain(
        &config.title,
        &font_bytes,
        style.title_px.max(1) as f32,
        brush,
    )?;
    let subtitle = engine.layout_plain(
        &config.subtitle,
        &font_bytes,
        style.subtitle_px.max(1) as f32,
        brush,
    )?;

    let title_height = title.height().round() as u32;
    let subtitle_height = subtitle.height().round() as u32;
    let placement = stack_centered(
        size.height,
        title_height,
        style.spacing_px,
        subtitle_height,
    );
    tracing::debug!(
        title_y = placement.title_y,
        subtitle_y = placement.subtitle_y,
        "block placement"
    );

    let anchor_x = f64::from(size.width) / 2.0;
    let blocks = [
        PositionedText {
            layout: title,
            anchor_x,
            top_y: f64::from(placement.title_y),
        },
        PositionedText {
            layout: subtitle,
            anchor_x,
            top_y: f64::from(placement.subtitle_y),
        },
    ];

    let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
    render_text_layer(&mut canvas, &font, &blocks)?;

    Ok(canvas)
}
