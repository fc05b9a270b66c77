use std::path::Path;

use crate::canvas::Canvas;
use crate::error::{TitleError, TitleResult};

/// Encode the canvas and write it to `path`, format inferred from the
/// extension.
///
/// `.exr` keeps the full float pixel data; every other format goes through a
/// straight RGBA8 conversion.
pub fn write_canvas(canvas: &Canvas, path: &Path) -> TitleResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("exr") => {
            let img = image::Rgba32FImage::from_raw(
                canvas.width(),
                canvas.height(),
                canvas.data().to_vec(),
            )
            .ok_or_else(|| TitleError::write("canvas buffer length mismatch"))?;
            image::DynamicImage::ImageRgba32F(img)
                .save(path)
                .map_err(|e| {
                    TitleError::write(format!("could not write '{}': {e}", path.display()))
                })
        }
        _ => image::save_buffer(
            path,
            &canvas.to_rgba8(),
            canvas.width(),
            canvas.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| TitleError::write(format!("could not write '{}': {e}", path.display()))),
    }
}
