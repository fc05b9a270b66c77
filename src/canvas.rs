use crate::color::Rgb;
use crate::error::{TitleError, TitleResult};

/// Rectangular region of interest with exclusive end bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub xbegin: u32,
    pub xend: u32,
    pub ybegin: u32,
    pub yend: u32,
}

impl Region {
    pub fn new(xbegin: u32, xend: u32, ybegin: u32, yend: u32) -> Self {
        Self {
            xbegin,
            xend,
            ybegin,
            yend,
        }
    }

    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, width, 0, height)
    }

    pub fn width(self) -> u32 {
        self.xend.saturating_sub(self.xbegin)
    }

    pub fn height(self) -> u32 {
        self.yend.saturating_sub(self.ybegin)
    }

    fn clamped(self, width: u32, height: u32) -> Self {
        Self {
            xbegin: self.xbegin.min(width),
            xend: self.xend.min(width),
            ybegin: self.ybegin.min(height),
            yend: self.yend.min(height),
        }
    }
}

/// Row-major RGBA f32 pixel buffer, origin top-left.
///
/// Owned by the render pipeline for a single invocation and handed to the
/// writer once painting is done.
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> TitleResult<Self> {
        if width == 0 || height == 0 {
            return Err(TitleError::validation("canvas size must be positive"));
        }
        let len = width as usize * height as usize * 4;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [f32; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Flat fill: every pixel in the region becomes `(r, g, b, 1.0)`.
    pub fn fill(&mut self, region: Region, rgb: Rgb) {
        let region = region.clamped(self.width, self.height);
        for y in region.ybegin..region.yend {
            for x in region.xbegin..region.xend {
                self.set_pixel(x, y, [rgb.r, rgb.g, rgb.b, 1.0]);
            }
        }
    }

    /// Top-to-bottom linear gradient; every pixel of a row shares one color.
    ///
    /// A region of height 1 takes the start color (the blend denominator
    /// would be zero).
    pub fn fill_vertical_gradient(&mut self, region: Region, start: Rgb, end: Rgb) {
        let region = region.clamped(self.width, self.height);
        let rows = region.height();
        for y in region.ybegin..region.yend {
            let blend = if rows <= 1 {
                0.0
            } else {
                (y - region.ybegin) as f32 / (rows - 1) as f32
            };
            let row = Rgb::new(
                (1.0 - blend) * start.r + blend * end.r,
                (1.0 - blend) * start.g + blend * end.g,
                (1.0 - blend) * start.b + blend * end.b,
            );
            for x in region.xbegin..region.xend {
                self.set_pixel(x, y, [row.r, row.g, row.b, 1.0]);
            }
        }
    }

    /// Source-over composite of a premultiplied RGBA8 layer covering the
    /// whole canvas (the rasterized text overlay).
    pub fn composite_premul_rgba8(&mut self, src: &[u8]) -> TitleResult<()> {
        if src.len() != self.data.len() {
            return Err(TitleError::render(
                "overlay byte length does not match canvas",
            ));
        }
        for (dst, s) in self.data.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            let sa = s[3] as f32 / 255.0;
            if sa <= 0.0 {
                continue;
            }
            let inv = 1.0 - sa;
            for c in 0..3 {
                dst[c] = s[c] as f32 / 255.0 + dst[c] * inv;
            }
            dst[3] = sa + dst[3] * inv;
        }
        Ok(())
    }

    /// Convert to straight RGBA8 for the integer-format encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgba_eq(actual: [f32; 4], expected: [f32; 4]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-6, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn flat_fill_sets_every_pixel() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.fill(Region::full(4, 3), Rgb::new(0.2, 0.3, 0.4));
        for y in 0..3 {
            for x in 0..4 {
                assert_rgba_eq(canvas.pixel(x, y), [0.2, 0.3, 0.4, 1.0]);
            }
        }
    }

    #[test]
    fn gradient_hits_endpoints_and_midpoint() {
        let start = Rgb::new(1.0, 0.0, 0.0);
        let end = Rgb::new(0.0, 0.0, 1.0);
        let mut canvas = Canvas::new(2, 11).unwrap();
        canvas.fill_vertical_gradient(Region::full(2, 11), start, end);

        assert_rgba_eq(canvas.pixel(0, 0), [1.0, 0.0, 0.0, 1.0]);
        assert_rgba_eq(canvas.pixel(0, 10), [0.0, 0.0, 1.0, 1.0]);
        assert_rgba_eq(canvas.pixel(0, 5), [0.5, 0.0, 0.5, 1.0]);
        // Rows are horizontally uniform.
        assert_eq!(canvas.pixel(0, 7), canvas.pixel(1, 7));
    }

    #[test]
    fn gradient_on_single_row_takes_start_color() {
        let mut canvas = Canvas::new(3, 1).unwrap();
        canvas.fill_vertical_gradient(
            Region::full(3, 1),
            Rgb::new(0.1, 0.2, 0.3),
            Rgb::new(0.9, 0.9, 0.9),
        );
        assert_rgba_eq(canvas.pixel(1, 0), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn fill_respects_region_bounds() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        let roi = Region::new(1, 3, 1, 3);
        assert_eq!(roi.width(), 2);
        assert_eq!(roi.height(), 2);
        canvas.fill(roi, Rgb::WHITE);
        assert_rgba_eq(canvas.pixel(0, 0), [0.0, 0.0, 0.0, 0.0]);
        assert_rgba_eq(canvas.pixel(1, 1), [1.0, 1.0, 1.0, 1.0]);
        assert_rgba_eq(canvas.pixel(2, 2), [1.0, 1.0, 1.0, 1.0]);
        assert_rgba_eq(canvas.pixel(3, 3), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
    }

    #[test]
    fn composite_blends_premultiplied_overlay() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.fill(Region::full(1, 1), Rgb::new(0.0, 1.0, 0.0));

        // Half-opaque white, premultiplied: channels already scaled by alpha.
        canvas.composite_premul_rgba8(&[128, 128, 128, 128]).unwrap();
        let px = canvas.pixel(0, 0);
        assert!((px[0] - 0.502).abs() < 0.01);
        assert!((px[1] - (0.502 + 0.498)).abs() < 0.01);
        assert!((px[3] - 1.0).abs() < 0.01);
    }

    #[test]
    fn composite_rejects_mismatched_lengths() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert!(canvas.composite_premul_rgba8(&[0u8; 4]).is_err());
    }

    #[test]
    fn to_rgba8_rounds_and_clamps() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.set_pixel(0, 0, [0.5, 1.5, -0.5, 1.0]);
        assert_eq!(canvas.to_rgba8(), vec![128, 255, 0, 255]);
    }
}
