use crate::config::StyleVariant;

/// Pixel sizes for the two text blocks, derived from the canvas height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleStyle {
    pub title_px: u32,
    pub subtitle_px: u32,
    pub spacing_px: u32,
}

impl TitleStyle {
    pub fn for_variant(variant: StyleVariant, canvas_height: u32) -> Self {
        let h = canvas_height as f32;
        Self {
            title_px: (h * variant.title_frac()) as u32,
            subtitle_px: (h * variant.subtitle_frac()) as u32,
            spacing_px: (h * variant.spacing_frac()) as u32,
        }
    }
}

/// Vertical placement for a title block stacked above a subtitle block,
/// centered as one unit on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPlacement {
    pub title_y: i32,
    pub subtitle_y: i32,
}

/// Center the combined title+spacing+subtitle block vertically.
///
/// Integer arithmetic throughout; a block taller than the canvas yields a
/// negative title top, which the renderer clips naturally.
pub fn stack_centered(
    canvas_height: u32,
    title_height: u32,
    spacing: u32,
    subtitle_height: u32,
) -> BlockPlacement {
    let center = (canvas_height / 2) as i32;
    let combined = (title_height + spacing + subtitle_height) as i32;
    let title_y = center - combined / 2;
    let subtitle_y = title_y + (title_height + spacing) as i32;
    BlockPlacement {
        title_y,
        subtitle_y,
    }
}
