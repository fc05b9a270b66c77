use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::{TitleError, TitleResult};

/// Canvas size in pixels, parsed from a `"W,H"` flag value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(1024, 1024)
    }
}

impl FromStr for Size {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TitleError::parse(format!("could not parse size from string: {s}"));

        let (w, h) = s.split_once(',').ok_or_else(err)?;
        let width: u32 = w.trim().parse().map_err(|_| err())?;
        let height: u32 = h.trim().parse().map_err(|_| err())?;
        if width == 0 || height == 0 {
            return Err(err());
        }
        Ok(Self::new(width, height))
    }
}

/// Layout proportions, as fractions of the canvas height.
///
/// The tool historically shipped in two flavors with different proportions;
/// both survive here as a configuration choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleVariant {
    /// Large type: title 20%, subtitle 10%, spacing 8% of canvas height.
    #[default]
    Poster,
    /// Compact type: title 8%, subtitle 4%, spacing 2% of canvas height.
    Banner,
}

impl StyleVariant {
    pub fn title_frac(self) -> f32 {
        match self {
            Self::Poster => 0.2,
            Self::Banner => 0.08,
        }
    }

    pub fn subtitle_frac(self) -> f32 {
        self.title_frac() / 2.0
    }

    pub fn spacing_frac(self) -> f32 {
        match self {
            Self::Poster => 0.08,
            Self::Banner => 0.02,
        }
    }
}

/// Validated parameters for one render, built by the CLI and passed by
/// reference through the pipeline.
#[derive(Clone, Debug)]
pub struct TitleConfig {
    pub title: String,
    pub subtitle: String,
    pub output: Option<PathBuf>,
    pub size: Size,
    pub gradient: Option<String>,
    pub background: Rgb,
    pub color: Rgb,
    pub variant: StyleVariant,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            output: None,
            size: Size::default(),
            gradient: None,
            background: Rgb::BLACK,
            color: Rgb::WHITE,
            variant: StyleVariant::default(),
        }
    }
}

impl TitleConfig {
    /// The output path, required before any rendering proceeds.
    pub fn output_path(&self) -> TitleResult<&Path> {
        match self.output.as_deref() {
            Some(p) if !p.as_os_str().is_empty() => Ok(p),
            _ => Err(TitleError::validation("must have output file parameter")),
        }
    }

    pub fn validate(&self) -> TitleResult<()> {
        self.output_path()?;
        Ok(())
    }
}
