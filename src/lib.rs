//! Titlecard generates static title/subtitle banner images.
//!
//! The pipeline is a single synchronous pass:
//!
//! - Build a [`TitleConfig`] (the CLI does this from flags)
//! - [`render_title`] paints the background (flat or named gradient) and
//!   rasterizes the centered title/subtitle blocks into a float [`Canvas`]
//! - [`write_canvas`] encodes the result, format inferred from the extension
#![forbid(unsafe_code)]

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod render;
pub mod text;
pub mod write;

pub use canvas::{Canvas, Region};
pub use color::{Hsv, Rgb, gradient_options, resolve_gradient};
pub use config::{Size, StyleVariant, TitleConfig};
pub use error::{TitleError, TitleResult};
pub use render::render_title;
pub use write::write_canvas;
