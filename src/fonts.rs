use std::path::PathBuf;

use crate::error::{TitleError, TitleResult};

/// Font shipped in the `fonts/` directory next to the installed binary.
pub const DEFAULT_FONT: &str = "DejaVuSans.ttf";

/// Resolve a bundled font file.
///
/// Installed builds keep fonts at `<exe-dir>/fonts/`; running from a
/// checkout (tests, `cargo run`) falls back to the crate's own `fonts/`
/// directory.
pub fn font_path(file: &str) -> TitleResult<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        candidates.push(dir.join("fonts").join(file));
    }
    candidates.push(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fonts")
            .join(file),
    );

    for candidate in &candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "resolved font");
            return Ok(candidate.clone());
        }
    }

    Err(TitleError::validation(format!(
        "could not find font '{file}' under a fonts/ directory next to the executable"
    )))
}

pub fn load_font_bytes(file: &str) -> TitleResult<Vec<u8>> {
    let path = font_path(file)?;
    std::fs::read(&path).map_err(|e| {
        TitleError::validation(format!("could not read font '{}': {e}", path.display()))
    })
}
