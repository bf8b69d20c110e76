//! Visual-summary boundary.
//!
//! The pipeline hands the full frequency table to an external renderer that
//! produces a fixed-size raster image keyed by relative frequency (a word
//! cloud). Rasterization itself is out of scope; this module only defines
//! the seam: the configuration the renderer is invoked with and the trait it
//! implements.
//!
//! Renderer failure is non-fatal to the rest of the pipeline: the run
//! continues and the image is simply omitted from the output.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::frequency::FrequencyTable;

/// Configuration for the external summary renderer.
///
/// Defaults mirror the production setup: a Japanese-capable font, an
/// 800×400 canvas, white background, viridis colors, single-token
/// frequencies (no collocations) and horizontal-only text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Font asset path; must support the source script.
    pub font_path: PathBuf,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color name.
    pub background: String,
    /// Color scheme name.
    pub colormap: String,
    /// Whether to count collocations; `false` counts single tokens only.
    pub collocations: bool,
    /// Fraction of words laid out horizontally; 1.0 means horizontal only.
    pub prefer_horizontal: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("fonts/NotoSansJP-Regular.ttf"),
            width: 800,
            height: 400,
            background: "white".to_owned(),
            colormap: "viridis".to_owned(),
            collocations: false,
            prefer_horizontal: 1.0,
        }
    }
}

impl RenderConfig {
    /// Default configuration with a custom font asset.
    #[must_use]
    pub fn with_font(font_path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: font_path.into(),
            ..Self::default()
        }
    }
}

/// Summary-image generation failed.
///
/// Recovered locally by the pipeline: reported, then the run continues
/// without the image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("summary image rendering failed: {reason}")]
pub struct RenderError {
    /// Human-readable failure detail from the renderer.
    pub reason: String,
}

impl RenderError {
    /// Creates an error from a failure reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// External frequency-weighted image renderer.
pub trait SummaryRenderer {
    /// Renders the counted map to `output`, fully overwriting any previous
    /// image before the caller re-reads it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] on failure; the caller recovers by omitting
    /// the image.
    fn render(
        &self,
        table: &FrequencyTable,
        config: &RenderConfig,
        output: &Path,
    ) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_production_setup() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 400);
        assert_eq!(config.background, "white");
        assert_eq!(config.colormap, "viridis");
        assert!(!config.collocations);
        assert_eq!(config.prefer_horizontal, 1.0);
    }

    #[test]
    fn with_font_overrides_only_the_font() {
        let config = RenderConfig::with_font("assets/ipaexg.ttf");
        assert_eq!(config.font_path, PathBuf::from("assets/ipaexg.ttf"));
        assert_eq!(config.width, 800);
    }

    #[test]
    fn error_display_carries_reason() {
        let err = RenderError::new("font not found");
        assert!(err.to_string().contains("font not found"));
    }
}
