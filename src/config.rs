//! Configuration for a batch conversion run.
//!
//! Every knob lives in [`ConvertConfig`], built via its
//! [`ConvertConfigBuilder`]. There is deliberately no runtime surface for
//! these values — no flags, no environment variables, no config file. The
//! defaults *are* the production configuration; the builder exists so tests
//! can point the batch at temporary directories and so validation has a
//! single home.

use crate::error::ConvertError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Default input directory, relative to the project root.
pub const DEFAULT_INPUT_DIR: &str = "public/pdfs";
/// Default output root, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "public/data/bessatsu";
/// Rasterisation resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 200;
/// Lossy WebP quality on the libwebp 0–100 scale.
pub const DEFAULT_QUALITY: u8 = 85;

/// Configuration for [`crate::convert::run_batch`].
///
/// # Example
/// ```rust
/// use bessatsu2webp::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .output_dir("target/bessatsu-out")
///     .quality(90)
///     .build()
///     .unwrap();
/// assert_eq!(config.dpi, 200);
/// ```
#[derive(Clone)]
pub struct ConvertConfig {
    /// Directory holding the source booklet PDFs.
    pub input_dir: PathBuf,

    /// Root of the output tree. Page images land at
    /// `<output_dir>/<exam_number>/<session>/<page>.webp`.
    pub output_dir: PathBuf,

    /// Rendering DPI used when rasterising each page. Range: 72–400. Default: 200.
    ///
    /// 200 DPI keeps small kanji and circuit diagrams legible on a retina
    /// display while holding a typical booklet page near 150 KB of WebP.
    pub dpi: u32,

    /// Lossy WebP quality, 0–100. Default: 85.
    ///
    /// Higher is larger and higher-fidelity. 85 is visually transparent for
    /// rendered print at 200 DPI; dropping below ~70 starts to smear the
    /// fine rules of answer-sheet tables.
    pub quality: u8,

    /// Optional progress callback invoked per entry and per page.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dpi: DEFAULT_DPI,
            quality: DEFAULT_QUALITY,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConvertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertConfig")
            .field("input_dir", &self.input_dir)
            .field("output_dir", &self.output_dir)
            .field("dpi", &self.dpi)
            .field("quality", &self.quality)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConvertConfig {
    /// Create a new builder seeded with the production defaults.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConvertConfig`].
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.config.quality = quality;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConvertConfig, ConvertError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 400 {
            return Err(ConvertError::InvalidConfig(format!(
                "DPI must be 72–400, got {}",
                c.dpi
            )));
        }
        if c.quality > 100 {
            return Err(ConvertError::InvalidConfig(format!(
                "WebP quality must be 0–100, got {}",
                c.quality
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_constants() {
        let c = ConvertConfig::default();
        assert_eq!(c.dpi, 200);
        assert_eq!(c.quality, 85);
        assert_eq!(c.input_dir, PathBuf::from("public/pdfs"));
        assert_eq!(c.output_dir, PathBuf::from("public/data/bessatsu"));
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_rejects_out_of_range_dpi() {
        assert!(ConvertConfig::builder().dpi(50).build().is_err());
        assert!(ConvertConfig::builder().dpi(600).build().is_err());
        assert!(ConvertConfig::builder().dpi(72).build().is_ok());
        assert!(ConvertConfig::builder().dpi(400).build().is_ok());
    }

    #[test]
    fn builder_accepts_full_quality_range() {
        assert!(ConvertConfig::builder().quality(0).build().is_ok());
        assert!(ConvertConfig::builder().quality(100).build().is_ok());
    }

    #[test]
    fn builder_overrides_directories() {
        let c = ConvertConfig::builder()
            .input_dir("in")
            .output_dir("out")
            .build()
            .unwrap();
        assert_eq!(c.input_dir, PathBuf::from("in"));
        assert_eq!(c.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn debug_does_not_require_callback_debug() {
        use crate::progress::NoopProgressCallback;
        use std::sync::Arc;
        let c = ConvertConfig::builder()
            .progress_callback(Arc::new(NoopProgressCallback))
            .build()
            .unwrap();
        let rendered = format!("{c:?}");
        assert!(rendered.contains("<dyn callback>"));
    }
}
