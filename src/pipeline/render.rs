//! PDF rasterisation: render every page to a `DynamicImage` via pdfium.
//!
//! ## Why bind once, up front?
//!
//! Binding to libpdfium is the only hard external requirement of the whole
//! program, so [`Rasterizer::new`] is called before any conversion work.
//! A missing library surfaces as [`ConvertError::PdfiumUnavailable`] with
//! install instructions instead of a mid-batch failure on the first entry.
//!
//! ## Why per-page target width instead of a fixed pixel cap?
//!
//! Booklet pages are all roughly A4, but the spec is DPI-driven: output
//! pixel density must be `page_inches × dpi`. pdfium works in points
//! (1/72 inch), so the target width for each page is
//! `width_points / 72 × dpi`, with height scaled proportionally.

use crate::error::{ConvertError, EntryError};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

/// A bound pdfium instance, reused for every PDF in the batch.
///
/// pdfium is not thread-safe; this type is intentionally not `Send` and the
/// batch drives it from a single thread.
pub struct Rasterizer {
    pdfium: Pdfium,
}

impl Rasterizer {
    /// Bind to a pdfium library: the working directory first, then the
    /// system library path.
    ///
    /// # Errors
    /// [`ConvertError::PdfiumUnavailable`] when no library can be bound;
    /// its message carries the installation instructions.
    pub fn new() -> Result<Self, ConvertError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| ConvertError::PdfiumUnavailable(format!("{e:?}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Rasterise all pages of the PDF at `dpi`, in page order.
    ///
    /// # Errors
    /// [`EntryError::RenderFailed`] if the document cannot be opened or any
    /// page fails to render. The error is scoped to this PDF; the caller
    /// counts it as one failed file and moves on.
    pub fn rasterize(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, EntryError> {
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| EntryError::RenderFailed {
                path: pdf_path.to_path_buf(),
                detail: format!("{e:?}"),
            })?;

        let pages = document.pages();
        let total_pages = pages.len() as usize;
        debug!("PDF loaded: {} pages", total_pages);

        let mut images = Vec::with_capacity(total_pages);

        for (idx, page) in pages.iter().enumerate() {
            // Page dimensions are in points (1/72 inch).
            let target_width = (page.width().value * dpi as f32 / 72.0).round() as i32;
            let render_config = PdfRenderConfig::new().set_target_width(target_width);

            let bitmap =
                page.render_with_config(&render_config)
                    .map_err(|e| EntryError::RenderFailed {
                        path: pdf_path.to_path_buf(),
                        detail: format!("page {}: {:?}", idx + 1, e),
                    })?;

            let image = bitmap.as_image();
            debug!(
                "Rendered page {} → {}x{} px",
                idx + 1,
                image.width(),
                image.height()
            );

            images.push(image);
        }

        Ok(images)
    }
}
