//! Pipeline stages for booklet conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping the
//! stages separate makes each independently testable and lets us swap an
//! implementation (a different rendering backend, say) without touching
//! the batch loop.
//!
//! ## Data Flow
//!
//! ```text
//! manifest entry ──▶ render ──▶ encode ──▶ save
//!  (pdf path)       (pdfium)   (libwebp)  (N.webp)
//! ```
//!
//! 1. [`render`] — rasterise every page of a PDF at the configured DPI
//! 2. [`encode`] — lossy WebP-encode each `DynamicImage` at the
//!    configured quality
//!
//! Saving is plain `std::fs` and lives with the batch loop in
//! [`crate::convert`].

pub mod encode;
pub mod render;
