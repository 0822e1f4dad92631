//! Error types for the bessatsu2webp library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ConvertError`] — **Fatal**: the batch cannot run at all (pdfium not
//!   bindable, output root not creatable, invalid configuration). Returned
//!   as `Err(ConvertError)` from [`crate::convert::run_batch`].
//!
//! * [`EntryError`] — **File-scoped**: one manifest entry failed (corrupt
//!   PDF, encoder error, disk full mid-write) but every other entry is
//!   unaffected. Stored inside [`crate::output::EntryOutcome`] so the batch
//!   loop can log it, bump the failure counter, and keep going.
//!
//! No `EntryError` ever crosses from one manifest entry to the next; the
//! batch loop is the isolation boundary.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the bessatsu2webp library.
///
/// Per-file failures use [`EntryError`] and are contained by the batch loop
/// rather than propagated here.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Could not bind to a pdfium library. Nothing was converted.
    #[error(
        "Failed to bind to the pdfium library: {0}\n\n\
The PDF engine (libpdfium) must be installed before running this tool:\n\
  • macOS:   download libpdfium.dylib from https://github.com/bblanchon/pdfium-binaries\n\
  • Linux:   download libpdfium.so from https://github.com/bblanchon/pdfium-binaries\n\
  • Windows: download pdfium.dll from https://github.com/bblanchon/pdfium-binaries\n\
Place the library next to the bessatsu2webp binary or on the system\n\
library search path, then rerun.\n"
    )]
    PdfiumUnavailable(String),

    /// Could not create the output root directory.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error scoped to a single manifest entry.
///
/// Counted as one failed *file* regardless of how many pages the entry had
/// or how far into the entry the failure occurred.
#[derive(Debug, Error)]
pub enum EntryError {
    /// pdfium could not open or render the PDF.
    #[error("Rasterisation failed for '{path}': {detail}")]
    RenderFailed { path: PathBuf, detail: String },

    /// libwebp rejected a page bitmap.
    #[error("WebP encoding failed for page {page}: {detail}")]
    EncodeFailed { page: usize, detail: String },

    /// A page image could not be written to disk.
    #[error("Failed to write page {page} to '{path}': {source}")]
    PageWriteFailed {
        page: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The per-entry output subdirectory could not be created.
    #[error("Failed to create output subdirectory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
