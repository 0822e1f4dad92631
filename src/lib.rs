//! # bessatsu2webp
//!
//! Convert bessatsu supplementary exam booklets (PDF) into per-page WebP
//! images, organised by exam number and session.
//!
//! ## Why this crate?
//!
//! The exam viewer serves booklet pages as individual images so a browser
//! can lazy-load exactly the page being looked at. Shipping the PDFs
//! directly would mean a multi-megabyte download and a client-side PDF
//! renderer; pre-rasterised lossy WebP pages are a fraction of the size
//! and render instantly.
//!
//! ## Pipeline Overview
//!
//! ```text
//! manifest (10 fixed entries)
//!  │
//!  ├─ 1. Resolve  <input_dir>/<filename>; missing file → skip, not fail
//!  ├─ 2. Render   rasterise every page via pdfium at 200 DPI
//!  ├─ 3. Encode   lossy WebP at quality 85 via libwebp
//!  └─ 4. Save     <output_dir>/<exam>/<session>/<page>.webp  (1-indexed)
//! ```
//!
//! The batch is strictly sequential; each manifest entry is an isolation
//! boundary, so one corrupt PDF costs one failure count and nothing else.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bessatsu2webp::{run_batch, ConvertConfig, MANIFEST};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConvertConfig::default();
//!     let summary = run_batch(MANIFEST, &config)?;
//!     println!(
//!         "{} pages converted, {} files failed",
//!         summary.pages_converted, summary.files_failed
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `bessatsu2webp` binary (anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! bessatsu2webp = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConvertConfig, ConvertConfigBuilder};
pub use convert::run_batch;
pub use error::{ConvertError, EntryError};
pub use manifest::{BessatsuEntry, Session, MANIFEST};
pub use output::{EntryOutcome, RunSummary};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
