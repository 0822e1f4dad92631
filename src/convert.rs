//! The batch loop: manifest in, WebP tree and counters out.
//!
//! Control flow is strictly sequential and synchronous — one PDF at a
//! time, one page at a time. Each manifest entry is independent: the loop
//! converts per-entry errors into an [`EntryOutcome`] instead of letting
//! them propagate, so a corrupt booklet costs exactly one failure count
//! and nothing else. Rerunning with unchanged inputs overwrites every
//! output file with identical bytes.

use crate::config::ConvertConfig;
use crate::error::{ConvertError, EntryError};
use crate::manifest::BessatsuEntry;
use crate::output::{EntryOutcome, RunSummary};
use crate::pipeline::{encode, render::Rasterizer};
use crate::progress::BatchProgressCallback;
use std::fs;
use std::time::Instant;
use tracing::{error, info, warn};

/// Convert every manifest entry, returning the run counters.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Returns `Err(ConvertError)` only for fatal conditions detected before
/// any conversion work: pdfium cannot be bound, the output root cannot be
/// created, or the config is invalid. Per-file failures never surface
/// here — check [`RunSummary::files_failed`].
pub fn run_batch(
    manifest: &[BessatsuEntry],
    config: &ConvertConfig,
) -> Result<RunSummary, ConvertError> {
    let start = Instant::now();

    // Fatal startup check: bind the PDF engine before touching any file.
    let rasterizer = Rasterizer::new()?;

    fs::create_dir_all(&config.output_dir).map_err(|e| ConvertError::OutputDirFailed {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let cb = config.progress_callback.as_deref();
    if let Some(cb) = cb {
        cb.on_run_start(manifest.len());
    }

    let mut summary = RunSummary::default();

    for (index, entry) in manifest.iter().enumerate() {
        let outcome = convert_entry(&rasterizer, entry, index, manifest.len(), config, cb);
        summary.record(&outcome);
    }

    summary.total_duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Batch complete: {} pages converted, {} files failed, {} skipped in {}ms",
        summary.pages_converted,
        summary.files_failed,
        summary.files_skipped,
        summary.total_duration_ms
    );

    if let Some(cb) = cb {
        cb.on_run_complete(&summary);
    }

    Ok(summary)
}

/// Convert one manifest entry. Never panics and never returns an error —
/// everything that can go wrong is folded into the [`EntryOutcome`].
fn convert_entry(
    rasterizer: &Rasterizer,
    entry: &BessatsuEntry,
    index: usize,
    total_entries: usize,
    config: &ConvertConfig,
    cb: Option<&dyn BatchProgressCallback>,
) -> EntryOutcome {
    // The subdirectory is created before the existence check so reruns
    // leave a stable output layout even while a booklet PDF is missing.
    let subdir = entry.output_subdir(&config.output_dir);
    if let Err(e) = fs::create_dir_all(&subdir) {
        let err = EntryError::OutputDirFailed {
            path: subdir,
            source: e,
        };
        error!("{}: {}", entry.filename, err);
        if let Some(cb) = cb {
            cb.on_entry_failed(entry, &err.to_string());
        }
        return EntryOutcome::Failed {
            pages_saved: 0,
            error: err,
        };
    }

    let pdf_path = entry.pdf_path(&config.input_dir);
    if !pdf_path.exists() {
        warn!("Skipping {} (file not found)", entry.filename);
        if let Some(cb) = cb {
            cb.on_entry_skipped(entry);
        }
        return EntryOutcome::Skipped;
    }

    info!(
        "Processing {} (exam {}, {})",
        entry.filename, entry.exam_number, entry.session
    );
    if let Some(cb) = cb {
        cb.on_entry_start(index, total_entries, entry);
    }

    let images = match rasterizer.rasterize(&pdf_path, config.dpi) {
        Ok(images) => images,
        Err(err) => {
            error!("{}: {}", entry.filename, err);
            if let Some(cb) = cb {
                cb.on_entry_failed(entry, &err.to_string());
            }
            return EntryOutcome::Failed {
                pages_saved: 0,
                error: err,
            };
        }
    };

    let total_pages = images.len();
    let mut pages_saved = 0;

    // Consuming iteration: each bitmap is dropped as soon as its WebP
    // bytes are on disk.
    for (i, image) in images.into_iter().enumerate() {
        let page_num = i + 1;

        let bytes = match encode::encode_page(&image, page_num, config.quality) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("{}: {}", entry.filename, err);
                if let Some(cb) = cb {
                    cb.on_entry_failed(entry, &err.to_string());
                }
                return EntryOutcome::Failed {
                    pages_saved,
                    error: err,
                };
            }
        };

        let webp_path = subdir.join(format!("{page_num}.webp"));
        if let Err(e) = fs::write(&webp_path, &bytes) {
            let err = EntryError::PageWriteFailed {
                page: page_num,
                path: webp_path,
                source: e,
            };
            error!("{}: {}", entry.filename, err);
            if let Some(cb) = cb {
                cb.on_entry_failed(entry, &err.to_string());
            }
            return EntryOutcome::Failed {
                pages_saved,
                error: err,
            };
        }

        pages_saved += 1;
        if let Some(cb) = cb {
            cb.on_page_saved(page_num, total_pages, bytes.len() as u64);
        }
    }

    info!("{}: {} pages written", entry.filename, pages_saved);
    if let Some(cb) = cb {
        cb.on_entry_complete(entry, pages_saved);
    }

    EntryOutcome::Converted { pages: pages_saved }
}
