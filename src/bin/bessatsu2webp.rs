//! CLI binary for bessatsu2webp.
//!
//! Deliberately flag-free: every parameter of the batch (manifest, input
//! and output directories, DPI, quality) is a compile-time constant in the
//! library. The binary only wires up logging, a progress bar, and the
//! final summary. `RUST_LOG` adjusts tracing verbosity on stderr.

use anyhow::{Context, Result};
use bessatsu2webp::{run_batch, BatchProgressCallback, BessatsuEntry, ConvertConfig, RunSummary, MANIFEST};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar across the manifest, with per-page
/// log lines printed above it via `bar.println`.
struct CliProgress {
    bar: ProgressBar,
    /// Echoed in the final summary so the operator knows where to look.
    output_dir: PathBuf,
}

impl CliProgress {
    fn new(output_dir: PathBuf) -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_run_start

        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:40.green/238}] {pos}/{len} files  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        bar.set_style(style);
        bar.set_prefix("Converting");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar, output_dir })
    }
}

impl BatchProgressCallback for CliProgress {
    fn on_run_start(&self, total_entries: usize) {
        self.bar.set_length(total_entries as u64);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Converting {total_entries} booklet PDFs to WebP…"))
        ));
    }

    fn on_entry_start(&self, _index: usize, _total: usize, entry: &BessatsuEntry) {
        self.bar.set_message(entry.filename.to_string());
        self.bar.println(format!(
            "{} {} {}",
            cyan("▸"),
            bold(entry.filename),
            dim(&format!("(exam {}, {})", entry.exam_number, entry.session)),
        ));
    }

    fn on_entry_skipped(&self, entry: &BessatsuEntry) {
        self.bar.println(format!(
            "{} skip: {} {}",
            dim("–"),
            entry.filename,
            dim("(file not found)"),
        ));
        self.bar.inc(1);
    }

    fn on_page_saved(&self, page_num: usize, total_pages: usize, bytes_written: u64) {
        let kb = bytes_written as f64 / 1024.0;
        self.bar.println(format!(
            "  {} page {:>2}/{:<2}  {}",
            green("✓"),
            page_num,
            total_pages,
            dim(&format!("{kb:.1}KB")),
        ));
    }

    fn on_entry_complete(&self, _entry: &BessatsuEntry, _pages: usize) {
        self.bar.inc(1);
    }

    fn on_entry_failed(&self, entry: &BessatsuEntry, error: &str) {
        // Truncate very long error messages to keep output tidy.
        let msg = if error.len() > 120 {
            format!("{}\u{2026}", &error[..119])
        } else {
            error.to_string()
        };
        self.bar
            .println(format!("  {} {}  {}", red("✗"), entry.filename, red(&msg)));
        self.bar.inc(1);
    }

    fn on_run_complete(&self, summary: &RunSummary) {
        self.bar.finish_and_clear();

        eprintln!(
            "{} {} pages converted  {}",
            green("✔"),
            bold(&summary.pages_converted.to_string()),
            dim(&format!("({}ms)", summary.total_duration_ms)),
        );
        if summary.files_failed > 0 {
            eprintln!(
                "{} {} files failed",
                red("✘"),
                bold(&summary.files_failed.to_string())
            );
        }
        if summary.files_skipped > 0 {
            eprintln!(
                "{} {} files skipped {}",
                dim("–"),
                summary.files_skipped,
                dim("(source PDF not found)"),
            );
        }
        eprintln!("Output: {}", bold(&self.output_dir.display().to_string()));
    }
}

fn main() -> Result<()> {
    // Library logs go to stderr and default to warnings only; the progress
    // bar carries the per-page feedback. RUST_LOG=debug overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let output_dir = ConvertConfig::default().output_dir;
    let progress = CliProgress::new(output_dir);

    let config = ConvertConfig::builder()
        .progress_callback(progress as Arc<dyn BatchProgressCallback>)
        .build()
        .context("Invalid configuration")?;

    // Fatal errors only (pdfium missing, output root not writable).
    // Per-file failures are reported in the summary and still exit 0.
    run_batch(MANIFEST, &config).context("Conversion aborted before completion")?;

    Ok(())
}
