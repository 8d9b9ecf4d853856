//! Concurrent batch engine
//!
//! One independent analysis task per file on a rayon worker pool sized to the
//! available hardware parallelism. Tasks share nothing mutable: each returns its
//! record by value and the pool collects them, so the only ordering step is a
//! final sort by file name. A per-file failure is folded into that file's record
//! at the task boundary; only a failure to enumerate the input is fatal.

use anyhow::{Context, Result};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use walkdir::WalkDir;

use crate::config::AnalysisConfig;
use crate::core::analyze_to_record;
use crate::detection::AnalysisRecord;

/// Extensions the batch engine picks up while walking a directory.
pub const AUDIO_EXTENSIONS: &[&str] = &["flac", "wav"];

/// Cooperative cancellation flag shared with the worker pool. Tasks that have
/// not started when the flag is raised are dropped; in-flight tasks finish and
/// their records are kept.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Batch execution knobs.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Worker pool size; `None` uses rayon's default (available parallelism).
    pub threads: Option<usize>,
    /// Draw an indicatif progress bar over completed files.
    pub progress: bool,
}

/// Recursively collect audio files under `path` (or `path` itself if it is a
/// matching file), sorted for a stable submission order.
pub fn discover_audio_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        if has_audio_extension(path) {
            files.push(path.to_path_buf());
        }
        return Ok(files);
    }

    if !path.is_dir() {
        anyhow::bail!("input path does not exist: {}", path.display());
    }

    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.with_context(|| format!("failed to scan {}", path.display()))?;
        if entry.file_type().is_file() && has_audio_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| AUDIO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Analyze every file on a worker pool and return records sorted by file name.
///
/// The record count equals the input count unless the batch was cancelled, in
/// which case records of unstarted tasks are missing.
pub fn analyze_batch(
    files: &[PathBuf],
    config: &AnalysisConfig,
    options: &BatchOptions,
    cancel: &CancelToken,
) -> Result<Vec<AnalysisRecord>> {
    info!("analyzing {} file(s)", files.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads.unwrap_or(0))
        .build()
        .context("failed to build worker pool")?;

    let bar = if options.progress {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{wide_bar} {pos}/{len} files ({elapsed} elapsed, eta {eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut records: Vec<AnalysisRecord> = pool.install(|| {
        files
            .par_iter()
            .progress_with(bar)
            .filter_map(|path| {
                if cancel.is_cancelled() {
                    return None;
                }
                Some(analyze_to_record(path, config))
            })
            .collect()
    });

    records.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let failed = records.iter().filter(|r| r.is_failed()).count();
    info!("batch complete: {} ok, {failed} failed", records.len() - failed);

    Ok(records)
}
