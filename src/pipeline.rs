//! The per-file archiving pipeline.
//!
//! Every file surfaced by the watch loop (or the startup backlog pass)
//! makes one pass through this module:
//!
//! ```text
//! classify → resize (optional, staged at the archive root)
//!          → relocate or delete the original
//!          → relocate or remove the staged copy
//! ```
//!
//! ## Guarantees
//!
//! - The source directory never retains a processed file: the original
//!   is either moved into the day's partition or deleted, per
//!   `archive_original`.
//! - One file's failure never affects another. Errors from any step are
//!   caught at the batch boundary, logged, and the next file proceeds.
//!   No partial-state rollback is attempted.
//! - The day partition is recomputed from the wall clock per file, so
//!   the pipeline carries no state between invocations beyond the
//!   filesystem itself.

use crate::classify::is_photo;
use crate::config::ArchiverConfig;
use crate::imaging::{BackendError, ImageBackend, ResizeParams};
use crate::partition::partition_for;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("File has no usable name: {0}")]
    InvalidFilename(PathBuf),
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    /// Whether a resize was performed.
    pub resized: bool,
    /// Where the original went, if `archive_original` is set.
    pub archived_original: Option<PathBuf>,
    /// Where the resized copy went, if `archive_resized` is set.
    pub archived_resized: Option<PathBuf>,
}

/// The archiving pipeline: owns the configuration and an image backend.
pub struct Archiver<B: ImageBackend> {
    config: ArchiverConfig,
    backend: B,
}

impl<B: ImageBackend> Archiver<B> {
    pub fn new(config: ArchiverConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &ArchiverConfig {
        &self.config
    }

    /// Feed a batch of paths through the pipeline, one at a time, in
    /// order. Non-files (directories, already-vanished paths) are
    /// skipped. Returns the number of files archived successfully.
    pub fn process_batch<P: AsRef<Path>>(&self, paths: &[P]) -> usize {
        let mut archived = 0;
        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            match self.process_file(path) {
                Ok(_) => archived += 1,
                Err(err) => {
                    error!(path = %path.display(), %err, "failed to archive file");
                }
            }
        }
        archived
    }

    /// Run one file through the pipeline, dated "today".
    pub fn process_file(&self, path: &Path) -> Result<ArchiveOutcome, PipelineError> {
        self.process_file_on(path, chrono::Local::now().date_naive())
    }

    /// Run one file through the pipeline for a given date.
    ///
    /// Split out from [`process_file`](Self::process_file) so tests can
    /// pin the partition.
    pub fn process_file_on(
        &self,
        path: &Path,
        date: NaiveDate,
    ) -> Result<ArchiveOutcome, PipelineError> {
        let config = &self.config;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PipelineError::InvalidFilename(path.to_path_buf()))?;

        // 1. Classify
        let will_resize = config.resize && is_photo(path);

        // 2. Transform — the resized copy is staged at the archive root
        // under the original base filename until step 5 decides its fate.
        let staging = if will_resize {
            let staging_path = config.dst_dir.join(file_name);
            self.backend.resize(&ResizeParams {
                source: path.to_path_buf(),
                output: staging_path.clone(),
                width: config.resize_x,
                height: config.resize_y,
                keep_ratio: config.keep_ratio,
            })?;
            Some(staging_path)
        } else {
            None
        };

        // 3. Log
        if config.logging {
            info!(path = %path.display(), resized = will_resize, "archiving");
        }

        // 4. Relocate or delete the original
        let partition = partition_for(&config.dst_dir, date)?;
        let archived_original = if config.archive_original {
            let destination = partition.join(archived_name(
                file_name,
                &config.original_prefix,
                &config.original_postfix,
            ));
            move_file(path, &destination)?;
            Some(destination)
        } else {
            fs::remove_file(path)?;
            None
        };

        // 5. Relocate or remove the staged copy
        let archived_resized = match staging {
            Some(staging_path) if config.archive_resized => {
                let destination = partition.join(file_name);
                move_file(&staging_path, &destination)?;
                Some(destination)
            }
            Some(staging_path) => {
                fs::remove_file(&staging_path)?;
                None
            }
            None => None,
        };

        Ok(ArchiveOutcome {
            resized: will_resize,
            archived_original,
            archived_resized,
        })
    }
}

/// Build the archived original's filename: `prefix + stem + postfix + ext`,
/// split at the last dot, extension preserved.
///
/// A name without a dot gets prefix and postfix around the whole name.
fn archived_name(file_name: &str, prefix: &str, postfix: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{prefix}{stem}{postfix}.{ext}"),
        None => format!("{prefix}{file_name}{postfix}"),
    }
}

/// Move a file, falling back to copy + remove when rename fails (e.g.
/// source and archive on different filesystems).
fn move_file(source: &Path, destination: &Path) -> std::io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
    }
}
