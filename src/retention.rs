//! Startup retention sweep.
//!
//! Deletes archived files older than the configured age. Runs once,
//! synchronously, before any backlog or watch processing, and only when
//! `auto_delete` is enabled.
//!
//! The sweep recurses into the date partitions — that is where archived
//! files live — and also covers stray files at the archive root. Empty
//! partition directories are left in place. A file whose deletion fails
//! is logged and skipped; the sweep continues.

use std::fs::Metadata;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{error, info, warn};
use walkdir::WalkDir;

const SECS_PER_DAY: u64 = 86_400;

/// Tally of one sweep run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Files inspected.
    pub examined: usize,
    /// Files deleted.
    pub deleted: usize,
    /// Files whose deletion failed.
    pub failed: usize,
}

/// Delete archived files older than `retention_days`, relative to `now`.
pub fn sweep(dst_dir: &Path, retention_days: u32, now: SystemTime) -> SweepStats {
    let Some(cutoff) = now.checked_sub(Duration::from_secs(
        u64::from(retention_days) * SECS_PER_DAY,
    )) else {
        // Retention window reaches past the epoch; nothing can be older.
        return SweepStats::default();
    };

    let mut stats = SweepStats::default();

    for entry in WalkDir::new(dst_dir).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "skipping unreadable archive entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        stats.examined += 1;

        let expired = match entry.metadata() {
            Ok(metadata) => archive_timestamp(&metadata).is_some_and(|ts| ts < cutoff),
            Err(err) => {
                warn!(path = %entry.path().display(), %err, "could not read metadata");
                false
            }
        };
        if !expired {
            continue;
        }

        match std::fs::remove_file(entry.path()) {
            Ok(()) => {
                info!(path = %entry.path().display(), "deleted expired archive file");
                stats.deleted += 1;
            }
            Err(err) => {
                error!(path = %entry.path().display(), %err, "failed to delete archive file");
                stats.failed += 1;
            }
        }
    }

    stats
}

/// Best available creation timestamp for an archived file.
///
/// Files relocated into the archive keep their source mtime, which can
/// predate the birth time the filesystem records for the move; the
/// earlier of the two is used. Falls back to whichever is available on
/// platforms without birth-time support.
fn archive_timestamp(metadata: &Metadata) -> Option<SystemTime> {
    let created = metadata.created().ok();
    let modified = metadata.modified().ok();
    match (created, modified) {
        (Some(c), Some(m)) => Some(c.min(m)),
        (c, m) => c.or(m),
    }
}
