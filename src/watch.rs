//! The watch loop: filesystem events in, archived files out.
//!
//! Subscribes to creation events on the source directory via the
//! platform watcher (`notify`) and feeds each reported path, one at a
//! time and in reported order, into the [`Archiver`]. Processing is
//! strictly sequential — a slow resize delays later events but never
//! reorders them.
//!
//! Shutdown is cooperative: the loop polls a [`CancellationToken`]
//! between channel receives, so a termination signal stops it between
//! files, never mid-file. In-flight work already completed stays done;
//! nothing queued survives a restart.

use crate::cancel::CancellationToken;
use crate::imaging::ImageBackend;
use crate::pipeline::Archiver;
use notify::{EventKind, RecursiveMode, Watcher};
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// How often the loop wakes to check for cancellation when no events
/// are arriving.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Watcher error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Long-running watch loop around an [`Archiver`].
pub struct WatchLoop<B: ImageBackend> {
    archiver: Archiver<B>,
    cancel: CancellationToken,
}

impl<B: ImageBackend> WatchLoop<B> {
    pub fn new(archiver: Archiver<B>, cancel: CancellationToken) -> Self {
        Self { archiver, cancel }
    }

    pub fn archiver(&self) -> &Archiver<B> {
        &self.archiver
    }

    /// One-shot pass over files already present in the source directory
    /// (non-recursive, listing order). Returns the number archived.
    pub fn process_backlog(&self) -> Result<usize, WatchError> {
        let src_dir = &self.archiver.config().src_dir;
        let mut backlog: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(src_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                backlog.push(entry.path());
            }
        }

        info!(count = backlog.len(), "processing startup backlog");
        Ok(self.archiver.process_batch(&backlog))
    }

    /// Watch the source directory until cancelled.
    ///
    /// Each creation event's paths are archived synchronously before the
    /// next event is taken off the channel.
    pub fn run(&self) -> Result<(), WatchError> {
        let (tx, rx) = mpsc::channel::<notify::Result<notify::Event>>();
        let mut watcher = notify::recommended_watcher(tx)?;
        let src_dir = &self.archiver.config().src_dir;
        watcher.watch(src_dir, RecursiveMode::NonRecursive)?;
        info!(src_dir = %src_dir.display(), "watching for new files");

        while !self.cancel.is_cancelled() {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(event)) => {
                    if !matches!(event.kind, EventKind::Create(_)) {
                        continue;
                    }
                    // Cancellation lands between files, never mid-file.
                    for path in &event.paths {
                        if self.cancel.is_cancelled() {
                            break;
                        }
                        self.archiver.process_batch(std::slice::from_ref(path));
                    }
                }
                Ok(Err(err)) => {
                    error!(%err, "filesystem watcher error");
                }
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }

        info!("watch loop stopped");
        Ok(())
    }
}
