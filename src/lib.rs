//! # Snapkeep
//!
//! A directory-watching photo archiver. Point it at a source directory
//! and every file that appears there is optionally resized (if it is a
//! recognized photo) and relocated into a date-partitioned archive:
//!
//! ```text
//! incoming/vacation.png  →  archived/2026/8/8/p_vacation_done.png
//! ```
//!
//! # Architecture
//!
//! A single synchronous pipeline fed by filesystem events:
//!
//! ```text
//! watch loop (notify) ──► pipeline: classify → resize? → relocate
//!        │                              │
//! backlog pass (startup)          imaging backend
//!
//! retention sweep (startup, independent of the watch path)
//! ```
//!
//! Files are processed strictly one at a time, in the order reported.
//! There is no shared mutable state beyond the filesystem itself, so a
//! failure archiving one file can never corrupt another — errors are
//! contained per file and logged.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `snapkeep.toml` loading, validation, stock config generation |
//! | [`classify`] | photo-extension predicate gating the resize step |
//! | [`imaging`] | backend trait, pure-Rust `image` implementation, fit math |
//! | [`partition`] | `year/month/day` archive path computation |
//! | [`pipeline`] | the per-file archiving state machine |
//! | [`retention`] | startup sweep deleting archive entries past their age |
//! | [`watch`] | notify subscription, backlog pass, cooperative shutdown |
//! | [`cancel`] | cancellation token observed between files |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! Resizing uses the `image` crate (Lanczos3 resampling) — no system
//! ImageMagick, no version conflicts. The binary is self-contained.
//!
//! ## The Filesystem Is the State
//!
//! No database, no manifest. The day partition is recomputed from the
//! wall clock per file; the archive layout is the only record of what
//! was processed. A crash between files loses nothing that was already
//! moved and retries nothing automatically.
//!
//! ## Sequential by Design
//!
//! Events are archived one file at a time on a single control path.
//! This keeps ordering obvious and makes per-day partition creation
//! race-free without locks.

pub mod cancel;
pub mod classify;
pub mod config;
pub mod imaging;
pub mod partition;
pub mod pipeline;
pub mod retention;
pub mod watch;

#[cfg(test)]
pub(crate) mod test_helpers;
