//! Shared test utilities for the snapkeep test suite.
//!
//! Provides a baseline config builder, a pinned test date, a tiny-PNG
//! writer for backend tests, and archive lookup helpers that panic with
//! a clear message on miss.

use crate::config::ArchiverConfig;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Baseline config for pipeline tests: archiving on, resizing off,
/// per-file logging off to keep test output quiet.
pub fn test_config(src: &Path, dst: &Path) -> ArchiverConfig {
    ArchiverConfig {
        src_dir: src.to_path_buf(),
        dst_dir: dst.to_path_buf(),
        logging: false,
        ..ArchiverConfig::default()
    }
}

/// Fixed date so tests can assert exact partition paths (2026/8/8).
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
}

/// Write a solid-color RGB PNG of the given dimensions.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 140, 160]));
    img.save(path).unwrap();
}

/// Find a file by name anywhere under the archive root. Panics if not
/// found, listing what is there.
pub fn find_archived(dst_dir: &Path, name: &str) -> PathBuf {
    let files: Vec<PathBuf> = WalkDir::new(dst_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();

    files
        .iter()
        .find(|p| p.file_name().is_some_and(|n| n == name))
        .cloned()
        .unwrap_or_else(|| {
            panic!("'{name}' not found under {}. Available: {files:?}", dst_dir.display())
        })
}
