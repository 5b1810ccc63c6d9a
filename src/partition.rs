//! Date-partitioned archive paths.
//!
//! Archived files land in `dst_dir/year/month/day`, recomputed per file
//! from the current date — the filesystem is the only record of which
//! partitions exist.

use chrono::{Datelike, NaiveDate};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Compute and create the archive partition for a date.
///
/// Components are un-padded (`2026/8/8`, not `2026/08/08`). Creation is
/// idempotent; calling twice for the same date returns the same path
/// without error.
pub fn partition_for(dst_dir: &Path, date: NaiveDate) -> io::Result<PathBuf> {
    let partition = dst_dir
        .join(date.year().to_string())
        .join(date.month().to_string())
        .join(date.day().to_string());
    fs::create_dir_all(&partition)?;
    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn components_are_unpadded() {
        let tmp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();

        let partition = partition_for(tmp.path(), date).unwrap();

        assert_eq!(partition, tmp.path().join("2026").join("8").join("8"));
        assert!(partition.is_dir());
    }

    #[test]
    fn double_digit_components_pass_through() {
        let tmp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();

        let partition = partition_for(tmp.path(), date).unwrap();

        assert_eq!(partition, tmp.path().join("2026").join("12").join("31"));
    }

    #[test]
    fn creation_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        let first = partition_for(tmp.path(), date).unwrap();
        let second = partition_for(tmp.path(), date).unwrap();

        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn different_dates_map_to_different_partitions() {
        let tmp = TempDir::new().unwrap();

        let a = partition_for(tmp.path(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()).unwrap();
        let b = partition_for(tmp.path(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()).unwrap();

        assert_ne!(a, b);
        assert!(a.is_dir());
        assert!(b.is_dir());
    }
}
