//! Archiver configuration module.
//!
//! Handles loading and validating the `snapkeep.toml` config file.
//! Configuration is flat, loaded once at startup, and owned immutably by
//! the pipeline for the process lifetime — components receive it by
//! reference, never through ambient global state.
//!
//! ## Configuration Options
//!
//! ```toml
//! # src_dir is the only required key — it must exist at startup.
//! src_dir = "/srv/incoming"
//!
//! # All other options are optional - defaults shown below
//! dst_dir = "archived"       # Archive root, created if missing
//!
//! resize = false             # Resize recognized photos before archiving
//! resize_x = 0               # Target width in pixels
//! resize_y = 0               # Target height in pixels
//! keep_ratio = true          # Fit within the box instead of forcing dimensions
//!
//! logging = true             # One informational line per processed file
//!
//! auto_delete = false        # Sweep old archive entries at startup
//! delete_days = 0            # Age threshold for the sweep, in days
//!
//! archive_original = true    # Move the original into the archive (false = delete it)
//! archive_resized = false    # Also keep the resized copy in the archive
//! original_prefix = ""       # Prepended to the archived original's base name
//! original_postfix = ""      # Appended to the base name, before the extension
//!
//! run_on_init = false        # Process files already present at startup
//! ```
//!
//! Config files are sparse — set just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Source directory is not set or does not exist: {0}")]
    MissingSourceDir(PathBuf),
}

/// Archiver configuration loaded from `snapkeep.toml`.
///
/// All fields except `src_dir` have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiverConfig {
    /// Directory watched for newly created files. Must exist at startup.
    pub src_dir: PathBuf,
    /// Archive root directory. Created at startup if absent.
    pub dst_dir: PathBuf,
    /// Whether recognized photos are resized before archiving.
    pub resize: bool,
    /// Resize target width in pixels.
    pub resize_x: u32,
    /// Resize target height in pixels.
    pub resize_y: u32,
    /// Fit within the target box preserving proportions (never upscaling)
    /// instead of forcing exact dimensions.
    pub keep_ratio: bool,
    /// Emit one informational log line per processed file.
    pub logging: bool,
    /// Run the retention sweep at startup.
    pub auto_delete: bool,
    /// Retention age in days for the sweep.
    pub delete_days: u32,
    /// Move the original into the archive; when false it is deleted instead.
    pub archive_original: bool,
    /// Additionally keep the resized copy in the day's partition.
    pub archive_resized: bool,
    /// Prefix applied to the archived original's base filename.
    pub original_prefix: String,
    /// Suffix applied to the base filename, before the extension.
    pub original_postfix: String,
    /// Process files already present in `src_dir` before watching.
    pub run_on_init: bool,
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::new(),
            dst_dir: PathBuf::from("archived"),
            resize: false,
            resize_x: 0,
            resize_y: 0,
            keep_ratio: true,
            logging: true,
            auto_delete: false,
            delete_days: 0,
            archive_original: true,
            archive_resized: false,
            original_prefix: String::new(),
            original_postfix: String::new(),
            run_on_init: false,
        }
    }
}

impl ArchiverConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// `src_dir` must name an existing directory; the resize dimensions
    /// must be positive when resizing is enabled; the retention age must
    /// be positive when the sweep is enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.src_dir.as_os_str().is_empty() || !self.src_dir.is_dir() {
            return Err(ConfigError::MissingSourceDir(self.src_dir.clone()));
        }
        if self.resize && (self.resize_x == 0 || self.resize_y == 0) {
            return Err(ConfigError::Validation(
                "resize_x and resize_y must be positive when resize is enabled".into(),
            ));
        }
        if self.auto_delete && self.delete_days == 0 {
            return Err(ConfigError::Validation(
                "delete_days must be positive when auto_delete is enabled".into(),
            ));
        }
        Ok(())
    }
}

/// The stock config file with all options documented.
///
/// Printed by the `gen-config` subcommand so users start from a complete,
/// commented template instead of an empty file.
pub fn stock_config_toml() -> String {
    r#"# snapkeep configuration
#
# src_dir is the only required key. Everything else is optional and
# shown here at its default value.

# Directory watched for newly created files. Must exist at startup.
src_dir = "incoming"

# Archive root. Created if missing. Files land in dst_dir/year/month/day/.
dst_dir = "archived"

# Resize recognized photos (jpg, jpeg, png, gif) before archiving.
resize = false
resize_x = 0
resize_y = 0
# true: fit within resize_x x resize_y, preserving proportions, never
# upscaling. false: force exact dimensions.
keep_ratio = true

# One informational log line per processed file. Errors are always logged.
logging = true

# Delete archived files older than delete_days at startup.
auto_delete = false
delete_days = 0

# Move the original into the day's partition. When false the original is
# deleted after processing instead - the source directory never retains
# a processed file either way.
archive_original = true

# Also keep the resized copy in the day's partition, under the original
# base filename.
archive_resized = false

# Applied to the archived original's base name: prefix + name + postfix,
# extension preserved ("p_" + "vacation" + "_done" -> p_vacation_done.png).
original_prefix = ""
original_postfix = ""

# Process files already present in src_dir once, before watching.
run_on_init = false
"#
    .to_string()
}
