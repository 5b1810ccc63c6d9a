//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the one operation the pipeline
//! needs: resize. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust,
//! statically linked, no system ImageMagick required.
//!
//! Keeping a trait at this seam lets pipeline tests run against a
//! recording mock without decoding a single pixel.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Parameters for a resize operation.
///
/// When `keep_ratio` is true the image is scaled to fit inside the
/// `width`×`height` box, preserving proportions and never upscaling.
/// When false the output is forced to exactly `width`×`height`.
#[derive(Debug, Clone)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub keep_ratio: bool,
}

/// Trait for image processing backends.
pub trait ImageBackend: Sync {
    /// Execute a resize operation, writing the result to `params.output`.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations without decoding anything.
    ///
    /// `resize` still writes a placeholder file to the output path so
    /// pipeline steps that relocate the staged copy can be exercised.
    /// Uses Mutex (not RefCell) so it stays Sync like the real backend.
    #[derive(Default)]
    pub struct MockBackend {
        pub operations: Mutex<Vec<RecordedOp>>,
        pub fail_sources: Mutex<Vec<String>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Resize {
            source: String,
            output: String,
            width: u32,
            height: u32,
            keep_ratio: bool,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make resize fail for any source path containing `fragment`.
        pub fn failing_on(fragment: &str) -> Self {
            Self {
                fail_sources: Mutex::new(vec![fragment.to_string()]),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        pub fn resize_count(&self) -> usize {
            self.get_operations().len()
        }
    }

    impl ImageBackend for MockBackend {
        fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
            let source = params.source.to_string_lossy().to_string();

            if self
                .fail_sources
                .lock()
                .unwrap()
                .iter()
                .any(|fragment| source.contains(fragment.as_str()))
            {
                return Err(BackendError::ProcessingFailed(format!(
                    "mock failure for {source}"
                )));
            }

            self.operations.lock().unwrap().push(RecordedOp::Resize {
                source,
                output: params.output.to_string_lossy().to_string(),
                width: params.width,
                height: params.height,
                keep_ratio: params.keep_ratio,
            });

            std::fs::write(&params.output, b"resized")?;
            Ok(())
        }
    }

    #[test]
    fn mock_records_resize_and_writes_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("out.jpg");
        let backend = MockBackend::new();

        backend
            .resize(&ResizeParams {
                source: "/source.jpg".into(),
                output: output.clone(),
                width: 800,
                height: 600,
                keep_ratio: true,
            })
            .unwrap();

        assert!(output.exists());
        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Resize {
                width: 800,
                height: 600,
                keep_ratio: true,
                ..
            }
        ));
    }

    #[test]
    fn mock_fails_on_configured_source() {
        let backend = MockBackend::failing_on("corrupt");

        let err = backend
            .resize(&ResizeParams {
                source: "/incoming/corrupt.jpg".into(),
                output: "/out/corrupt.jpg".into(),
                width: 100,
                height: 100,
                keep_ratio: false,
            })
            .unwrap_err();

        assert!(matches!(err, BackendError::ProcessingFailed(_)));
        assert!(backend.get_operations().is_empty());
    }
}
