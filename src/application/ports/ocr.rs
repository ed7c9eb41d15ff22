//! OCR runner port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::job::JobReport;

/// OCR execution errors
#[derive(Debug, Clone, Error)]
pub enum OcrError {
    #[error("Failed to start OCR command: {0}")]
    SpawnFailed(String),
}

/// Port for running the external OCR command against an input/output
/// path pair.
///
/// Implementations capture both streams in full before returning. A
/// non-zero exit status is not an error; the captured text carries the
/// diagnostics. A missing binary is reported through the report's stderr
/// text, not as an `Err`. Callers must not start a second run while one
/// is in flight (enforced by the job use case, not by implementations).
#[async_trait]
pub trait OcrRunner: Send + Sync {
    /// Run the command with the input and output paths as its two
    /// positional arguments and capture both streams as text.
    async fn run(&self, input: &Path, output: &Path) -> Result<JobReport, OcrError>;
}

/// Blanket implementation for boxed runner types
#[async_trait]
impl OcrRunner for Box<dyn OcrRunner> {
    async fn run(&self, input: &Path, output: &Path) -> Result<JobReport, OcrError> {
        self.as_ref().run(input, output).await
    }
}
