//! ocrmypdf command adapter

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{OcrError, OcrRunner};
use crate::domain::config::DEFAULT_COMMAND;
use crate::domain::job::JobReport;

/// Runner spawning the external `ocrmypdf` command.
///
/// The child gets exactly two positional arguments, input path then
/// output path. Both streams are captured in full before the run is
/// considered complete; the exit status is not surfaced, the captured
/// text is.
pub struct OcrmypdfRunner {
    command: String,
}

impl OcrmypdfRunner {
    /// Create a runner for the default `ocrmypdf` command
    pub fn new() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
        }
    }

    /// Create a runner for a custom command name
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command this runner spawns
    pub fn command(&self) -> &str {
        &self.command
    }

    fn missing_command_report(&self) -> JobReport {
        JobReport::new(
            "",
            format!(
                "Error: {} is not installed or not on the PATH.",
                self.command
            ),
        )
    }
}

impl Default for OcrmypdfRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrRunner for OcrmypdfRunner {
    async fn run(&self, input: &Path, output: &Path) -> Result<JobReport, OcrError> {
        let result = Command::new(&self.command)
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match result {
            // Streams are returned whatever the exit status was; a failed
            // run is debuggable through its captured text, not a crash.
            Ok(out) => Ok(JobReport::new(
                String::from_utf8_lossy(&out.stdout).into_owned(),
                String::from_utf8_lossy(&out.stderr).into_owned(),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(self.missing_command_report())
            }
            Err(e) => Err(OcrError::SpawnFailed(e.to_string())),
        }
    }
}
