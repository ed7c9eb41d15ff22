//! OCR job use case

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};

use crate::domain::document::{ensure_output_extension, suggest_output_path, CandidateFile};
use crate::domain::job::{InvalidStateTransition, JobReport, JobSession, JobSpec, JobState};

use super::ports::{NotificationIcon, Notifier, OcrRunner};

/// Errors from submitting a job
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("You did not select any file.")]
    NoFileSelected,

    #[error(transparent)]
    AlreadyRunning(#[from] InvalidStateTransition),
}

/// Severity of a completion dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Info,
}

/// A user-visible dialog produced by job completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionDialog {
    pub kind: DialogKind,
    pub title: &'static str,
    pub text: String,
}

/// Outcome of a consumed completion: the finished job and its dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub spec: JobSpec,
    pub dialogs: Vec<CompletionDialog>,
}

/// Map a job report to its completion dialogs.
///
/// Dialog selection follows the captured streams, not the exit status:
/// captured stdout is presented under the error title, captured stderr
/// under the all-ok title. ocrmypdf writes its run log to stderr, so a
/// normal run surfaces that log in the "work ended" dialog. Both dialogs
/// may appear; an empty report produces none.
pub fn completion_dialogs(report: &JobReport) -> Vec<CompletionDialog> {
    let mut dialogs = Vec::new();
    if !report.stdout.is_empty() {
        dialogs.push(CompletionDialog {
            kind: DialogKind::Error,
            title: "Error output",
            text: report.stdout.clone(),
        });
    }
    if !report.stderr.is_empty() {
        dialogs.push(CompletionDialog {
            kind: DialogKind::Info,
            title: "All OK - Work ended!",
            text: report.stderr.clone(),
        });
    }
    dialogs
}

/// OCR job use case.
///
/// Binds submission intent to the runner lifecycle: enforces single
/// flight, derives destinations, and translates completion reports into
/// user-visible dialogs. The session is mutated only from the task that
/// calls `submit` and `complete`; workers post one completion report per
/// job over the channel and never touch shared state.
pub struct OcrJobUseCase<R, N>
where
    R: OcrRunner + 'static,
    N: Notifier,
{
    runner: Arc<R>,
    notifier: N,
    session: Arc<Mutex<JobSession>>,
    enable_notify: bool,
    completion_tx: mpsc::Sender<JobReport>,
}

impl<R, N> OcrJobUseCase<R, N>
where
    R: OcrRunner + 'static,
    N: Notifier,
{
    /// Create a new use case instance.
    ///
    /// Returns the use case and the receiving end of its completion
    /// channel; the owning loop consumes one report per submitted job
    /// and feeds it back through [`complete`](Self::complete).
    pub fn new(runner: R, notifier: N, enable_notify: bool) -> (Self, mpsc::Receiver<JobReport>) {
        let (completion_tx, completion_rx) = mpsc::channel(1);
        (
            Self {
                runner: Arc::new(runner),
                notifier,
                session: Arc::new(Mutex::new(JobSession::new())),
                enable_notify,
                completion_tx,
            },
            completion_rx,
        )
    }

    /// Get the current run state
    pub async fn state(&self) -> JobState {
        self.session.lock().await.state()
    }

    /// Check if a job is currently executing
    pub async fn is_running(&self) -> bool {
        self.session.lock().await.is_running()
    }

    /// The active job, if any
    pub async fn active_job(&self) -> Option<JobSpec> {
        self.session.lock().await.active().cloned()
    }

    /// Submit a candidate for OCR.
    ///
    /// Only valid while idle. A missing or invalid candidate is rejected
    /// without starting anything. The destination falls back to the
    /// `.ocr.pdf` suggestion when absent and gets the output extension
    /// appended when present without one. On acceptance the session
    /// transitions to running and a worker is spawned; the worker posts
    /// exactly one report to the completion channel once the external
    /// command has exited and both streams are captured.
    pub async fn submit(
        &self,
        candidate: Option<&CandidateFile>,
        destination: Option<PathBuf>,
    ) -> Result<JobSpec, SubmitError> {
        let candidate = candidate
            .filter(|c| c.is_valid())
            .ok_or(SubmitError::NoFileSelected)?;

        let output = match destination {
            Some(dest) => ensure_output_extension(&dest),
            None => suggest_output_path(candidate.path()),
        };
        let spec = JobSpec {
            input: candidate.path().to_path_buf(),
            output,
        };

        {
            let mut session = self.session.lock().await;
            session.begin(spec.clone())?;
        }

        let runner = Arc::clone(&self.runner);
        let tx = self.completion_tx.clone();
        let input = spec.input.clone();
        let output = spec.output.clone();
        tokio::spawn(async move {
            // Execution failures are folded into the report so the
            // completion path is the same for every outcome.
            let report = match runner.run(&input, &output).await {
                Ok(report) => report,
                Err(e) => JobReport::new("", e.to_string()),
            };
            let _ = tx.send(report).await;
        });

        Ok(spec)
    }

    /// Consume a completion report.
    ///
    /// Always transitions back to idle and re-enables submission,
    /// regardless of what the report holds. Returns the finished job and
    /// the dialogs to present; when notifications are enabled the
    /// dialogs are also sent to the desktop.
    pub async fn complete(&self, report: JobReport) -> Result<Completion, InvalidStateTransition> {
        let spec = {
            let mut session = self.session.lock().await;
            session.finish()?
        };

        let dialogs = completion_dialogs(&report);

        if self.enable_notify {
            for dialog in &dialogs {
                let icon = match dialog.kind {
                    DialogKind::Error => NotificationIcon::Error,
                    DialogKind::Info => NotificationIcon::Success,
                };
                let _ = self.notifier.notify(dialog.title, &dialog.text, icon).await;
            }
        }

        Ok(Completion { spec, dialogs })
    }
}
