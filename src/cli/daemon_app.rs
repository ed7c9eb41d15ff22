//! Daemon app runner

use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use tokio::sync::mpsc;

use crate::application::ports::{Notifier, OcrRunner};
use crate::application::{OcrJobUseCase, SubmitError};
use crate::domain::config::AppConfig;
use crate::domain::document::CandidateFile;
use crate::domain::job::ticker::{
    ActivityTicker, TICK_INTERVAL_MS, WORK_END_HOLD_MS, WORK_END_STATUS,
};
use crate::domain::job::{JobReport, JobState};
use crate::infrastructure::{create_notifier, desktop, OcrmypdfRunner};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{DaemonEvent, DaemonEventHandler};
use super::socket::{DaemonSocketServer, SocketPath, StatusSnapshot};

/// Status shown while no job is running and nothing just finished
const READY_STATUS: &str = "Ready";

/// Run daemon mode
pub async fn run_daemon(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    // Best-effort: make sure the menu entry exists
    let _ = desktop::ensure_registration();

    // Acquire PID file
    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another daemon is already running (PID: {})", pid));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    // Create adapters and the job use case
    let runner = OcrmypdfRunner::with_command(config.command_or_default());
    let notifier = create_notifier();
    let (use_case, mut completions) =
        OcrJobUseCase::new(runner, notifier, config.notify_or_default());

    // Setup event handler (returns handler + sender for socket server)
    let (mut events, events_tx) = match DaemonEventHandler::new().await {
        Ok(e) => e,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Setup socket server
    let socket_path = SocketPath::new();
    let mut socket_server = DaemonSocketServer::new(socket_path.clone());

    if let Err(e) = socket_server.bind() {
        presenter.error(&format!("Failed to bind socket: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    // Share a state snapshot with the socket server for status queries
    let snapshot = Arc::new(Mutex::new(StatusSnapshot::default()));
    let snapshot_for_socket = Arc::clone(&snapshot);

    // Spawn socket server task
    let socket_tx = events_tx.clone();
    tokio::spawn(async move {
        let _ = socket_server
            .run(socket_tx, move || {
                // Use std::sync::Mutex - safe because lock is very brief
                snapshot_for_socket
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .clone()
            })
            .await;
    });

    presenter.daemon_status("Started, waiting for commands...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | SIGINT: exit",
        std::process::id(),
        socket_path.path().display()
    ));

    let result = daemon_loop(
        &use_case,
        &mut completions,
        &mut events,
        events_tx,
        &presenter,
        &snapshot,
    )
    .await;

    // Cleanup (socket server Drop will clean up socket file)
    let _ = pid_file.release();

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

async fn daemon_loop<R, N>(
    use_case: &OcrJobUseCase<R, N>,
    completions: &mut mpsc::Receiver<JobReport>,
    events: &mut DaemonEventHandler,
    events_tx: mpsc::Sender<DaemonEvent>,
    presenter: &Presenter,
    snapshot: &Arc<Mutex<StatusSnapshot>>,
) -> bool
where
    R: OcrRunner + 'static,
    N: Notifier,
{
    let mut selected: Option<CandidateFile> = None;
    let mut ticker = ActivityTicker::new();

    loop {
        let running = use_case.is_running().await;

        // Refresh the snapshot served to status queries
        if let Ok(mut guard) = snapshot.lock() {
            guard.state = if running {
                JobState::Running
            } else {
                JobState::Idle
            };
            guard.selected = selected.as_ref().map(|c| c.path().to_path_buf());
        }

        tokio::select! {
            event = events.recv() => match event {
                Some(DaemonEvent::Select(path)) => {
                    // Same gate as the one-shot entry point; invalid
                    // candidates are dropped without touching the selection
                    let candidate = CandidateFile::validate(path);
                    if candidate.is_valid() {
                        presenter.info(&format!("Selected: {}", candidate.path().display()));
                        selected = Some(candidate);
                    }
                }
                Some(DaemonEvent::Save(destination)) => {
                    match use_case.submit(selected.as_ref(), destination).await {
                        Ok(spec) => {
                            presenter.info(&format!(
                                "{} -> {}",
                                spec.input.display(),
                                spec.output.display()
                            ));
                            presenter.daemon_status("Working");
                        }
                        Err(SubmitError::NoFileSelected) => {
                            presenter.warn("You did not select any file.");
                        }
                        Err(SubmitError::AlreadyRunning(_)) => {
                            presenter.warn("A job is already running, please wait");
                        }
                    }
                }
                Some(DaemonEvent::ResetStatus) => {
                    if !use_case.is_running().await {
                        presenter.daemon_status(READY_STATUS);
                    }
                }
                Some(DaemonEvent::Shutdown) => {
                    presenter.daemon_status("Shutting down...");
                    return true;
                }
                None => return false,
            },
            report = completions.recv() => match report {
                Some(report) => {
                    match use_case.complete(report).await {
                        Ok(completion) => {
                            presenter.daemon_status(WORK_END_STATUS);
                            for dialog in &completion.dialogs {
                                presenter.dialog(dialog);
                            }

                            // Revert the status line after the hold period
                            let tx = events_tx.clone();
                            tokio::spawn(async move {
                                tokio::time::sleep(StdDuration::from_millis(WORK_END_HOLD_MS))
                                    .await;
                                let _ = tx.send(DaemonEvent::ResetStatus).await;
                            });
                        }
                        Err(e) => {
                            presenter.error(&format!("Stray completion: {}", e));
                        }
                    }
                }
                None => return false,
            },
            _ = tokio::time::sleep(StdDuration::from_millis(TICK_INTERVAL_MS)), if running => {
                presenter.daemon_status(&ticker.advance());
            }
        }
    }
}
