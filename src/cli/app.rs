//! Main app runner for one-shot mode

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration as StdDuration;

use crate::application::ports::ConfigStore;
use crate::application::{DialogKind, OcrJobUseCase};
use crate::domain::config::AppConfig;
use crate::domain::document::CandidateFile;
use crate::domain::job::ticker::{ActivityTicker, TICK_INTERVAL_MS, WORK_END_STATUS};
use crate::infrastructure::{create_notifier, desktop, OcrmypdfRunner, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one OCR job against the given input
pub async fn run_oneshot(
    input: PathBuf,
    output: Option<PathBuf>,
    config: AppConfig,
) -> ExitCode {
    let mut presenter = Presenter::new();

    // Best-effort: make sure the menu entry exists
    let _ = desktop::ensure_registration();

    let candidate = CandidateFile::validate(input);
    if !candidate.is_valid() {
        presenter.warn(&format!(
            "Unsupported file type: {} (expected pdf, bmp, png, jpg or jpeg)",
            candidate.path().display()
        ));
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let runner = OcrmypdfRunner::with_command(config.command_or_default());
    let notifier = create_notifier();
    let (use_case, mut completions) =
        OcrJobUseCase::new(runner, notifier, config.notify_or_default());

    let spec = match use_case.submit(Some(&candidate), output).await {
        Ok(spec) => spec,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    presenter.info(&format!(
        "{} -> {}",
        spec.input.display(),
        spec.output.display()
    ));
    presenter.start_spinner("Working");

    // Animate the status line until the worker posts its report
    let mut ticker = ActivityTicker::new();
    let report = loop {
        tokio::select! {
            report = completions.recv() => break report,
            _ = tokio::time::sleep(StdDuration::from_millis(TICK_INTERVAL_MS)) => {
                presenter.update_spinner(&ticker.advance());
            }
        }
    };

    let Some(report) = report else {
        presenter.spinner_fail("Worker exited without reporting");
        return ExitCode::from(EXIT_ERROR);
    };

    match use_case.complete(report).await {
        Ok(completion) => {
            presenter.spinner_success(WORK_END_STATUS);
            for dialog in &completion.dialogs {
                presenter.dialog(dialog);
            }

            let failed = completion
                .dialogs
                .iter()
                .any(|d| d.kind == DialogKind::Error);
            if failed {
                ExitCode::from(EXIT_ERROR)
            } else {
                presenter.output(&completion.spec.output.display().to_string());
                ExitCode::from(EXIT_SUCCESS)
            }
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        command: env::var("OCR_DESK_COMMAND").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
