//! OcrDesk CLI entry point

use std::process::ExitCode;

use clap::Parser;

use ocr_desk::cli::{
    app::{load_merged_config, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    daemon_app::run_daemon,
    daemon_cmd::handle_daemon_command,
    presenter::Presenter,
};
use ocr_desk::domain::config::AppConfig;
use ocr_desk::infrastructure::{desktop, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Registration flags reinstall the desktop entries and exit without
    // opening the interface.
    if cli.autostart {
        return match desktop::install_autostart_registration() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        };
    }
    if cli.applications {
        return match desktop::install_applications_registration() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Daemon { action }) => {
            if let Err(e) = handle_daemon_command(action, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        command: cli.ocr_command.clone(),
        notify: if cli.notify { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Route to appropriate handler
    if cli.daemon {
        run_daemon(config).await
    } else {
        match cli.input {
            Some(input) => run_oneshot(input, cli.output, config).await,
            None => {
                presenter.error(
                    "No input file. Pass a PDF or image path, or start with --daemon.",
                );
                ExitCode::from(EXIT_USAGE_ERROR)
            }
        }
    }
}
