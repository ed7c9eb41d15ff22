//! Daemon command handler - sends commands to a running daemon over the socket

use super::args::DaemonAction;
use super::presenter::Presenter;
use super::socket::{DaemonSocketClient, SocketPath};

/// Handle daemon subcommand
pub async fn handle_daemon_command(
    action: DaemonAction,
    presenter: &Presenter,
) -> Result<(), String> {
    let client = DaemonSocketClient::new(SocketPath::new());

    // Check if daemon is running
    if !client.is_daemon_running() {
        return Err("No daemon running. Start with: ocr-desk --daemon".to_string());
    }

    let cmd = match &action {
        DaemonAction::Select { file } => format!("select {}", file.display()),
        DaemonAction::Save { output: Some(out) } => format!("save {}", out.display()),
        DaemonAction::Save { output: None } => "save".to_string(),
        DaemonAction::Status => "status".to_string(),
    };

    let response = client
        .send_command(&cmd)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    let response = response.trim();

    match action {
        DaemonAction::Status => {
            presenter.info(&format!("Daemon status: {}", response));
        }
        _ => {
            if let Some(stripped) = response.strip_prefix("error:") {
                return Err(stripped.trim().to_string());
            }
            presenter.info(&format!("Command sent: {}", cmd));
        }
    }

    Ok(())
}
