//! Signal handling and the daemon event type

use std::path::PathBuf;

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Events driving the daemon loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonEvent {
    /// Replace the current selection with a new candidate path
    Select(PathBuf),
    /// Submit the selection for OCR, with an optional destination
    Save(Option<PathBuf>),
    /// Revert the transient completion status line
    ResetStatus,
    /// Shutdown daemon (SIGINT/SIGTERM)
    Shutdown,
}

/// Daemon event handler
///
/// Handles OS shutdown signals (SIGINT/SIGTERM) and provides a channel
/// for receiving daemon commands from other sources (e.g., socket server).
pub struct DaemonEventHandler {
    receiver: mpsc::Receiver<DaemonEvent>,
}

impl DaemonEventHandler {
    /// Create a new daemon event handler and start listening for shutdown
    /// signals.
    ///
    /// Returns the handler and a sender that can be used by other sources
    /// (like a socket server) to send commands to the daemon loop.
    pub async fn new() -> Result<(Self, mpsc::Sender<DaemonEvent>), std::io::Error> {
        let (tx, rx) = mpsc::channel(10);

        // Setup SIGINT handler (shutdown)
        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
            let _ = tx_int.send(DaemonEvent::Shutdown).await;
        });

        // Setup SIGTERM handler (shutdown)
        let tx_term = tx.clone();
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
            let _ = tx_term.send(DaemonEvent::Shutdown).await;
        });

        Ok((Self { receiver: rx }, tx))
    }

    /// Wait for the next event
    pub async fn recv(&mut self) -> Option<DaemonEvent> {
        self.receiver.recv().await
    }
}
