//! Unix Domain Socket communication for daemon control

use std::io;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;

use super::signals::DaemonEvent;
use crate::domain::document::CandidateFile;
use crate::domain::job::JobState;

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Create socket path, preferring XDG_RUNTIME_DIR
    pub fn new() -> Self {
        let path = std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("ocr-desk.sock"))
            .unwrap_or_else(|_| std::env::temp_dir().join("ocr-desk.sock"));
        Self { path }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of daemon state served to status queries
#[derive(Debug, Clone, Default)]
pub struct StatusSnapshot {
    pub state: JobState,
    pub selected: Option<PathBuf>,
}

impl StatusSnapshot {
    /// Render the status response line
    pub fn render(&self) -> String {
        match &self.selected {
            Some(path) => format!("{} {}\n", self.state, path.display()),
            None => format!("{}\n", self.state),
        }
    }
}

/// Process one protocol line.
///
/// Returns the event to forward to the daemon loop (if any) and the
/// response line for the client. `select` runs the same candidate gate
/// the one-shot path uses, so an unsupported extension never reaches
/// the loop.
pub fn process_command(
    line: &str,
    snapshot: &StatusSnapshot,
) -> (Option<DaemonEvent>, String) {
    let trimmed = line.trim();
    let (cmd, arg) = match trimmed.split_once(' ') {
        Some((cmd, arg)) => (cmd, Some(arg.trim())),
        None => (trimmed, None),
    };

    match cmd {
        "select" => match arg.filter(|a| !a.is_empty()) {
            Some(path) => {
                let candidate = CandidateFile::validate(path);
                if candidate.is_valid() {
                    (
                        Some(DaemonEvent::Select(PathBuf::from(path))),
                        "ok\n".to_string(),
                    )
                } else {
                    (None, "error: unsupported file type\n".to_string())
                }
            }
            None => (None, "error: missing path\n".to_string()),
        },
        "save" => {
            let output = arg.filter(|a| !a.is_empty()).map(PathBuf::from);
            (Some(DaemonEvent::Save(output)), "ok\n".to_string())
        }
        "status" => (None, snapshot.render()),
        _ => (None, "error: unknown command\n".to_string()),
    }
}

/// Daemon socket server - listens for commands and sends to channel
pub struct DaemonSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl DaemonSocketServer {
    /// Create a new socket server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }

    /// Bind to the socket
    pub fn bind(&mut self) -> io::Result<()> {
        // Remove stale socket file if it exists
        self.socket_path.cleanup()?;

        let listener = UnixListener::bind(self.socket_path.path())?;
        self.listener = Some(listener);
        Ok(())
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        self.socket_path.path()
    }

    /// Accept and handle connections
    ///
    /// Runs in a loop, accepting connections and processing commands.
    /// Each accepted command is sent to the provided channel. The
    /// snapshot_fn is called per connection to answer status queries.
    pub async fn run<F>(&self, tx: mpsc::Sender<DaemonEvent>, snapshot_fn: F) -> io::Result<()>
    where
        F: Fn() -> StatusSnapshot + Send + Sync + 'static,
    {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let tx = tx.clone();
                    let snapshot = snapshot_fn();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, tx, snapshot).await {
                            eprintln!("Socket connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("Socket accept error: {}", e);
                }
            }
        }
    }

    /// Cleanup socket file
    pub fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

impl Drop for DaemonSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Handle a single client connection
async fn handle_connection(
    stream: UnixStream,
    tx: mpsc::Sender<DaemonEvent>,
    snapshot: StatusSnapshot,
) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    // Read command
    reader.read_line(&mut line).await?;

    let (event, response) = process_command(&line, &snapshot);
    if let Some(event) = event {
        let _ = tx.send(event).await;
    }

    writer.write_all(response.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Daemon socket client - connects and sends commands
pub struct DaemonSocketClient {
    socket_path: SocketPath,
}

impl DaemonSocketClient {
    /// Create a new socket client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }

    /// Check if daemon appears to be running (socket exists)
    pub fn is_daemon_running(&self) -> bool {
        self.socket_path.exists()
    }

    /// Send a command and receive response
    pub async fn send_command(&self, cmd: &str) -> io::Result<String> {
        let stream = UnixStream::connect(self.socket_path.path()).await?;
        let (reader, mut writer) = stream.into_split();

        // Send command
        writer.write_all(format!("{}\n", cmd).as_bytes()).await?;
        writer.flush().await?;

        // Read response
        let mut reader = BufReader::new(reader);
        let mut response = String::new();
        reader.read_line(&mut response).await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_path_resolution() {
        let expected = std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("ocr-desk.sock"))
            .unwrap_or_else(|_| std::env::temp_dir().join("ocr-desk.sock"));

        let socket_path = SocketPath::new();
        assert_eq!(socket_path.path(), expected.as_path());
    }

    #[test]
    fn select_with_supported_extension_is_forwarded() {
        let (event, response) = process_command("select /tmp/scan.pdf\n", &StatusSnapshot::default());
        assert_eq!(event, Some(DaemonEvent::Select(PathBuf::from("/tmp/scan.pdf"))));
        assert_eq!(response, "ok\n");
    }

    #[test]
    fn select_with_unsupported_extension_is_rejected() {
        let (event, response) = process_command("select notes.txt\n", &StatusSnapshot::default());
        assert!(event.is_none());
        assert_eq!(response, "error: unsupported file type\n");
    }

    #[test]
    fn select_without_path_is_rejected() {
        let (event, response) = process_command("select\n", &StatusSnapshot::default());
        assert!(event.is_none());
        assert_eq!(response, "error: missing path\n");
    }

    #[test]
    fn save_without_destination() {
        let (event, response) = process_command("save\n", &StatusSnapshot::default());
        assert_eq!(event, Some(DaemonEvent::Save(None)));
        assert_eq!(response, "ok\n");
    }

    #[test]
    fn save_with_destination() {
        let (event, _) = process_command("save out\n", &StatusSnapshot::default());
        assert_eq!(event, Some(DaemonEvent::Save(Some(PathBuf::from("out")))));
    }

    #[test]
    fn status_reports_state_and_selection() {
        let snapshot = StatusSnapshot {
            state: JobState::Running,
            selected: Some(PathBuf::from("scan.pdf")),
        };
        let (event, response) = process_command("status", &snapshot);
        assert!(event.is_none());
        assert_eq!(response, "running scan.pdf\n");

        let (_, response) = process_command("status", &StatusSnapshot::default());
        assert_eq!(response, "idle\n");
    }

    #[test]
    fn unknown_command_is_rejected() {
        let (event, response) = process_command("toggle\n", &StatusSnapshot::default());
        assert!(event.is_none());
        assert_eq!(response, "error: unknown command\n");
    }
}
