//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// OcrDesk - save OCR-augmented copies of PDF and image files
#[derive(Parser, Debug)]
#[command(name = "ocr-desk")]
#[command(version)]
#[command(about = "Run ocrmypdf against a PDF or image file and save the OCR result")]
#[command(long_about = None)]
pub struct Cli {
    /// Input file to OCR (pdf, bmp, png, jpg, jpeg)
    #[arg(value_name = "FILE", conflicts_with = "daemon")]
    pub input: Option<PathBuf>,

    /// Destination for the OCR result (defaults to <input>.ocr.pdf)
    #[arg(short = 'o', long, value_name = "FILE", conflicts_with = "daemon")]
    pub output: Option<PathBuf>,

    /// Show completion dialogs as desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// External OCR command to execute
    #[arg(long, value_name = "COMMAND")]
    pub ocr_command: Option<String>,

    /// Run as daemon (control via: ocr-desk daemon select/save/status)
    #[arg(long)]
    pub daemon: bool,

    /// (Re)install the desktop registration plus an autostart entry, then exit
    #[arg(long, conflicts_with_all = ["applications", "daemon", "input"])]
    pub autostart: bool,

    /// (Re)install the desktop registration into the applications menu, then exit
    #[arg(long, conflicts_with_all = ["daemon", "input"])]
    pub applications: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Send commands to running daemon
    Daemon {
        #[command(subcommand)]
        action: DaemonAction,
    },
}

/// Daemon control actions
#[derive(Subcommand, Debug, Clone)]
pub enum DaemonAction {
    /// Select the file to OCR
    Select {
        /// Path to a PDF or image file
        file: PathBuf,
    },
    /// Run OCR on the selected file and save the result
    Save {
        /// Destination path (defaults to <input>.ocr.pdf)
        output: Option<PathBuf>,
    },
    /// Show daemon status
    Status,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["command", "notify"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
