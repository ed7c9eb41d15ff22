//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like ocrmypdf, the desktop
//! notification service, and the freedesktop menu registration.

pub mod config;
pub mod desktop;
pub mod notification;
pub mod ocr;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier, NotifySendNotifier};
pub use ocr::OcrmypdfRunner;
