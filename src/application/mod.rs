//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod job;
pub mod ports;

// Re-export use cases
pub use job::{
    completion_dialogs, Completion, CompletionDialog, DialogKind, OcrJobUseCase, SubmitError,
};
