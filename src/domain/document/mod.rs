//! Document domain: candidate files and output naming

pub mod candidate;
pub mod output_name;

pub use candidate::{CandidateFile, FileKind};
pub use output_name::{ensure_output_extension, suggest_output_path};
