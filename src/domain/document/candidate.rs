//! Candidate file gate

use std::fmt;
use std::path::{Path, PathBuf};

/// File kinds eligible for OCR submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileKind {
    Pdf,
    Bmp,
    Png,
    Jpeg,
    #[default]
    Invalid,
}

impl FileKind {
    /// Infer the kind from a path extension (case-insensitive).
    /// `jpg` and `jpeg` both map to [`FileKind::Jpeg`].
    pub fn from_path(path: &Path) -> Self {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_lowercase(),
            None => return Self::Invalid,
        };

        match ext.as_str() {
            "pdf" => Self::Pdf,
            "bmp" => Self::Bmp,
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            _ => Self::Invalid,
        }
    }

    /// Whether this kind may be submitted for OCR
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Bmp => "bmp",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate file: a path plus its inferred kind, gating eligibility
/// for submission. Immutable once built; a new selection replaces the
/// candidate wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    path: PathBuf,
    kind: FileKind,
}

impl CandidateFile {
    /// Validate a path by extension alone. No content sniffing, no
    /// existence check; the same path always yields the same kind.
    pub fn validate(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = FileKind::from_path(&path);
        Self { path, kind }
    }

    /// The candidate's path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The inferred kind
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Whether the candidate may be submitted
    pub fn is_valid(&self) -> bool {
        self.kind.is_valid()
    }
}
