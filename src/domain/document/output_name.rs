//! Output destination derivation

use std::path::{Path, PathBuf};

/// Marker inserted before the extension of suggested destinations
pub const OUTPUT_MARKER: &str = "ocr";

/// Extension the OCR result is saved with
pub const OUTPUT_EXTENSION: &str = "pdf";

/// Suggest a destination name for an input file by replacing its
/// extension with the `.ocr.pdf` marker: `report.pdf` -> `report.ocr.pdf`,
/// `scan.png` -> `scan.ocr.pdf`.
pub fn suggest_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}.{OUTPUT_MARKER}.{OUTPUT_EXTENSION}"))
}

/// Append the required output extension when the chosen destination lacks
/// it (case-insensitive): `out` -> `out.pdf`, `out.PDF` stays as is.
pub fn ensure_output_extension(path: &Path) -> PathBuf {
    let name = path.to_string_lossy();
    if name.to_lowercase().ends_with(&format!(".{OUTPUT_EXTENSION}")) {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{name}.{OUTPUT_EXTENSION}"))
    }
}
