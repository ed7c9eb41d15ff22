//! Freedesktop registration adapter
//!
//! Installs the application menu entry, the menu directory it lives in,
//! and optionally an autostart entry. Invoked once at startup; the
//! `--autostart` and `--applications` flags reinstall with overwrite and
//! exit without opening the interface.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Desktop entry identifier (also the StartupWMClass)
pub const APP_ID: &str = "ocr-desk";

const APP_NAME: &str = "OcrDesk";
const APP_COMMENT: &str = "Save OCR-augmented copies of PDF and image files";

/// Desktop registration errors
#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("Could not resolve the user directories")]
    NoBaseDirectory,

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

fn desktop_entry() -> String {
    format!(
        r#"[Desktop Entry]
Type=Application
Name={APP_NAME}
Comment={APP_COMMENT}
Exec={APP_ID} %f
Icon={APP_ID}
Terminal=true
Categories=Office;Scanning;
MimeType=application/pdf;image/png;image/jpeg;image/bmp;
StartupWMClass={APP_ID}
"#
    )
}

fn directory_entry() -> String {
    format!(
        r#"[Desktop Entry]
Type=Directory
Name={APP_NAME}
Icon={APP_ID}
"#
    )
}

fn menu_file() -> String {
    format!(
        r#"<!DOCTYPE Menu PUBLIC "-//freedesktop//DTD Menu 1.0//EN"
 "http://www.freedesktop.org/standards/menu-spec/menu-1.0.dtd">
<Menu>
  <Name>Applications</Name>
  <Menu>
    <Name>Office</Name>
    <Directory>{APP_ID}.directory</Directory>
    <Include>
      <Filename>{APP_ID}.desktop</Filename>
    </Include>
  </Menu>
</Menu>
"#
    )
}

fn write_entry(path: &Path, content: &str, overwrite: bool) -> Result<(), DesktopError> {
    if path.exists() && !overwrite {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DesktopError::WriteFailed {
            path: parent.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;
    }
    fs::write(path, content).map_err(|e| DesktopError::WriteFailed {
        path: path.to_string_lossy().to_string(),
        message: e.to_string(),
    })
}

/// Directory the application `.desktop` entry is installed into
pub fn applications_dir() -> Result<PathBuf, DesktopError> {
    Ok(dirs::data_local_dir()
        .ok_or(DesktopError::NoBaseDirectory)?
        .join("applications"))
}

/// Directory autostart entries are installed into
pub fn autostart_dir() -> Result<PathBuf, DesktopError> {
    Ok(dirs::config_dir()
        .ok_or(DesktopError::NoBaseDirectory)?
        .join("autostart"))
}

/// Write the application `.desktop` entry into `dir`
pub fn create_desktop_file(dir: &Path, overwrite: bool) -> Result<PathBuf, DesktopError> {
    let path = dir.join(format!("{APP_ID}.desktop"));
    write_entry(&path, &desktop_entry(), overwrite)?;
    Ok(path)
}

/// Write the menu directory entry
pub fn create_desktop_directory(overwrite: bool) -> Result<PathBuf, DesktopError> {
    let dir = dirs::data_local_dir()
        .ok_or(DesktopError::NoBaseDirectory)?
        .join("desktop-directories");
    create_desktop_directory_in(&dir, overwrite)
}

fn create_desktop_directory_in(dir: &Path, overwrite: bool) -> Result<PathBuf, DesktopError> {
    let path = dir.join(format!("{APP_ID}.directory"));
    write_entry(&path, &directory_entry(), overwrite)?;
    Ok(path)
}

/// Write the merged XDG menu file
pub fn create_desktop_menu(overwrite: bool) -> Result<PathBuf, DesktopError> {
    let dir = dirs::config_dir()
        .ok_or(DesktopError::NoBaseDirectory)?
        .join("menus")
        .join("applications-merged");
    create_desktop_menu_in(&dir, overwrite)
}

fn create_desktop_menu_in(dir: &Path, overwrite: bool) -> Result<PathBuf, DesktopError> {
    let path = dir.join(format!("{APP_ID}.menu"));
    write_entry(&path, &menu_file(), overwrite)?;
    Ok(path)
}

/// Ensure the registration exists, keeping whatever is already installed
pub fn ensure_registration() -> Result<(), DesktopError> {
    create_desktop_directory(false)?;
    create_desktop_menu(false)?;
    create_desktop_file(&applications_dir()?, false)?;
    Ok(())
}

/// Reinstall the registration into the applications menu (`--applications`)
pub fn install_applications_registration() -> Result<(), DesktopError> {
    create_desktop_directory(true)?;
    create_desktop_menu(true)?;
    create_desktop_file(&applications_dir()?, true)?;
    Ok(())
}

/// Reinstall the registration plus the autostart entry (`--autostart`)
pub fn install_autostart_registration() -> Result<(), DesktopError> {
    create_desktop_directory(true)?;
    create_desktop_menu(true)?;
    create_desktop_file(&autostart_dir()?, true)?;
    Ok(())
}
