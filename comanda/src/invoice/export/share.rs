//! Handing exported files to the desktop: system opener and "save as".

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{AppError, Result};

/// Open the file with the system's default application.
pub fn open_with_system(path: &Path) -> Result<()> {
    open::that(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Could not open exported file");
        AppError::Export(format!("No se pudo abrir {}: {}", path.display(), e))
    })
}

/// Ask where to save a copy of `path`. `Ok(None)` when the user cancels.
pub fn save_copy_as(path: &Path) -> Result<Option<PathBuf>> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut dialog = rfd::FileDialog::new().set_file_name(file_name.as_str());
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        dialog = dialog.add_filter(ext.to_uppercase(), &[ext]);
    }

    let Some(target) = dialog.save_file() else {
        return Ok(None);
    };

    fs::copy(path, &target)
        .map_err(|e| AppError::Export(format!("No se pudo guardar {}: {}", target.display(), e)))?;
    tracing::info!(from = %path.display(), to = %target.display(), "Exported file copied");
    Ok(Some(target))
}
