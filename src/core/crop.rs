//! The crop-and-swap operation.
//!
//! The tool writes into a scoped working directory next to the target; the
//! result is then renamed over the original, optionally after moving the
//! original aside to `<path>.bak`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants;
use crate::core::tool::CropTool;
use crate::error::{CropError, Result};

/// Crop `pdf_path` in place with `tool`.
///
/// With `replace == false` the original is kept as `<pdf_path>.bak`,
/// overwriting any earlier backup. The working directory is removed on every
/// return path.
///
/// If the backup rename succeeds but the final rename fails, only the `.bak`
/// file is left behind. There is no rollback.
///
/// # Errors
///
/// * [`CropError::NotFound`] if `pdf_path` is not an existing file.
/// * [`CropError::ToolExecution`] if the tool fails or writes nothing. The
///   original file is untouched in that case.
/// * [`CropError::Filesystem`] if the working directory or a rename fails.
pub fn crop_pdf(tool: &CropTool, pdf_path: &Path, replace: bool) -> Result<()> {
    if !pdf_path.is_file() {
        return Err(CropError::NotFound {
            path: pdf_path.to_path_buf(),
        });
    }

    // Same directory as the target so the final rename stays on one filesystem.
    let parent = match pdf_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let work_dir = tempfile::Builder::new()
        .prefix(constants::TEMP_DIR_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| CropError::filesystem("create working directory in", parent, e))?;
    let cropped = work_dir.path().join(constants::TEMP_PDF_NAME);
    debug!(path = %cropped.display(), "cropping into working file");

    tool.run(pdf_path, &cropped)?;

    if !cropped.is_file() {
        return Err(tool.execution_error("exited successfully but wrote no output"));
    }

    if !replace {
        let backup = backup_path(pdf_path);
        fs::rename(pdf_path, &backup)
            .map_err(|e| CropError::filesystem("back up", pdf_path, e))?;
        debug!(backup = %backup.display(), "kept original as backup");
    }

    fs::rename(&cropped, pdf_path)
        .map_err(|e| CropError::filesystem("move cropped file to", pdf_path, e))?;

    info!(path = %pdf_path.display(), replace, "cropped");
    Ok(())
}

/// `<path>.bak`, keeping the original extension.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(constants::BACKUP_EXTENSION);
    PathBuf::from(name)
}
