//! Locating and running the external crop tool.
//!
//! The tool is resolved once at startup. A bare name (`pdfcrop`) is searched
//! on `$PATH`; anything containing a path separator is used as given.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{CropError, Result};

/// A crop program that was found on disk, plus the extra arguments placed
/// before `<input> <output>` on every call.
#[derive(Debug, Clone)]
pub struct CropTool {
    name: String,
    program: PathBuf,
    args: Vec<String>,
}

impl CropTool {
    /// Resolve `name` against the current process `$PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::ToolMissing`] if no executable file matches.
    pub fn locate(name: &str, args: Vec<String>) -> Result<Self> {
        Self::locate_in(name, args, std::env::var_os("PATH").as_deref())
    }

    /// Resolve `name` against an explicit search path.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::ToolMissing`] if no executable file matches.
    pub fn locate_in(name: &str, args: Vec<String>, search_path: Option<&OsStr>) -> Result<Self> {
        let program =
            find_executable(name, search_path).ok_or_else(|| CropError::ToolMissing {
                tool: name.to_string(),
            })?;
        debug!(tool = name, program = %program.display(), "located crop tool");

        Ok(Self {
            name: name.to_string(),
            program,
            args,
        })
    }

    /// Name the tool was configured with, used in user-facing messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `<tool> [args...] <input> <output>` and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::ToolExecution`] if the process cannot be spawned
    /// or does not exit successfully.
    pub fn run(&self, input: &Path, output: &Path) -> Result<()> {
        debug!(
            program = %self.program.display(),
            input = %input.display(),
            output = %output.display(),
            "running crop tool"
        );

        // Inherited stdio: the tool's progress and errors reach the user directly.
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .arg(output)
            .status()
            .map_err(|e| self.execution_error(format!("could not start: {e}")))?;

        if status.success() {
            return Ok(());
        }

        let reason = match status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        };
        warn!(tool = %self.name, %reason, "crop tool failed");
        Err(self.execution_error(reason))
    }

    pub(crate) fn execution_error(&self, reason: impl Into<String>) -> CropError {
        CropError::ToolExecution {
            tool: self.name.clone(),
            reason: reason.into(),
        }
    }
}

/// Find `name` as an executable file, searching `search_path` for bare names.
fn find_executable(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let pathext = if cfg!(windows) {
        std::env::var_os("PATHEXT")
    } else {
        None
    };
    let names = executable_names(name, pathext.as_deref());

    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        let dir = candidate.parent()?;
        return names
            .iter()
            .map(|file| dir.join(file))
            .find(|path| is_executable(path));
    }

    std::env::split_paths(search_path?)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| names.iter().map(move |file| dir.join(file)))
        .find(|path| is_executable(path))
}

/// File names to try for `name`: the name itself, then one per `PATHEXT`
/// suffix when the name has no extension of its own.
fn executable_names(name: &str, pathext: Option<&OsStr>) -> Vec<String> {
    let file_name = Path::new(name)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(name);
    let mut names = vec![file_name.to_string()];

    if Path::new(file_name).extension().is_none() {
        if let Some(exts) = pathext.and_then(OsStr::to_str) {
            names.extend(
                exts.split(';')
                    .map(str::trim)
                    .filter(|ext| !ext.is_empty())
                    .map(|ext| format!("{file_name}{}", ext.to_ascii_lowercase())),
            );
        }
    }

    names
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}
