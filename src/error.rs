//! Error types for the crop operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while locating the crop tool or cropping a file.
#[derive(Error, Debug)]
pub enum CropError {
    /// The input path does not reference an existing file.
    #[error("PDF file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The crop tool is not on the command search path.
    #[error("{tool} command not found. Make sure {tool} is installed.")]
    ToolMissing { tool: String },

    /// The crop tool could not be started, failed, or wrote nothing.
    #[error("{tool} command failed: {reason}")]
    ToolExecution { tool: String, reason: String },

    /// A rename or the working directory setup failed.
    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CropError {
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = CropError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CropError::NotFound {
            path: PathBuf::from("missing.pdf"),
        };
        assert_eq!(err.to_string(), "PDF file not found: missing.pdf");
    }

    #[test]
    fn test_tool_missing_message() {
        let err = CropError::ToolMissing {
            tool: "pdfcrop".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pdfcrop command not found. Make sure pdfcrop is installed."
        );
    }

    #[test]
    fn test_filesystem_message_includes_source() {
        let err = CropError::filesystem(
            "rename",
            "doc.pdf",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to rename doc.pdf"));
        assert!(msg.ends_with("denied"));
    }
}
