//! Application-wide constants.
//!
//! File names, defaults and the user-facing messages printed by the CLI.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

// === Crop Tool ===

/// Crop tool looked up on `$PATH` when the config does not name another one.
pub const DEFAULT_TOOL: &str = "pdfcrop";
/// Extension appended to the original file when it is kept as a backup.
pub const BACKUP_EXTENSION: &str = "bak";
/// Name of the cropped output inside the scoped working directory.
pub const TEMP_PDF_NAME: &str = "temp.pdf";
/// Prefix of the scoped working directory created next to the target file.
pub const TEMP_DIR_PREFIX: &str = ".pdfcrop-";

// === Path Configuration ===

/// Name of the configuration file inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Logging ===

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// === Messages: CLI Output ===

pub const CLI_MSG_SUCCESS: &str = "Successfully cropped ";
pub const CLI_MSG_ERROR: &str = "Error: ";
