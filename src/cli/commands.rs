//! CLI command handlers.
//!
//! Runs the crop and turns its outcome into the printed message and exit code.

use std::path::Path;
use std::process::ExitCode;

use crate::cli::args::Args;
use crate::constants;
use crate::core::{crop_pdf, CropTool};
use crate::error::{CropError, Result};

/// Crop the file named on the command line and report the result.
pub fn crop(tool: &CropTool, args: &Args) -> ExitCode {
    let result = crop_pdf(tool, &args.pdf_path, args.replace);

    match outcome_message(tool.name(), &args.pdf_path, &result) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Report a failed tool lookup. Called before any argument is parsed.
pub fn tool_missing(err: &CropError) -> ExitCode {
    eprintln!("{}{err}", constants::CLI_MSG_ERROR);
    ExitCode::FAILURE
}

/// Line to print for a crop result: `Ok` goes to stdout, `Err` to stderr.
fn outcome_message(tool: &str, path: &Path, result: &Result<()>) -> Result<String, String> {
    match result {
        Ok(()) => Ok(format!("{}{}", constants::CLI_MSG_SUCCESS, path.display())),
        Err(CropError::ToolExecution { .. }) => Err(format!(
            "{}{tool} command failed. Make sure {tool} is installed.",
            constants::CLI_MSG_ERROR
        )),
        Err(err) => Err(format!("{}{err}", constants::CLI_MSG_ERROR)),
    }
}
