//! pdfcrop-swap: crop a PDF in place with `pdfcrop`.
//!
//! Startup order matters: the crop tool is located before arguments are
//! parsed, so a missing tool is reported even for `--help`.

mod cli;
mod config;
mod constants;
mod core;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use crate::cli::args::Args;
use crate::cli::commands;
use crate::config::Config;
use crate::core::CropTool;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(&config.log_level);

    let tool = match CropTool::locate(&config.tool, config.tool_args) {
        Ok(tool) => tool,
        Err(err) => return Ok(commands::tool_missing(&err)),
    };

    let args = Args::parse();
    Ok(commands::crop(&tool, &args))
}
