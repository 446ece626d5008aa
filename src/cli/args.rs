//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Crop a PDF file in place using pdfcrop
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the PDF file to crop
    pub pdf_path: PathBuf,

    /// Replace the original file without creating a backup
    #[arg(short, long)]
    pub replace: bool,
}
