use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "md-merge",
    about = "Merge multiple Markdown files into a single document",
    version,
)]
pub struct Cli {
    /// Markdown files to merge, in order
    pub files: Vec<PathBuf>,

    /// Directory scanned recursively for `.md` files, merged alphabetically
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Path of the merged output file [default: ./md-merge-<uuid>.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Title written into the document header
    #[arg(short, long)]
    pub title: Option<String>,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
