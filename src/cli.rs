use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chapsplit")]
#[command(about = "Split a PDF into one file per bookmark")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub pdf_path: PathBuf,

    /// Dry run: report page ranges without writing files
    #[arg(short, long)]
    pub mock: bool,

    /// Bookmark nesting depth to flatten (-1 for all levels)
    #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
    pub depth: i32,

    /// Only split bookmarks whose title contains this substring
    #[arg(short, long, default_value = "")]
    pub key: String,

    /// Output directory (created if absent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the flattened bookmark list and exit
    #[arg(short, long)]
    pub list: bool,
}
