mod bookmarks;
mod cli;
mod pdf;
mod sanitize;
mod split;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.pdf_path.is_file() {
        anyhow::bail!("Invalid PDF path: {}", cli.pdf_path.display());
    }

    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Invalid output path: {}", dir.display()))?;
    }

    let doc = pdf::PdfDocument::open(&cli.pdf_path)?;
    let outline = pdf::extract_outline(&doc.doc)?;
    let bookmarks = bookmarks::flatten_outline(&outline, cli.depth);

    if cli.list {
        for bookmark in &bookmarks {
            println!("{}", bookmark.list_line());
        }
        return Ok(());
    }

    let options = split::SplitOptions {
        key: cli.key,
        output_dir: cli.output,
        mock: cli.mock,
    };
    split::run(&doc, &bookmarks, &options)
}
