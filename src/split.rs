use crate::bookmarks::Bookmark;
use crate::pdf::PdfDocument;
use crate::sanitize::sanitize_file_name;
use anyhow::Result;
use std::path::PathBuf;

pub struct SplitOptions {
    /// Only sections whose title contains this substring are processed.
    /// Empty means no filtering.
    pub key: String,
    pub output_dir: Option<PathBuf>,
    pub mock: bool,
}

/// A contiguous page range attributed to one bookmark. Zero-based,
/// half-open: `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub start: u32,
    pub end: u32,
}

/// Derive each bookmark's section from the ordering of the full list:
/// a bookmark runs until the next bookmark starts, and the last one
/// runs to the end of the document.
pub fn compute_sections(bookmarks: &[Bookmark], total_pages: u32) -> Vec<Section> {
    bookmarks
        .iter()
        .enumerate()
        .map(|(i, bookmark)| {
            let end = match bookmarks.get(i + 1) {
                Some(next) => next.start_page,
                None => total_pages,
            };
            Section {
                title: bookmark.title.clone(),
                start: bookmark.start_page,
                end,
            }
        })
        .collect()
}

/// Write one PDF per section, or report the ranges in mock mode.
///
/// Filtering happens after section boundaries are computed, so a
/// filtered-out bookmark still bounds its neighbor's page range.
pub fn run(doc: &PdfDocument, bookmarks: &[Bookmark], options: &SplitOptions) -> Result<()> {
    let sections = compute_sections(bookmarks, doc.page_count());

    for section in &sections {
        if !matches_key(&options.key, &section.title) {
            continue;
        }

        if options.mock {
            println!("Title: {}", section.title);
            println!("Start page: {}", section.start);
            println!("End page: {}", section.end);
            println!();
            continue;
        }

        let mut new_doc = doc.extract_range(section.start, section.end)?;

        let file_name = section_file_name(&section.title);
        let output_path = match &options.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        };

        PdfDocument::save(&mut new_doc, &output_path)?;
        println!("Created: {}", output_path.display());
    }

    Ok(())
}

/// An empty key selects everything; otherwise the key must appear in
/// the title, case-sensitively.
fn matches_key(key: &str, title: &str) -> bool {
    key.is_empty() || title.contains(key)
}

fn section_file_name(title: &str) -> String {
    format!("{}.pdf", sanitize_file_name(title, "_", None))
}
