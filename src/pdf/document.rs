use anyhow::{Context, Result};
use lopdf::{Document, ObjectId};
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(&path)
            .with_context(|| format!("Failed to open PDF: {}", path.as_ref().display()))?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Extract the zero-based half-open page range [start, end) to a new
    /// document. An empty range yields a document with no pages.
    pub fn extract_range(&self, start: u32, end: u32) -> Result<Document> {
        let mut new_doc = self.doc.clone();
        let all_pages = self.page_ids();

        // Pages NOT in the range, as lopdf's 1-indexed page numbers
        let pages_to_delete: Vec<u32> = all_pages
            .iter()
            .map(|(num, _)| *num)
            .filter(|num| {
                let idx = num - 1;
                idx < start || idx >= end
            })
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}
