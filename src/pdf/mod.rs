pub mod document;
pub mod outline;

pub use document::PdfDocument;
pub use outline::{extract_outline, OutlineNode};
