//! Text extraction: upload validation, PDF parsing, and the document model
//! handed to the evaluation pipeline.

pub mod document;
pub mod handlers;
pub mod pdf;
pub mod upload;

pub use document::ExtractedDocument;
pub use pdf::extract_document;
