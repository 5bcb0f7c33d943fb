//! PDF text extraction.
//!
//! `pdf_extract` can panic on malformed input instead of returning an error,
//! so every call runs inside `catch_unwind` and a panic surfaces as
//! `AppError::PdfParse`.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::document::ExtractedDocument;

/// Extracts the text of every page, in physical page order.
fn extract_pages(data: &[u8]) -> Result<Vec<String>, AppError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(AppError::PdfParse(e.to_string())),
        Err(_) => Err(AppError::PdfParse(
            "the document is malformed and could not be parsed".to_string(),
        )),
    }
}

/// Concatenates page texts with no separator. Pages without text contribute
/// nothing but do not disturb the order of the others.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.as_ref().len()).sum());
    for page in pages {
        text.push_str(page.as_ref());
    }
    text
}

/// Parses `data` as a PDF and returns its concatenated text.
pub fn extract_document_blocking(data: &[u8]) -> Result<ExtractedDocument, AppError> {
    let pages = extract_pages(data)?;
    for (i, page) in pages.iter().enumerate() {
        debug!("Page {}: {} chars", i + 1, page.chars().count());
    }
    Ok(ExtractedDocument::new(join_pages(&pages), pages.len()))
}

/// Runs extraction on the blocking pool; parsing is CPU-bound.
pub async fn extract_document(data: Bytes) -> Result<ExtractedDocument, AppError> {
    let document = tokio::task::spawn_blocking(move || extract_document_blocking(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    info!(
        "Extracted {} chars from {} page(s)",
        document.text.chars().count(),
        document.page_count
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_pdf;

    #[test]
    fn test_join_pages_has_no_separator() {
        assert_eq!(join_pages(&["John ", "Doe", "\n5 years"]), "John Doe\n5 years");
    }

    #[test]
    fn test_join_pages_skips_empty_pages_in_order() {
        assert_eq!(join_pages(&["first", "", "third", ""]), "firstthird");
    }

    #[test]
    fn test_join_pages_empty_input() {
        assert_eq!(join_pages::<&str>(&[]), "");
    }

    #[test]
    fn test_garbage_bytes_report_parse_error() {
        let result = extract_document_blocking(b"not a pdf at all");
        assert!(matches!(result, Err(AppError::PdfParse(_))));
    }

    #[test]
    fn test_truncated_pdf_reports_parse_error() {
        let mut data = build_pdf(&["Alpha"]);
        data.truncate(data.len() / 3);
        let result = extract_document_blocking(&data);
        assert!(matches!(result, Err(AppError::PdfParse(_))));
    }

    #[test]
    fn test_single_page_text_extracted() {
        let data = build_pdf(&["John Doe Software Engineer"]);
        let doc = extract_document_blocking(&data).unwrap();
        assert_eq!(doc.page_count, 1);
        assert!(doc.text.contains("John Doe Software Engineer"));
        assert!(doc.is_usable());
    }

    #[test]
    fn test_multi_page_order_preserved_across_empty_page() {
        let data = build_pdf(&["PageOneAlpha", "", "PageThreeGamma"]);
        let doc = extract_document_blocking(&data).unwrap();
        assert_eq!(doc.page_count, 3);

        let first = doc.text.find("PageOneAlpha").unwrap();
        let third = doc.text.find("PageThreeGamma").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_document_without_text_layer_is_not_usable() {
        let data = build_pdf(&["", ""]);
        let doc = extract_document_blocking(&data).unwrap();
        assert_eq!(doc.page_count, 2);
        assert!(!doc.is_usable());
    }

    #[tokio::test]
    async fn test_async_extraction_matches_blocking() {
        let data = build_pdf(&["Rust", "Tokio"]);
        let expected = extract_document_blocking(&data).unwrap();
        let doc = extract_document(Bytes::from(data)).await.unwrap();
        assert_eq!(doc, expected);
    }
}
