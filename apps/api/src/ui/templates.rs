use askama::Template;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::errors::AppError;
use crate::extraction::ExtractedDocument;
use crate::ui::notice::Notice;
use crate::ui::theme::Theme;

/// Extracted resume as shown between upload and analysis.
pub struct ExtractedView {
    pub file_name: String,
    pub page_count: usize,
    pub preview: String,
    /// Full text, base64url-encoded so the browser posts it back byte for
    /// byte. A textarea would drop the leading newline and rewrite line breaks.
    pub encoded_text: String,
}

impl ExtractedView {
    pub fn new(file_name: String, document: &ExtractedDocument) -> Self {
        Self {
            file_name,
            page_count: document.page_count,
            preview: document.preview(),
            encoded_text: encode_document_text(&document.text),
        }
    }
}

pub fn encode_document_text(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Reverses `encode_document_text` for the text posted to `/analyze`.
pub fn decode_document_text(encoded: &str) -> Result<String, AppError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded.trim())
        .map_err(|e| AppError::Validation(format!("Malformed document text: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| AppError::Validation("Document text is not valid UTF-8".to_string()))
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub theme_class: &'static str,
    pub model: &'static str,
    pub notice: Option<Notice>,
    pub extracted: Option<ExtractedView>,
    /// Formatted report HTML; already escaped by the formatter.
    pub report_html: Option<String>,
}

impl IndexPage {
    pub fn new(theme: Theme, notice: Notice) -> Self {
        Self {
            theme_class: theme.css_class(),
            model: crate::llm_client::MODEL,
            notice: Some(notice),
            extracted: None,
            report_html: None,
        }
    }
}
