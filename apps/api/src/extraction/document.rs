use serde::Serialize;

/// Number of characters shown in the extracted-text preview.
pub const PREVIEW_CHARS: usize = 2500;

/// Concatenated text of an uploaded PDF, page order preserved.
///
/// Always defined once extraction completes. Empty or whitespace-only text is
/// a valid outcome; callers check `is_usable` before building a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedDocument {
    pub fn new(text: String, page_count: usize) -> Self {
        Self { text, page_count }
    }

    pub fn is_usable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// The first `PREVIEW_CHARS` characters, with `...` appended when the
    /// text is longer.
    pub fn preview(&self) -> String {
        preview(&self.text)
    }
}

pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
