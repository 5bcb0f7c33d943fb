use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::extract_document;
use crate::extraction::upload::read_pdf_upload;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub page_count: usize,
    pub text: String,
    pub preview: String,
}

/// POST /api/v1/extract
///
/// Returns the extracted text without calling the model. Whitespace-only
/// documents are reported as `EMPTY_EXTRACTION`.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let upload = read_pdf_upload(&mut multipart).await?;
    let document = extract_document(upload.bytes).await?;
    if !document.is_usable() {
        return Err(AppError::EmptyExtraction);
    }

    Ok(Json(ExtractResponse {
        file_name: upload.file_name,
        page_count: document.page_count,
        preview: document.preview(),
        text: document.text,
    }))
}
