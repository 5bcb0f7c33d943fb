use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;

/// Name of the multipart field carrying the resume.
pub const FILE_FIELD: &str = "file";

/// A single uploaded resume, already checked to be a PDF by name or type.
#[derive(Debug)]
pub struct PdfUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Accepts the upload when its extension is `.pdf` or its content type is
/// `application/pdf`. Size is not checked here; the router applies the body limit.
pub fn ensure_pdf_upload(file_name: &str, content_type: Option<&str>) -> Result<(), AppError> {
    let has_pdf_extension = file_name.to_ascii_lowercase().ends_with(".pdf");
    let has_pdf_type = content_type
        .map(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);

    if has_pdf_extension || has_pdf_type {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Only PDF files are accepted (got '{file_name}')"
        )))
    }
}

/// Hitting the router's body limit surfaces here as a multipart read error.
fn upload_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", err.body_text()))
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}

/// Reads exactly one `file` field from the form. Other fields are ignored;
/// a second file is rejected.
pub async fn read_pdf_upload(multipart: &mut Multipart) -> Result<PdfUpload, AppError> {
    let mut upload: Option<PdfUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error("Malformed upload", e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if upload.is_some() {
            return Err(AppError::Validation(
                "Upload exactly one PDF file".to_string(),
            ));
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        ensure_pdf_upload(&file_name, field.content_type())?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| upload_error("Failed to read upload", e))?;
        upload = Some(PdfUpload { file_name, bytes });
    }

    let upload = upload.ok_or_else(|| {
        AppError::Validation("Please upload a PDF resume to begin".to_string())
    })?;
    if upload.bytes.is_empty() {
        return Err(AppError::Validation(format!(
            "'{}' is empty",
            upload.file_name
        )));
    }

    info!("Received '{}' ({} bytes)", upload.file_name, upload.bytes.len());
    Ok(upload)
}
