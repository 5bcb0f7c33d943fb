//! Axum route handlers for the browser flow.
//!
//! NoFile → FileUploaded → TextExtracted{ok|empty|error} → Analyzing → Result{ok|error}.
//! Every response re-renders the upload form, so any terminal state can be
//! restarted with a new file.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::evaluation::evaluator::evaluate;
use crate::extraction::upload::read_pdf_upload;
use crate::extraction::{extract_document, ExtractedDocument};
use crate::state::AppState;
use crate::ui::notice::Notice;
use crate::ui::templates::{decode_document_text, ExtractedView, IndexPage};

/// Posted by the Analyze button: the extracted text as rendered into the
/// preview page, plus its page count.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub cv_text_b64: String,
    pub page_count: usize,
}

fn render(status: StatusCode, page: IndexPage) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::Template(e).into_response(),
    }
}

fn render_error(state: &AppState, err: AppError) -> Response {
    err.log();
    render(err.status(), IndexPage::new(state.theme, err.notice()))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Response {
    render(
        StatusCode::OK,
        IndexPage::new(state.theme, Notice::info("Please upload a PDF resume to begin.")),
    )
}

/// POST /upload
///
/// Extracts the resume and shows a preview with the Analyze button. Empty and
/// unreadable documents stop here; no prompt is built for them.
pub async fn handle_upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let upload = match read_pdf_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(e) => return render_error(&state, e),
    };

    let document = match extract_document(upload.bytes).await {
        Ok(document) if document.is_usable() => document,
        Ok(_) => return render_error(&state, AppError::EmptyExtraction),
        Err(e) => return render_error(&state, e),
    };

    let mut page = IndexPage::new(state.theme, Notice::success("CV extracted successfully!"));
    page.extracted = Some(ExtractedView::new(upload.file_name, &document));
    render(StatusCode::OK, page)
}

/// POST /analyze
///
/// Runs the evaluation on the text posted back from the preview. A failed
/// inference call is shown once; the formatter only sees successful replies.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let text = match decode_document_text(&form.cv_text_b64) {
        Ok(text) => text,
        Err(e) => return render_error(&state, e),
    };
    let document = ExtractedDocument::new(text, form.page_count);

    match evaluate(&document, state.inference.as_ref()).await {
        Ok(result) => {
            let mut page = IndexPage::new(state.theme, Notice::success("Analysis complete!"));
            page.report_html = Some(result.to_html());
            render(StatusCode::OK, page)
        }
        Err(e) => render_error(&state, e),
    }
}
