//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::evaluation::evaluator::{evaluate, evaluate_structured, StructuredEvaluation};
use crate::extraction::upload::read_pdf_upload;
use crate::extraction::{extract_document, ExtractedDocument};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub file_name: String,
    pub page_count: usize,
    pub evaluation: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct StructuredEvaluationResponse {
    pub file_name: String,
    pub page_count: usize,
    pub evaluation: StructuredEvaluation,
}

async fn extract_upload(multipart: &mut Multipart) -> Result<(String, ExtractedDocument), AppError> {
    let upload = read_pdf_upload(multipart).await?;
    let document = extract_document(upload.bytes).await?;
    Ok((upload.file_name, document))
}

/// POST /api/v1/evaluations
///
/// Full pipeline in one request: extract → prompt → inference → format.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluationResponse>, AppError> {
    let (file_name, document) = extract_upload(&mut multipart).await?;
    let result = evaluate(&document, state.inference.as_ref()).await?;

    Ok(Json(EvaluationResponse {
        file_name,
        page_count: document.page_count,
        html: result.to_html(),
        evaluation: result.text,
    }))
}

/// POST /api/v1/evaluations/structured
///
/// Same pipeline, but the model answers with explicit fields instead of prose.
pub async fn handle_evaluate_structured(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StructuredEvaluationResponse>, AppError> {
    let (file_name, document) = extract_upload(&mut multipart).await?;
    let evaluation = evaluate_structured(&document, state.inference.as_ref()).await?;

    Ok(Json(StructuredEvaluationResponse {
        file_name,
        page_count: document.page_count,
        evaluation,
    }))
}
