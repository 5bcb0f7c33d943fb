//! Evaluator: builds the prompt from an extracted resume, runs the inference
//! call, and hands back the model's report.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::formatter::format_evaluation;
use crate::evaluation::prompts::{
    EVALUATION_PROMPT_TEMPLATE, STRUCTURED_EVALUATION_PROMPT_TEMPLATE,
    STRUCTURED_EVALUATION_SYSTEM,
};
use crate::extraction::ExtractedDocument;
use crate::llm_client::{complete_json, InferenceBackend};

/// Highest suitability score the model may assign.
pub const MAX_SUITABILITY_SCORE: u8 = 10;

/// The model's prose report. Treated as opaque text; no field parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub text: String,
}

impl EvaluationResult {
    pub fn to_html(&self) -> String {
        format_evaluation(&self.text)
    }
}

/// Explicit-field evaluation returned by the structured endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredEvaluation {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub technical_impression: String,
    pub soft_skill_evaluation: String,
    pub suitability_score: u8,
}

/// Embeds the full document text after the fixed instructions.
/// Refuses documents without usable text.
pub fn build_evaluation_prompt(document: &ExtractedDocument) -> Result<String, AppError> {
    fill_template(EVALUATION_PROMPT_TEMPLATE, document)
}

pub fn build_structured_prompt(document: &ExtractedDocument) -> Result<String, AppError> {
    fill_template(STRUCTURED_EVALUATION_PROMPT_TEMPLATE, document)
}

fn fill_template(template: &str, document: &ExtractedDocument) -> Result<String, AppError> {
    if !document.is_usable() {
        return Err(AppError::EmptyExtraction);
    }
    Ok(template.replace("{cv_text}", &document.text))
}

/// Runs the free-text evaluation. One call, no retry.
pub async fn evaluate(
    document: &ExtractedDocument,
    backend: &dyn InferenceBackend,
) -> Result<EvaluationResult, AppError> {
    let prompt = build_evaluation_prompt(document)?;
    let text = backend
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Inference(e.to_string()))?;

    info!("Evaluation received ({} chars)", text.chars().count());
    Ok(EvaluationResult { text })
}

/// Runs the structured evaluation and checks the score range.
pub async fn evaluate_structured(
    document: &ExtractedDocument,
    backend: &dyn InferenceBackend,
) -> Result<StructuredEvaluation, AppError> {
    let prompt = build_structured_prompt(document)?;
    let evaluation: StructuredEvaluation =
        complete_json(backend, &prompt, STRUCTURED_EVALUATION_SYSTEM)
            .await
            .map_err(|e| AppError::Inference(format!("Structured evaluation failed: {e}")))?;

    if evaluation.suitability_score > MAX_SUITABILITY_SCORE {
        return Err(AppError::Inference(format!(
            "suitability_score {} is outside 0..={MAX_SUITABILITY_SCORE}",
            evaluation.suitability_score
        )));
    }

    info!(
        "Structured evaluation received (score {}/{MAX_SUITABILITY_SCORE})",
        evaluation.suitability_score
    );
    Ok(evaluation)
}
