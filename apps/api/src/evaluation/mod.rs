//! Evaluation pipeline: prompt construction, the inference call, and
//! formatting of the model's report for display.

pub mod evaluator;
pub mod formatter;
pub mod handlers;
pub mod prompts;
