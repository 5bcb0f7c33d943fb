//! Browser-facing flow: upload form, extracted-text preview, evaluation report.

pub mod handlers;
pub mod notice;
pub mod templates;
pub mod theme;
