//! Prompt templates for resume evaluation.
//! `{cv_text}` is replaced with the extracted document, verbatim and untruncated.

/// Free-text evaluation prompt. The report comes back as prose with section
/// labels that the formatter turns into headings.
pub const EVALUATION_PROMPT_TEMPLATE: &str = "\
You are an expert HR recruiter evaluating a candidate for a software engineering role.
Analyze the following CV text. Provide:
- Key strengths
- Weaknesses
- Technical impression
- Soft skill evaluation
- Overall suitability rating (out of 10)
Format the output professionally in bullet points. Do not use asterisks in the response. \
Give the overall suitability score in bold.

CV:
{cv_text}";

/// System prompt for the structured evaluation. Enforces JSON-only output.
pub const STRUCTURED_EVALUATION_SYSTEM: &str =
    "You are an expert HR recruiter evaluating a candidate for a software engineering role. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Structured evaluation prompt. Same assessment as the free-text prompt,
/// returned as explicit fields so no post-hoc pattern matching is needed.
pub const STRUCTURED_EVALUATION_PROMPT_TEMPLATE: &str = r#"Analyze the following CV text and evaluate the candidate for a software engineering role.

Return a JSON object with this EXACT schema (no extra fields):
{
  "strengths": ["string"],
  "weaknesses": ["string"],
  "technical_impression": "string",
  "soft_skill_evaluation": "string",
  "suitability_score": 7
}

RULES:
1. "strengths" and "weaknesses" hold one short point per entry.
2. "suitability_score" is an integer from 0 to 10.
3. Base every statement on the CV text only.
4. Return ONLY the JSON object — nothing else.

CV:
{cv_text}"#;
