//! Response formatting: turns the model's prose report into display HTML.
//!
//! Passes, in order:
//! 1. Wrap known section labels followed by a colon in a heading, title-cased,
//!    and HTML-escape the raw text around and inside them
//! 2. Replace `•` bullets with a pointer glyph
//! 3. Replace hyphen list markers with `•`
//! 4. Replace line breaks with `<br>`
//!
//! Labels are matched on the raw text and escaped after title-casing, so
//! entities such as `&amp;` never pass through `title_case`.
//!
//! Pass 2 must run before pass 3 so freshly inserted bullets are not turned
//! into pointers. Hyphens inside words and numbers ("full-stack", "2019-2023")
//! are left alone; only a hyphen opening a line is a list marker.

use once_cell::sync::Lazy;
use regex::Regex;

pub const POINTER_GLYPH: &str = "👉";
pub const BULLET_GLYPH: &str = "•";

static RE_SECTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(strengths|weaknesses|technical impression|soft skill evaluation|overall suitability rating.*?)\s*:",
    )
    .unwrap()
});

static RE_HYPHEN_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([ \t]*)-([ \t])").unwrap());

/// Formats an evaluation report for HTML display.
pub fn format_evaluation(raw: &str) -> String {
    let s = escape_with_section_headings(raw);
    let s = s.replace(BULLET_GLYPH, POINTER_GLYPH);
    let s = replace_hyphen_markers(&s);
    replace_line_breaks(&s)
}

fn escape_with_section_headings(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    let mut last = 0;
    for caps in RE_SECTION_LABEL.captures_iter(raw) {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&html_escape::encode_text(&raw[last..whole.start()]));
        out.push_str("<h4 class=\"section-heading\">");
        out.push_str(&html_escape::encode_text(&title_case(label.as_str())));
        out.push_str(":</h4>");
        last = whole.end();
    }
    out.push_str(&html_escape::encode_text(&raw[last..]));
    out
}

fn replace_hyphen_markers(input: &str) -> String {
    RE_HYPHEN_MARKER
        .replace_all(input, format!("${{1}}{BULLET_GLYPH}${{2}}").as_str())
        .into_owned()
}

fn replace_line_breaks(input: &str) -> String {
    input.replace("\r\n", "<br>").replace('\n', "<br>")
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// A word starts at any letter not preceded by another letter.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
