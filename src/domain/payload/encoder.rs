//! Request body rendering for the case graph endpoint
//!
//! Rendering order:
//! 1. strip line breaks from the template source
//! 2. substitute `%s` placeholders left to right
//! 3. escape `\` then `"` in the substituted text, and encode line breaks
//!    that came in through arguments
//! 4. wrap the result as the `query` string of a JSON object
//!
//! Arguments are not sanitized beyond step 3. A value containing `"` still
//! ends the GraphQL string literal it was placed in.

use super::template::{QueryTemplate, PLACEHOLDER};
use super::TemplateError;

/// Render a ready-to-send `{"query": "..."}` body.
pub fn render_payload(template: QueryTemplate, args: &[&str]) -> Result<String, TemplateError> {
    let flat = strip_line_breaks(template.source());
    let query = substitute(&flat, args).map_err(|(expected, given)| {
        TemplateError::ArgumentCount {
            template: template.name(),
            expected,
            given,
        }
    })?;
    Ok(wrap_query(&escape(&query)))
}

fn strip_line_breaks(source: &str) -> String {
    source.replace(['\n', '\r'], "")
}

/// Fill placeholders in order. On a count mismatch returns `(expected, given)`.
fn substitute(source: &str, args: &[&str]) -> Result<String, (usize, usize)> {
    let pieces: Vec<&str> = source.split(PLACEHOLDER).collect();
    let expected = pieces.len() - 1;
    if expected != args.len() {
        return Err((expected, args.len()));
    }

    let capacity = source.len() + args.iter().map(|a| a.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    for (i, piece) in pieces.iter().enumerate() {
        out.push_str(piece);
        if let Some(arg) = args.get(i) {
            out.push_str(arg);
        }
    }
    Ok(out)
}

/// Backslash must be escaped before quote, otherwise the backslashes
/// introduced for quotes would be doubled.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn wrap_query(escaped: &str) -> String {
    format!("{{\"query\": \"{}\"}}", escaped)
}
