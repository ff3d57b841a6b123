//! Comment generation for parsed directive lines.

use std::fmt::Write;

use crate::parser::DirectiveLine;

/// Directive key carrying the class list of a slide.
const CLASS_KEY: &str = "_class";

/// Render a parsed line as native directive comments.
///
/// One comment for the class list when non-empty, then one comment per
/// directive in original order, values verbatim including any preserved
/// quote characters. Lines are newline-joined with no trailing newline.
#[must_use]
pub fn render_comments(line: &DirectiveLine) -> String {
    let mut out = String::new();
    if !line.classes.is_empty() {
        write!(out, "<!-- {CLASS_KEY}: {} -->", line.classes.join(" ")).unwrap();
    }
    for (key, value) in &line.directives {
        if !out.is_empty() {
            out.push('\n');
        }
        write!(out, "<!-- {key}: {value} -->").unwrap();
    }
    out
}
