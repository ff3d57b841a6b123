//! Line-by-line driver expanding shorthand directive lines.

use crate::fence::FenceTracker;
use crate::generator::render_comments;
use crate::parser::parse_directive_line;

/// Preprocessor that expands shorthand directive lines to comment blocks.
///
/// A line starting with three or more marker characters (outside code
/// fences) is parsed as shorthand; on success the whole line is replaced by
/// the generated comments, on failure it is left byte-for-byte unchanged.
/// Generated comments start with `<!--` and never re-match the marker
/// pattern, so running the output through the preprocessor again is a no-op.
///
/// # Example
///
/// ```
/// use deck_directives::DirectivePreprocessor;
///
/// let mut preprocessor = DirectivePreprocessor::new();
/// let output = preprocessor.process("@@@ lead paginate:skip\n# Title\n");
/// assert_eq!(output, "<!-- _class: lead -->\n<!-- paginate: skip -->\n# Title\n");
/// ```
#[derive(Debug)]
pub struct DirectivePreprocessor {
    marker: char,
    fence: FenceTracker,
}

impl DirectivePreprocessor {
    /// Create a preprocessor with the default `@` marker.
    #[must_use]
    pub fn new() -> Self {
        Self::with_marker('@')
    }

    /// Create a preprocessor with a custom marker character.
    #[must_use]
    pub fn with_marker(marker: char) -> Self {
        Self {
            marker,
            fence: FenceTracker::new(),
        }
    }

    /// Process input text and return the expanded output.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        // Each line keeps its own ending, so untouched CRLF lines stay
        // byte-for-byte identical.
        while !rest.is_empty() {
            let (line, ending, remainder) = match rest.find('\n') {
                Some(nl) => {
                    let body = &rest[..nl];
                    match body.strip_suffix('\r') {
                        Some(body) => (body, "\r\n", &rest[nl + 1..]),
                        None => (body, "\n", &rest[nl + 1..]),
                    }
                }
                None => (rest, "", ""),
            };
            output.push_str(&self.process_line(line));
            output.push_str(ending);
            rest = remainder;
        }
        output
    }

    fn process_line(&mut self, line: &str) -> String {
        self.fence.update(line);
        if self.fence.in_fence() {
            return line.to_owned();
        }
        self.expand(line).unwrap_or_else(|| line.to_owned())
    }

    /// Expand one shorthand line, or decline.
    fn expand(&self, line: &str) -> Option<String> {
        let trimmed = line.trim_start();
        let run = trimmed.chars().take_while(|&ch| ch == self.marker).count();
        if run < 3 {
            return None;
        }

        let rest = &trimmed[run * self.marker.len_utf8()..];
        let parsed = parse_directive_line(rest);
        if parsed.is_empty() {
            tracing::trace!(line, "shorthand line produced nothing, left unchanged");
            return None;
        }
        Some(render_comments(&parsed))
    }
}

impl Default for DirectivePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn process(input: &str) -> String {
        DirectivePreprocessor::new().process(input)
    }

    #[test]
    fn test_expands_shorthand_line() {
        assert_eq!(
            process("@@@ lead paginate:skip"),
            "<!-- _class: lead -->\n<!-- paginate: skip -->"
        );
    }

    #[test]
    fn test_short_run_left_unchanged() {
        assert_eq!(process("@@ lead"), "@@ lead");
    }

    #[test]
    fn test_empty_shorthand_left_unchanged() {
        assert_eq!(process("@@@   "), "@@@   ");
    }

    #[test]
    fn test_ordinary_lines_untouched() {
        let input = "# Title\n\nbody text\n";
        assert_eq!(process(input), input);
    }

    #[test]
    fn test_shorthand_inside_fence_untouched() {
        let input = "```\n@@@ lead\n```\n";
        assert_eq!(process(input), input);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let expanded = process("@@@ lead footer:\"a : b\"\ntext\n");
        assert_eq!(process(&expanded), expanded);
    }

    #[test]
    fn test_custom_marker() {
        let mut preprocessor = DirectivePreprocessor::with_marker('%');
        assert_eq!(preprocessor.process("%%% invert"), "<!-- _class: invert -->");
        assert_eq!(preprocessor.process("@@@ invert"), "@@@ invert");
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(process("@@@ lead\n"), "<!-- _class: lead -->\n");
        assert_eq!(process("@@@ lead"), "<!-- _class: lead -->");
    }

    #[test]
    fn test_crlf_lines_left_byte_for_byte() {
        let input = "@@ keep\r\nplain text\r\n";
        assert_eq!(process(input), input);
    }

    #[test]
    fn test_crlf_expansion_keeps_line_ending() {
        assert_eq!(
            process("@@@ lead\r\ntext\r\n"),
            "<!-- _class: lead -->\r\ntext\r\n"
        );
    }
}
