//! Classifier turning a token stream into classes and key/value directives.

use crate::tokenizer::tokenize_preserving_quotes;

/// Parsed content of one shorthand directive line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveLine {
    /// Class names in source order.
    pub classes: Vec<String>,
    /// Key/value directives in source order.
    pub directives: Vec<(String, String)>,
}

impl DirectiveLine {
    /// Whether the line produced neither classes nor directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.directives.is_empty()
    }
}

/// Parse shorthand directive text.
///
/// Classification is positional with one-token lookahead: every token before
/// the first token immediately followed by a colon token is a class. That
/// first key switches permanently into directive mode, where tokens group
/// into key, colon, value-tokens triples; value tokens accumulate until the
/// next key or the end of input and rejoin with single spaces. A key with no
/// value is dropped silently.
///
/// The lookahead is deliberately naive: a bare word that happens to precede
/// a distant colon is classified as a key, not a class. Empty or
/// whitespace-only input yields the empty result.
#[must_use]
pub fn parse_directive_line(input: &str) -> DirectiveLine {
    let tokens = tokenize_preserving_quotes(input);
    let mut line = DirectiveLine::default();
    let mut i = 0;

    // Class phase: up to the first token followed by a colon.
    while i < tokens.len() {
        if followed_by_colon(&tokens, i) {
            break;
        }
        line.classes.push(tokens[i].clone());
        i += 1;
    }

    // Directive phase: (key, ':', value tokens...) triples.
    while i < tokens.len() {
        let key = tokens[i].clone();
        if tokens.get(i + 1).map(String::as_str) != Some(":") {
            // Trailing key without a colon is dropped.
            break;
        }
        i += 2;

        let mut values: Vec<&str> = Vec::new();
        while i < tokens.len() && !followed_by_colon(&tokens, i) {
            values.push(&tokens[i]);
            i += 1;
        }
        if values.is_empty() {
            tracing::trace!(key, "directive without value dropped");
        } else {
            line.directives.push((key, values.join(" ")));
        }
    }

    line
}

fn followed_by_colon(tokens: &[String], i: usize) -> bool {
    tokens.get(i + 1).map(String::as_str) == Some(":")
}
