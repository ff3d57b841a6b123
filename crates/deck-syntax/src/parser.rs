//! Top-level parser facade.

use crate::block::{self, BlockState};
use crate::html;
use crate::inline;
use crate::token::{Token, TokenKind};

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Marker character of the container grammar.
    pub container_marker: char,
    /// Tag used when a container selector names no tag.
    pub default_container_tag: String,
    /// Whether `==highlight==` parsing is enabled.
    pub highlight: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            container_marker: ':',
            default_container_tag: "div".to_owned(),
            highlight: true,
        }
    }
}

/// Markdown dialect parser.
///
/// Holds only configuration; every [`parse`](Self::parse) call owns its own
/// token and delimiter state, so one parser value can serve many documents
/// across threads.
#[derive(Debug, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a parser with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    #[must_use]
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parser options in effect.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse source text into a token stream.
    #[must_use]
    pub fn parse(&self, src: &str) -> Vec<Token> {
        let mut state = BlockState::new(src, &self.options);
        let end = state.line_count();
        block::tokenize(&mut state, 0, end);

        let mut tokens = state.tokens;
        for token in &mut tokens {
            if matches!(token.kind, TokenKind::Inline) {
                let children = inline::parse(&token.content, &self.options);
                token.children = children;
            }
        }

        tracing::debug!(tokens = tokens.len(), "parsed document");
        tokens
    }

    /// Parse and render source text to HTML.
    #[must_use]
    pub fn render(&self, src: &str) -> String {
        html::render(&self.parse(src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        let parser = Parser::new();
        assert!(parser.parse("").is_empty());
        assert_eq!(parser.render(""), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        let parser = Parser::new();
        assert!(parser.parse("  \n\t\n").is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let options = ParserOptions {
            container_marker: '+',
            ..ParserOptions::default()
        };
        let html = Parser::with_options(options).render("+++ note\ntext\n+++");
        assert!(html.contains(r#"<div class="note">"#));
    }

    #[test]
    fn test_custom_default_tag() {
        let options = ParserOptions {
            default_container_tag: "section".to_owned(),
            ..ParserOptions::default()
        };
        let html = Parser::with_options(options).render("::: slide\ntext\n:::");
        assert!(html.contains(r#"<section class="slide">"#));
        assert!(html.contains("</section>"));
    }

    #[test]
    fn test_no_state_across_invocations() {
        let parser = Parser::new();
        // An unterminated container must not leak into the next parse.
        let _ = parser.parse("::: note\nunterminated");
        assert_eq!(parser.render("plain"), "<p>plain</p>\n");
    }
}
