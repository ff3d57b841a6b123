//! Token stream produced by the block and inline tokenizers.

use crate::container::ContainerDefinition;

/// Kind of a parsed token.
///
/// Block tokens form a flat stream; paired kinds carry open/close variants.
/// A [`TokenKind::ContainerClose`] stores the index of its opening token at
/// construction time, so the renderer recovers the tag with one lookup
/// instead of a backward sibling scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Container opening, carrying the parsed definition.
    ContainerOpen(ContainerDefinition),
    /// Container closing; `open` is the stream index of the opening token.
    ContainerClose {
        /// Index of the matching [`TokenKind::ContainerOpen`].
        open: usize,
    },
    /// Fenced code block with its info string.
    Fence {
        /// Text after the opening fence run (language hint).
        info: String,
    },
    /// Heading opening (`level` in 1..=6).
    HeadingOpen {
        /// Heading level.
        level: u8,
    },
    /// Heading closing.
    HeadingClose {
        /// Heading level.
        level: u8,
    },
    /// Paragraph opening.
    ParagraphOpen,
    /// Paragraph closing.
    ParagraphClose,
    /// Inline span; `content` holds the raw text, `children` the parsed
    /// inline tokens.
    Inline,
    /// Literal text.
    Text,
    /// `<mark>` opening.
    MarkOpen,
    /// `</mark>` closing.
    MarkClose,
    /// `<em>` opening.
    EmOpen,
    /// `</em>` closing.
    EmClose,
    /// `<strong>` opening.
    StrongOpen,
    /// `</strong>` closing.
    StrongClose,
}

/// One token of the parsed stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Literal or enclosed source text.
    pub content: String,
    /// Delimiter text that produced this token (marker run, fence run).
    pub markup: String,
    /// Parsed inline children (only for [`TokenKind::Inline`]).
    pub children: Vec<Token>,
}

impl Token {
    /// Create a token with empty content and markup.
    #[must_use]
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            content: String::new(),
            markup: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a literal text token.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Text,
            content: content.into(),
            markup: String::new(),
            children: Vec::new(),
        }
    }

    /// Set the markup text.
    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = markup.into();
        self
    }

    /// Set the content text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Whether this token closes an inline span.
    #[must_use]
    pub fn is_inline_close(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::MarkClose | TokenKind::EmClose | TokenKind::StrongClose
        )
    }
}
