//! Slide-deck markdown dialect engine.
//!
//! This crate implements the markdown extensions used by deck documents:
//!
//! - **Containers**: nestable fenced blocks opened by a marker run
//!   (`::: box.note#intro left:240px`) and closed by a run at least as long,
//!   rendered as `<tag class id style>` wrappers.
//! - **Highlights**: inline `==text==` spans rendered as `<mark>`, paired
//!   with the same delimiter-run machinery as emphasis.
//!
//! # Architecture
//!
//! Extensions plug into a deliberately minimal host: an ordered list of pure
//! block rules (`container`, `fence`, `heading`, `paragraph`) composed by a
//! small dispatcher, and an inline tokenizer with a shared [`DelimiterStack`]
//! resolved in one deterministic pass after the whole span is tokenized.
//! Rule order matters: container parsing precedes code-fence recognition so
//! fence-like text inside a container becomes nested content, and highlight
//! parsing precedes emphasis so `=` runs are consumed before `*` and `_`.
//!
//! Parsing never fails. Rules that do not recognize their syntax decline and
//! the line falls through to the remaining rules; unterminated containers
//! auto-close at the end of the enclosing range.
//!
//! # Example
//!
//! ```
//! use deck_syntax::Parser;
//!
//! let parser = Parser::new();
//! let html = parser.render("::: span.highlight\n==marked== text\n:::");
//! assert!(html.contains(r#"<span class="highlight">"#));
//! assert!(html.contains("<mark>marked</mark>"));
//! ```

mod block;
mod container;
mod html;
mod inline;
mod line;
mod parser;
mod style;
mod token;

pub use container::{ContainerDefinition, parse_container_definition};
pub use html::{escape_html, render};
pub use inline::delimiter::{Delimiter, DelimiterStack};
pub use parser::{Parser, ParserOptions};
pub use style::compile_style_shorthand;
pub use token::{Token, TokenKind};
