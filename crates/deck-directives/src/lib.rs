//! Shorthand directive expansion.
//!
//! Turns compact one-line directive shorthand into the native HTML-comment
//! directive syntax of presentation decks:
//!
//! ```text
//! @@@ lead footer:"links : rechts" paginate:skip
//! ```
//!
//! becomes
//!
//! ```text
//! <!-- _class: lead -->
//! <!-- footer: "links : rechts" -->
//! <!-- paginate: skip -->
//! ```
//!
//! The pipeline is tokenizer ([`tokenize_preserving_quotes`]), classifier
//! ([`parse_directive_line`]) and generator ([`render_comments`]), driven
//! line by line by [`DirectivePreprocessor`], which skips code fences and
//! leaves unparseable lines byte-for-byte unchanged.

mod fence;
mod generator;
mod parser;
mod preprocessor;
mod tokenizer;

pub use generator::render_comments;
pub use parser::{DirectiveLine, parse_directive_line};
pub use preprocessor::DirectivePreprocessor;
pub use tokenizer::tokenize_preserving_quotes;
