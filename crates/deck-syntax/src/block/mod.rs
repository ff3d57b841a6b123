//! Block-level tokenizer.
//!
//! Block grammar is an explicit ordered list of pure rules
//! `fn(&mut BlockState, start_line, end_line, silent) -> bool` composed by a
//! small dispatcher. A rule that does not recognize its syntax returns
//! `false` and the line falls through to the next rule; `paragraph` is the
//! terminal rule and always matches. In silent mode a rule only reports
//! whether it would match, without consuming anything — that is how
//! paragraph continuation probes for interrupting blocks.
//!
//! Order is part of the grammar: `container` precedes `fence` so fence-like
//! text inside a container is captured as nested content rather than as a
//! competing fence.

pub(crate) mod container;
pub(crate) mod fence;
pub(crate) mod heading;
pub(crate) mod paragraph;

use crate::line::{LineInfo, LineMap};
use crate::parser::ParserOptions;
use crate::token::Token;

/// One block rule of the ordered chain.
pub(crate) type BlockRule = fn(&mut BlockState<'_>, usize, usize, bool) -> bool;

/// Rule chain in dispatch order.
pub(crate) const RULES: &[(&str, BlockRule)] = &[
    ("container", container::rule),
    ("fence", fence::rule),
    ("heading", heading::rule),
    ("paragraph", paragraph::rule),
];

/// Shared state of one block tokenization.
///
/// Owned by a single parse invocation; nested containers re-enter
/// [`tokenize`] recursively over a narrowed line range with the same state.
pub(crate) struct BlockState<'a> {
    pub src: &'a str,
    pub options: &'a ParserOptions,
    pub lines: LineMap,
    pub tokens: Vec<Token>,
    /// Current line cursor, advanced by matching rules.
    pub line: usize,
    /// Required indent of the enclosing block.
    pub blk_indent: usize,
}

impl<'a> BlockState<'a> {
    pub(crate) fn new(src: &'a str, options: &'a ParserOptions) -> Self {
        Self {
            src,
            options,
            lines: LineMap::new(src),
            tokens: Vec::new(),
            line: 0,
            blk_indent: 0,
        }
    }

    pub(crate) fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn info(&self, line: usize) -> &LineInfo {
        self.lines.get(line)
    }

    pub(crate) fn is_blank(&self, line: usize) -> bool {
        self.lines.get(line).blank
    }

    /// Line text from the first non-whitespace character to the line end.
    pub(crate) fn line_body(&self, line: usize) -> &'a str {
        let info = self.lines.get(line);
        &self.src[info.first_nonspace..info.end]
    }
}

/// Run the rule chain over a line range, pushing tokens onto the state.
pub(crate) fn tokenize(state: &mut BlockState<'_>, start_line: usize, end_line: usize) {
    state.line = start_line;
    while state.line < end_line {
        if state.is_blank(state.line) {
            state.line += 1;
            continue;
        }
        let line = state.line;
        for (_, rule) in RULES {
            if rule(state, line, end_line, false) {
                break;
            }
        }
        // The paragraph rule is terminal, so the cursor always advanced.
        debug_assert!(state.line > line, "block rule chain did not consume a line");
    }
}

/// Whether any non-paragraph rule would claim this line (silent probe).
pub(crate) fn interrupts_paragraph(
    state: &mut BlockState<'_>,
    line: usize,
    end_line: usize,
) -> bool {
    RULES
        .iter()
        .filter(|(name, _)| *name != "paragraph")
        .any(|(_, rule)| rule(state, line, end_line, true))
}
