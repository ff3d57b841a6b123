//! Inline tokenizer.
//!
//! Two-phase: rules tokenize the span left to right, pushing literal
//! placeholder tokens and delimiter descriptors; once the whole span is
//! tokenized a single resolve pass pairs delimiters and mutates the
//! placeholders into open/close tags. Highlight (`=`) runs before emphasis
//! (`*`, `_`) so equals runs are consumed first; the text rule is terminal.

pub(crate) mod delimiter;
pub(crate) mod emphasis;
pub(crate) mod mark;

use crate::parser::ParserOptions;
use crate::token::{Token, TokenKind};
use delimiter::{DelimiterStack, balance_pairs};

/// One inline rule: consume at the current position or decline.
pub(crate) type InlineRule = fn(&mut InlineState<'_>) -> bool;

/// Rule chain in dispatch order.
pub(crate) const RULES: &[(&str, InlineRule)] =
    &[("mark", mark::tokenize), ("emphasis", emphasis::tokenize)];

/// Characters that start a non-text rule.
const SPECIAL: &[char] = &['=', '*', '_'];

/// Shared state of one inline tokenization.
pub(crate) struct InlineState<'a> {
    pub src: &'a str,
    pub options: &'a ParserOptions,
    pub pos: usize,
    pub tokens: Vec<Token>,
    pub delimiters: DelimiterStack,
}

/// Parse one inline span into tokens.
pub(crate) fn parse(src: &str, options: &ParserOptions) -> Vec<Token> {
    let mut state = InlineState {
        src,
        options,
        pos: 0,
        tokens: Vec::new(),
        delimiters: DelimiterStack::new(),
    };

    while state.pos < state.src.len() {
        let matched = RULES.iter().any(|(_, rule)| rule(&mut state));
        if !matched {
            text(&mut state);
        }
    }

    resolve(&mut state);
    collapse_text(state.tokens)
}

/// Terminal text rule: consume the current character and everything up to
/// the next special character.
fn text(state: &mut InlineState<'_>) {
    let rest = &state.src[state.pos..];
    let first = rest.chars().next().map_or(0, char::len_utf8);
    let end = rest[first..].find(SPECIAL).map_or(rest.len(), |at| at + first);
    state.tokens.push(Token::text(&rest[..end]));
    state.pos += end;
}

/// Resolve all delimiters in one deterministic pass, in original token
/// order: the generic pairing first, then each rule's resolve step, over
/// the top-level list and over every nested token's own sublist.
fn resolve(state: &mut InlineState<'_>) {
    balance_pairs(&mut state.delimiters.runs);
    for (_, sublist) in &mut state.delimiters.nested {
        balance_pairs(sublist);
    }

    mark::resolve(&mut state.tokens, &state.delimiters.runs);
    for (owner, sublist) in &state.delimiters.nested {
        mark::resolve(&mut state.tokens[*owner].children, sublist);
    }

    emphasis::resolve(&mut state.tokens, &state.delimiters.runs);
    for (owner, sublist) in &state.delimiters.nested {
        emphasis::resolve(&mut state.tokens[*owner].children, sublist);
    }
}

/// Merge adjacent text tokens and drop emptied ones.
fn collapse_text(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if matches!(token.kind, TokenKind::Text) {
            if token.content.is_empty() {
                continue;
            }
            if let Some(last) = out.last_mut()
                && matches!(last.kind, TokenKind::Text)
            {
                last.content.push_str(&token.content);
                continue;
            }
        }
        out.push(token);
    }
    out
}
