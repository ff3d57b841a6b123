//! Highlight rule: `==text==` becomes `<mark>text</mark>`.
//!
//! Runs of `=` pair through the shared delimiter machinery with the same
//! flanking rules as emphasis. Each adjacent pair of a run gets its own
//! descriptor, so independent pairs resolve independently and spans nest.

use super::InlineState;
use super::delimiter::{Delimiter, scan_delims};
use crate::token::{Token, TokenKind};

const MARKER: char = '=';

/// Tokenize a `=` run at the current position.
///
/// A run shorter than two characters declines. An odd run emits one leading
/// single-`=` literal; the remaining even run emits one two-character
/// placeholder token per pair, each with a delimiter descriptor when the
/// run may open or close.
pub(crate) fn tokenize(state: &mut InlineState<'_>) -> bool {
    if !state.options.highlight {
        return false;
    }
    let start = state.pos;
    let rest = &state.src[start..];
    if !rest.starts_with(MARKER) {
        return false;
    }
    let run = rest.chars().take_while(|&ch| ch == MARKER).count();
    if run < 2 {
        return false;
    }

    let (can_open, can_close) = scan_delims(state.src, start, run, true);

    let mut remaining = run;
    if run % 2 == 1 {
        state.tokens.push(Token::text("="));
        remaining -= 1;
    }
    while remaining > 0 {
        state.tokens.push(Token::text("=="));
        if can_open || can_close {
            state.delimiters.runs.push(Delimiter {
                marker: MARKER,
                token: state.tokens.len() - 1,
                length: 2,
                open: can_open,
                close: can_close,
                end: None,
            });
        }
        remaining -= 2;
    }

    state.pos = start + run;
    true
}

/// Mutate resolved placeholder tokens into `mark` open/close tags.
///
/// A residual single `=` literal sitting immediately before a just-resolved
/// close tag (the artifact of an odd-length closing run) is relocated to
/// after the contiguous run of close tags so nested rendering order stays
/// correct.
pub(crate) fn resolve(tokens: &mut Vec<Token>, delimiters: &[Delimiter]) {
    let mut stranded: Vec<usize> = Vec::new();

    for delimiter in delimiters {
        if delimiter.marker != MARKER {
            continue;
        }
        let Some(end) = delimiter.end else { continue };
        let close = delimiters[end].token;

        tokens[delimiter.token] = Token::new(TokenKind::MarkOpen).with_markup("==");
        tokens[close] = Token::new(TokenKind::MarkClose).with_markup("==");

        if close > 0
            && matches!(tokens[close - 1].kind, TokenKind::Text)
            && tokens[close - 1].content == "="
        {
            stranded.push(close - 1);
        }
    }

    stranded.sort_unstable();
    stranded.dedup();
    for &index in stranded.iter().rev() {
        let mut after = index + 1;
        while after < tokens.len() && tokens[after].is_inline_close() {
            after += 1;
        }
        let literal = tokens.remove(index);
        tokens.insert(after - 1, literal);
    }
}
