//! Paragraph rule — the terminal rule of the block chain.

use super::{BlockState, interrupts_paragraph};
use crate::token::{Token, TokenKind};

pub(crate) fn rule(
    state: &mut BlockState<'_>,
    start_line: usize,
    end_line: usize,
    silent: bool,
) -> bool {
    // Paragraphs never interrupt anything.
    if silent {
        return false;
    }

    let mut next_line = start_line + 1;
    while next_line < end_line && !state.is_blank(next_line) {
        if interrupts_paragraph(state, next_line, end_line) {
            break;
        }
        next_line += 1;
    }

    let content = (start_line..next_line)
        .map(|line| state.line_body(line).trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    state.tokens.push(Token::new(TokenKind::ParagraphOpen));
    state
        .tokens
        .push(Token::new(TokenKind::Inline).with_content(content));
    state.tokens.push(Token::new(TokenKind::ParagraphClose));

    state.line = next_line;
    true
}
