//! ATX heading rule.

use super::BlockState;
use crate::token::{Token, TokenKind};

pub(crate) fn rule(
    state: &mut BlockState<'_>,
    start_line: usize,
    _end_line: usize,
    silent: bool,
) -> bool {
    let line = *state.info(start_line);
    if line.blank || line.indent > state.blk_indent + 3 {
        return false;
    }

    let body = state.line_body(start_line);
    let level = body.chars().take_while(|&ch| ch == '#').count();
    if level == 0 || level > 6 {
        return false;
    }
    // The marker run must be followed by whitespace or end the line.
    match body[level..].chars().next() {
        Some(ch) if !ch.is_whitespace() => return false,
        _ => {}
    }
    if silent {
        return true;
    }

    #[allow(clippy::cast_possible_truncation)]
    let level = level as u8;
    let content = body[usize::from(level)..].trim();

    state.tokens.push(
        Token::new(TokenKind::HeadingOpen { level }).with_markup("#".repeat(usize::from(level))),
    );
    state
        .tokens
        .push(Token::new(TokenKind::Inline).with_content(content));
    state
        .tokens
        .push(Token::new(TokenKind::HeadingClose { level }));

    state.line = start_line + 1;
    true
}
