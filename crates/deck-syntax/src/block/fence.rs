//! Fenced code block rule.
//!
//! Backtick or tilde fences, three or more characters. The closing fence
//! must use the same character, be at least as long as the opening run, and
//! carry nothing but whitespace after it. An unterminated fence runs to the
//! end of the available range.

use super::BlockState;
use crate::token::{Token, TokenKind};

pub(crate) fn rule(
    state: &mut BlockState<'_>,
    start_line: usize,
    end_line: usize,
    silent: bool,
) -> bool {
    let line = *state.info(start_line);
    if line.blank || line.indent > state.blk_indent + 3 {
        return false;
    }

    let body = state.line_body(start_line);
    let Some(marker) = body.chars().next() else {
        return false;
    };
    if marker != '`' && marker != '~' {
        return false;
    }
    let run = body.chars().take_while(|&ch| ch == marker).count();
    if run < 3 {
        return false;
    }

    let info = body[run..].trim();
    // An info string with a backtick would be ambiguous with inline code.
    if marker == '`' && info.contains('`') {
        return false;
    }
    if silent {
        return true;
    }

    let mut next_line = start_line;
    let mut have_closer = false;
    loop {
        next_line += 1;
        if next_line >= end_line {
            break;
        }
        let closer = state.line_body(next_line);
        let closer_run = closer.chars().take_while(|&ch| ch == marker).count();
        if closer_run >= run
            && closer[closer_run..].trim().is_empty()
            && state.info(next_line).indent <= state.blk_indent + 3
        {
            have_closer = true;
            break;
        }
    }

    let content = if start_line + 1 < next_line {
        let from = state.info(start_line + 1).start;
        let to = state.info(next_line - 1).end;
        format!("{}\n", &state.src[from..to])
    } else {
        String::new()
    };

    state.tokens.push(
        Token::new(TokenKind::Fence {
            info: info.to_owned(),
        })
        .with_content(content)
        .with_markup(marker.to_string().repeat(run)),
    );
    state.line = next_line + usize::from(have_closer);
    true
}
