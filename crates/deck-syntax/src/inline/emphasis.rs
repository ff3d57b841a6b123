//! Emphasis rule: `*em*`, `**strong**`, `_em_`, `__strong__`.
//!
//! The host rule the highlight grammar shares its pairing machinery with.
//! One placeholder token and one descriptor per character of the run; the
//! resolve step collapses adjacent resolved pairs into `<strong>`.

use super::InlineState;
use super::delimiter::{Delimiter, scan_delims};
use crate::token::{Token, TokenKind};

pub(crate) fn tokenize(state: &mut InlineState<'_>) -> bool {
    let start = state.pos;
    let rest = &state.src[start..];
    let Some(marker) = rest.chars().next() else {
        return false;
    };
    if marker != '*' && marker != '_' {
        return false;
    }
    let run = rest.chars().take_while(|&ch| ch == marker).count();
    let (can_open, can_close) = scan_delims(state.src, start, run, marker == '*');

    for _ in 0..run {
        state.tokens.push(Token::text(marker.to_string()));
        state.delimiters.runs.push(Delimiter {
            marker,
            token: state.tokens.len() - 1,
            length: run,
            open: can_open,
            close: can_close,
            end: None,
        });
    }

    state.pos = start + run;
    true
}

/// Mutate resolved placeholders into em/strong open and close tags.
///
/// Walks the list right to left; two adjacent resolved pairs whose tokens
/// are also adjacent on both sides merge into one `<strong>` span, emptying
/// the inner placeholders.
pub(crate) fn resolve(tokens: &mut [Token], delimiters: &[Delimiter]) {
    let mut i = delimiters.len();
    while i > 0 {
        i -= 1;
        let opener = &delimiters[i];
        if opener.marker != '*' && opener.marker != '_' {
            continue;
        }
        let Some(end) = opener.end else { continue };
        let closer = &delimiters[end];

        let is_strong = i > 0
            && end + 1 < delimiters.len()
            && delimiters[i - 1].end == Some(end + 1)
            && delimiters[i - 1].marker == opener.marker
            && delimiters[i - 1].token + 1 == opener.token
            && delimiters[end + 1].token == closer.token + 1;

        if is_strong {
            let markup: String = opener.marker.to_string().repeat(2);
            tokens[delimiters[i - 1].token] =
                Token::new(TokenKind::StrongOpen).with_markup(markup.clone());
            tokens[opener.token] = Token::text("");
            tokens[closer.token] = Token::text("");
            tokens[delimiters[end + 1].token] =
                Token::new(TokenKind::StrongClose).with_markup(markup);
            // Skip the outer delimiter consumed by the strong pair.
            i -= 1;
        } else {
            let markup = opener.marker.to_string();
            tokens[opener.token] = Token::new(TokenKind::EmOpen).with_markup(markup.clone());
            tokens[closer.token] = Token::new(TokenKind::EmClose).with_markup(markup);
        }
    }
}
