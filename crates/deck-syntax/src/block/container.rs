//! Block container rule.
//!
//! Matches marker-delimited nestable fenced regions:
//!
//! ```text
//! ::: span.highlight left:240px
//! nested content
//! :::
//! ```
//!
//! The closing line must repeat the same marker at least as many times as
//! the opening run, sit at an indent not exceeding the enclosing block
//! indent, and carry nothing but whitespace after the run. Deeper nesting is
//! written with longer marker runs per level; the rule itself only compares
//! run lengths and never tracks a depth counter.

use super::{BlockState, tokenize};
use crate::container::parse_container_definition;
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

    let marker = state.options.container_marker;
    let body = state.line_body(start_line);
    let run = marker_run(body, marker);
    if run < 3 {
        return false;
    }

    let params = &body[run * marker.len_utf8()..];
    let Some(definition) =
        parse_container_definition(params, &state.options.default_container_tag)
    else {
        // Declined: the line falls through to ordinary block handling.
        return false;
    };
    if silent {
        return true;
    }

    // Scan forward for a valid closer; running out of range auto-closes.
    let mut next_line = start_line;
    let mut have_closer = false;
    loop {
        next_line += 1;
        if next_line >= end_line {
            break;
        }
        if is_closer(state, next_line, marker, run) {
            have_closer = true;
            break;
        }
    }

    tracing::trace!(tag = %definition.tag, run, have_closer, "container block");

    let markup = marker.to_string().repeat(run);
    state
        .tokens
        .push(Token::new(TokenKind::ContainerOpen(definition)).with_markup(markup.clone()));
    let open = state.tokens.len() - 1;

    // Re-enter the block tokenizer over the enclosed range.
    tokenize(state, start_line + 1, next_line);

    state
        .tokens
        .push(Token::new(TokenKind::ContainerClose { open }).with_markup(markup));

    state.line = next_line + usize::from(have_closer);
    true
}

/// Whether `line` validly closes a container opened with `open_run` markers.
fn is_closer(state: &BlockState<'_>, line: usize, marker: char, open_run: usize) -> bool {
    let info = state.info(line);
    if info.blank || info.indent > state.blk_indent {
        return false;
    }
    let body = state.line_body(line);
    let run = marker_run(body, marker);
    if run < open_run {
        return false;
    }
    body[run * marker.len_utf8()..].trim().is_empty()
}

fn marker_run(body: &str, marker: char) -> usize {
    body.chars().take_while(|&ch| ch == marker).count()
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use crate::token::TokenKind;
    use pretty_assertions::assert_eq;

    fn kinds(src: &str) -> Vec<&'static str> {
        Parser::new()
            .parse(src)
            .iter()
            .map(|token| match token.kind {
                TokenKind::ContainerOpen(_) => "ContainerOpen",
                TokenKind::ContainerClose { .. } => "ContainerClose",
                TokenKind::Fence { .. } => "Fence",
                TokenKind::HeadingOpen { .. } => "HeadingOpen",
                TokenKind::HeadingClose { .. } => "HeadingClose",
                TokenKind::ParagraphOpen => "ParagraphOpen",
                TokenKind::ParagraphClose => "ParagraphClose",
                TokenKind::Inline => "Inline",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn test_open_and_close() {
        let tokens = Parser::new().parse("::: note\ntext\n:::");
        assert!(matches!(tokens[0].kind, TokenKind::ContainerOpen(_)));
        assert!(matches!(
            tokens.last().unwrap().kind,
            TokenKind::ContainerClose { open: 0 }
        ));
    }

    #[test]
    fn test_rejected_params_fall_through() {
        // "left:240px" is style without a class: not a container.
        let tokens = Parser::new().parse("::: left:240px");
        assert!(matches!(tokens[0].kind, TokenKind::ParagraphOpen));
    }

    #[test]
    fn test_two_markers_are_not_a_container() {
        let tokens = Parser::new().parse(":: note");
        assert!(matches!(tokens[0].kind, TokenKind::ParagraphOpen));
    }

    #[test]
    fn test_auto_close_at_end_of_input() {
        let tokens = Parser::new().parse("::: note\nunterminated");
        assert!(matches!(tokens[0].kind, TokenKind::ContainerOpen(_)));
        assert!(matches!(
            tokens.last().unwrap().kind,
            TokenKind::ContainerClose { .. }
        ));
    }

    #[test]
    fn test_longer_run_required_to_close() {
        // A 3-marker line inside a 4-marker container is nested content.
        let tokens = Parser::new().parse(":::: outer\n::: inner\ntext\n::::");
        let opens = tokens
            .iter()
            .filter(|token| matches!(token.kind, TokenKind::ContainerOpen(_)))
            .count();
        assert_eq!(opens, 2);
        // The inner container was auto-closed by the outer range.
        let closes = tokens
            .iter()
            .filter(|token| matches!(token.kind, TokenKind::ContainerClose { .. }))
            .count();
        assert_eq!(closes, 2);
    }

    #[test]
    fn test_closer_with_trailing_text_is_content() {
        let tokens = Parser::new().parse("::: note\n::: tail\n:::");
        // "::: tail" parses as a nested container open, not a closer.
        let opens = tokens
            .iter()
            .filter(|token| matches!(token.kind, TokenKind::ContainerOpen(_)))
            .count();
        assert_eq!(opens, 2);
    }

    #[test]
    fn test_nested_containers() {
        let src = ":::: box\n::: note\ninner\n:::\n::::";
        let tokens = Parser::new().parse(src);
        let sequence = kinds(src);
        assert_eq!(
            sequence,
            [
                "ContainerOpen",
                "ContainerOpen",
                "ParagraphOpen",
                "Inline",
                "ParagraphClose",
                "ContainerClose",
                "ContainerClose"
            ]
        );
        // Close tokens point at their matching opens.
        let TokenKind::ContainerClose { open } = tokens[5].kind else {
            panic!("expected close");
        };
        assert_eq!(open, 1);
        let TokenKind::ContainerClose { open } = tokens[6].kind else {
            panic!("expected close");
        };
        assert_eq!(open, 0);
    }

    #[test]
    fn test_container_precedes_fence() {
        // Fence-like text inside a container is nested content.
        let src = "::: note\n```rust\nfn x() {}\n```\n:::";
        let tokens = Parser::new().parse(src);
        assert!(matches!(tokens[0].kind, TokenKind::ContainerOpen(_)));
        assert!(
            tokens
                .iter()
                .any(|token| matches!(token.kind, TokenKind::Fence { .. }))
        );
    }

    #[test]
    fn test_interrupts_paragraph() {
        let sequence = kinds("text\n::: note\nbody\n:::");
        assert_eq!(
            sequence,
            [
                "ParagraphOpen",
                "Inline",
                "ParagraphClose",
                "ContainerOpen",
                "ParagraphOpen",
                "Inline",
                "ParagraphClose",
                "ContainerClose"
            ]
        );
    }
}
