//! HTML rendering of the token stream.

use std::fmt::Write;

use crate::token::{Token, TokenKind};

/// Render a block-level token stream to HTML.
///
/// Container close tags recover their tag name through the stored index of
/// the matching open token; a dangling index falls back to `div`.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match &token.kind {
            TokenKind::ContainerOpen(definition) => {
                out.push('<');
                out.push_str(&definition.tag);
                // Attribute order is fixed: class, id, style.
                if let Some(class) = &definition.class {
                    write!(out, r#" class="{}""#, escape_html(class)).unwrap();
                }
                if let Some(id) = &definition.id {
                    write!(out, r#" id="{}""#, escape_html(id)).unwrap();
                }
                if let Some(style) = &definition.style {
                    write!(out, r#" style="{}""#, escape_html(style)).unwrap();
                }
                out.push_str(">\n");
            }
            TokenKind::ContainerClose { open } => {
                let tag = match tokens.get(*open).map(|token| &token.kind) {
                    Some(TokenKind::ContainerOpen(definition)) => definition.tag.as_str(),
                    _ => "div",
                };
                writeln!(out, "</{tag}>").unwrap();
            }
            TokenKind::Fence { info } => {
                if info.is_empty() {
                    out.push_str("<pre><code>");
                } else {
                    let language = info.split_whitespace().next().unwrap_or(info);
                    write!(out, r#"<pre><code class="language-{}">"#, escape_html(language))
                        .unwrap();
                }
                out.push_str(&escape_html(&token.content));
                out.push_str("</code></pre>\n");
            }
            TokenKind::HeadingOpen { level } => {
                write!(out, "<h{level}>").unwrap();
            }
            TokenKind::HeadingClose { level } => {
                writeln!(out, "</h{level}>").unwrap();
            }
            TokenKind::ParagraphOpen => out.push_str("<p>"),
            TokenKind::ParagraphClose => out.push_str("</p>\n"),
            TokenKind::Inline => render_inline(&token.children, &mut out),
            _ => render_inline_token(token, &mut out),
        }
    }
    out
}

fn render_inline(tokens: &[Token], out: &mut String) {
    for token in tokens {
        render_inline_token(token, out);
    }
}

fn render_inline_token(token: &Token, out: &mut String) {
    match &token.kind {
        TokenKind::Text => out.push_str(&escape_html(&token.content)),
        TokenKind::MarkOpen => out.push_str("<mark>"),
        TokenKind::MarkClose => out.push_str("</mark>"),
        TokenKind::EmOpen => out.push_str("<em>"),
        TokenKind::EmClose => out.push_str("</em>"),
        TokenKind::StrongOpen => out.push_str("<strong>"),
        TokenKind::StrongClose => out.push_str("</strong>"),
        _ => {}
    }
    render_inline(&token.children, out);
}

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
