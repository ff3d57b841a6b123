//! Quote-aware tokenizer for shorthand directive text.

/// Split directive text into bare words, standalone colons and quoted spans.
///
/// A quoted span (single or double quotes) is one token, quote characters
/// included, with interior colons and whitespace preserved verbatim. A colon
/// outside quotes flushes any pending word and becomes its own token.
/// An unterminated quote runs to the end of the input.
#[must_use]
pub fn tokenize_preserving_quotes(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' | '\'' => {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
                let mut span = String::from(ch);
                for inner in chars.by_ref() {
                    span.push(inner);
                    if inner == ch {
                        break;
                    }
                }
                tokens.push(span);
            }
            ':' => {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
                tokens.push(":".to_owned());
            }
            ch if ch.is_whitespace() => {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
            }
            ch => word.push(ch),
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_words() {
        assert_eq!(tokenize_preserving_quotes("lead invert"), ["lead", "invert"]);
    }

    #[test]
    fn test_colon_splits_word() {
        assert_eq!(
            tokenize_preserving_quotes("paginate:skip"),
            ["paginate", ":", "skip"]
        );
    }

    #[test]
    fn test_quoted_value_keeps_interior_colon() {
        assert_eq!(
            tokenize_preserving_quotes(r#"footer:"links : rechts""#),
            ["footer", ":", "\"links : rechts\""]
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(
            tokenize_preserving_quotes("title:'a b'"),
            ["title", ":", "'a b'"]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(
            tokenize_preserving_quotes("footer:\"open end"),
            ["footer", ":", "\"open end"]
        );
    }

    #[test]
    fn test_spaced_colon_is_standalone() {
        assert_eq!(tokenize_preserving_quotes("a : b"), ["a", ":", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_preserving_quotes("").is_empty());
        assert!(tokenize_preserving_quotes("   ").is_empty());
    }
}
