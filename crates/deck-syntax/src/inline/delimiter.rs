//! Shared delimiter-run machinery.
//!
//! Every same-character inline delimiter grammar (highlight, emphasis) goes
//! through the same two phases: during tokenization a rule pushes literal
//! placeholder tokens plus one descriptor per candidate delimiter onto the
//! stack; after the whole span is tokenized, one deterministic pairing pass
//! ([`balance_pairs`]) matches openers to closers and each rule's resolve
//! step mutates the placeholder tokens of its own marker in place.

/// One pending delimiter-run descriptor awaiting pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    /// Delimiter character (`=`, `*`, `_`).
    pub marker: char,
    /// Index of the placeholder text token in the inline token list.
    pub token: usize,
    /// Length of the original run (emphasis "rule of three").
    pub length: usize,
    /// Whether this delimiter may open a span.
    pub open: bool,
    /// Whether this delimiter may close a span.
    pub close: bool,
    /// Index of the paired closing delimiter, set by [`balance_pairs`].
    /// Unresolved descriptors keep `None` and stay literal text.
    pub end: Option<usize>,
}

/// Delimiter descriptors of one inline span, owned by a single parse.
///
/// The top-level list covers the span itself; rules that nest inline
/// content register one sublist per nested token. Resolution walks the
/// top-level list and every sublist separately, each in source order.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    /// Top-level delimiter runs in source order.
    pub runs: Vec<Delimiter>,
    /// Per-nested-token sublists: owner token index and its delimiters.
    pub nested: Vec<(usize, Vec<Delimiter>)>,
}

impl DelimiterStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compute open/close eligibility of a delimiter run (flanking rules).
///
/// `can_split_word` relaxes the rules for markers allowed to split words
/// (`*` and `=`); `_` keeps the stricter intraword behavior.
pub(crate) fn scan_delims(
    src: &str,
    start: usize,
    run_len: usize,
    can_split_word: bool,
) -> (bool, bool) {
    let last_char = src[..start].chars().next_back();
    let next_char = src[start + run_len..].chars().next();

    let last_is_ws = last_char.is_none_or(char::is_whitespace);
    let next_is_ws = next_char.is_none_or(char::is_whitespace);
    let last_is_punct = last_char.is_some_and(is_punctuation);
    let next_is_punct = next_char.is_some_and(is_punctuation);

    let left_flanking = !next_is_ws && (!next_is_punct || last_is_ws || last_is_punct);
    let right_flanking = !last_is_ws && (!last_is_punct || next_is_ws || next_is_punct);

    let can_open = left_flanking && (can_split_word || !right_flanking || last_is_punct);
    let can_close = right_flanking && (can_split_word || !left_flanking || next_is_punct);
    (can_open, can_close)
}

fn is_punctuation(ch: char) -> bool {
    !ch.is_whitespace() && !ch.is_alphanumeric()
}

/// Pair openers with closers over one delimiter list.
///
/// For each closer, scan backward for the nearest unconsumed opener with
/// the same marker. The "rule of three" skips matches where a delimiter
/// could both open and close and the combined run length is a multiple of
/// three (unless both runs are). Matched pairs record the partner index;
/// everything else stays unresolved.
pub(crate) fn balance_pairs(delimiters: &mut [Delimiter]) {
    for closer_idx in 0..delimiters.len() {
        if !delimiters[closer_idx].close {
            continue;
        }
        let (marker, closer_open, closer_length) = {
            let closer = &delimiters[closer_idx];
            (closer.marker, closer.open, closer.length)
        };

        let mut opener_idx = closer_idx;
        while opener_idx > 0 {
            opener_idx -= 1;
            let opener = &delimiters[opener_idx];
            if !opener.open || opener.end.is_some() || opener.marker != marker {
                continue;
            }
            let odd_match = (opener.close || closer_open)
                && (opener.length + closer_length) % 3 == 0
                && (opener.length % 3 != 0 || closer_length % 3 != 0);
            if odd_match {
                continue;
            }
            delimiters[opener_idx].end = Some(closer_idx);
            delimiters[opener_idx].close = false;
            delimiters[closer_idx].open = false;
            break;
        }
    }
}
