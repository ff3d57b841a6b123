//! Line map over the source text.
//!
//! Block rules work in line coordinates; the map precomputes byte offsets,
//! indentation and blankness per line so rules never rescan the source.

/// Per-line information.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineInfo {
    /// Byte offset of the line start.
    pub start: usize,
    /// Byte offset of the line end (excluding the newline).
    pub end: usize,
    /// Byte offset of the first non-whitespace character (== `end` when blank).
    pub first_nonspace: usize,
    /// Indentation width (tab counts as 4).
    pub indent: usize,
    /// Whether the line is empty or whitespace-only.
    pub blank: bool,
}

/// Precomputed line table for one source string.
#[derive(Debug)]
pub(crate) struct LineMap {
    lines: Vec<LineInfo>,
}

impl LineMap {
    pub(crate) fn new(src: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;

        loop {
            match src[start..].find('\n') {
                Some(nl) => {
                    lines.push(Self::scan_line(src, start, start + nl));
                    start += nl + 1;
                    // A trailing newline does not open one more empty line.
                    if start == src.len() {
                        break;
                    }
                }
                None => {
                    lines.push(Self::scan_line(src, start, src.len()));
                    break;
                }
            }
        }

        Self { lines }
    }

    fn scan_line(src: &str, start: usize, end: usize) -> LineInfo {
        let mut indent = 0;
        let mut first_nonspace = end;
        for (offset, ch) in src[start..end].char_indices() {
            match ch {
                ' ' => indent += 1,
                '\t' => indent += 4,
                _ => {
                    first_nonspace = start + offset;
                    break;
                }
            }
        }
        LineInfo {
            start,
            end,
            first_nonspace,
            indent,
            blank: first_nonspace == end,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn get(&self, line: usize) -> &LineInfo {
        &self.lines[line]
    }
}
