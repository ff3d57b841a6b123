//! Code fence tracking for line-by-line preprocessing.

/// Tracks fenced-code state so directive syntax inside code blocks is
/// left untouched.
///
/// Fences open with three or more backticks or tildes; the closer must use
/// the same character, be at least as long, and carry nothing but
/// whitespace after the run.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line; updates state when the line opens or closes a fence.
    pub(crate) fn update(&mut self, line: &str) {
        let trimmed = line.trim_start();
        match self.open {
            Some((marker, min_len)) => {
                let run = trimmed.chars().take_while(|&ch| ch == marker).count();
                if run >= min_len && trimmed[run..].chars().all(char::is_whitespace) {
                    self.open = None;
                }
            }
            None => {
                if let Some(marker) = trimmed.chars().next()
                    && (marker == '`' || marker == '~')
                {
                    let run = trimmed.chars().take_while(|&ch| ch == marker).count();
                    if run >= 3 {
                        self.open = Some((marker, run));
                    }
                }
            }
        }
    }
}
