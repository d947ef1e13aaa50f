use std::ops::Range;

/// Size of the argument vector, including the slot reserved for its end marker.
pub const MAX_ARGS: usize = 64;

/// A tokenized input line.
///
/// Tokens are stored as byte spans into the raw line so builtins can recover
/// the untouched remainder of the line (quoted prompt text keeps its spaces).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: String,
    spans: Vec<Range<usize>>,
}

impl CommandLine {
    pub fn parse(line: &str) -> Self {
        let mut spans = Vec::new();
        let mut start = None;

        for (idx, ch) in line.char_indices() {
            if ch == ' ' {
                if let Some(s) = start.take() {
                    spans.push(s..idx);
                    if spans.len() == MAX_ARGS - 1 {
                        break;
                    }
                }
            } else if start.is_none() {
                start = Some(idx);
            }
        }

        if let Some(s) = start {
            if spans.len() < MAX_ARGS - 1 {
                spans.push(s..line.len());
            }
        }

        CommandLine {
            raw: line.to_string(),
            spans,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn name(&self) -> Option<&str> {
        self.arg(0)
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.raw[span.clone()])
    }

    pub fn args(&self) -> Vec<&str> {
        self.spans.iter().map(|span| &self.raw[span.clone()]).collect()
    }

    /// Raw text of the line from the start of token `index` to the end of the line.
    pub fn rest_from(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.raw[span.start..])
    }
}

/// Splits `line` on runs of spaces.
pub fn tokenize(line: &str) -> Vec<String> {
    CommandLine::parse(line)
        .args()
        .into_iter()
        .map(String::from)
        .collect()
}
