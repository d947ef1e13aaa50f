#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

/// Extracts one argument from `input`.
///
/// `"` toggles quoting and is dropped from the output. Scanning stops at the
/// first ASCII whitespace character outside quotes; an unterminated quote runs to
/// the end of the input.
pub fn parse_quoted(input: &str) -> String {
    let mut state = ScanState::Unquoted;
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        match (state, ch) {
            (ScanState::Unquoted, '"') => state = ScanState::Quoted,
            (ScanState::Quoted, '"') => state = ScanState::Unquoted,
            (ScanState::Unquoted, c) if is_ascii_space(c) => break,
            (_, c) => out.push(c),
        }
    }

    out
}

// includes vertical tab, which `char::is_ascii_whitespace` leaves out
fn is_ascii_space(c: char) -> bool {
    c == '\x0B' || c.is_ascii_whitespace()
}
