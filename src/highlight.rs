use inksac::prelude::*;

const BUILTINS: [&str; 3] = ["cd", "exit", "prompt"];
const PROMPT_SUBCOMMANDS: [&str; 4] = ["save", "load", "delete", "list"];

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors builtin names and `prompt` subcommands, leaving spacing intact.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut word_index = 0;
        let mut first_word = "";

        for (i, piece) in input.split(' ').enumerate() {
            if i > 0 {
                out.push(' ');
            }
            if piece.is_empty() {
                continue;
            }

            let styled = match word_index {
                0 if BUILTINS.contains(&piece) => {
                    let style = Style::builder().foreground(Color::Cyan).bold().build();
                    Some(piece.style(style).to_string())
                }
                1 if first_word == "prompt" && PROMPT_SUBCOMMANDS.contains(&piece) => {
                    let style = Style::builder().foreground(Color::Yellow).build();
                    Some(piece.style(style).to_string())
                }
                _ => None,
            };
            if word_index == 0 {
                first_word = piece;
            }
            out.push_str(styled.as_deref().unwrap_or(piece));
            word_index += 1;
        }

        out
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        error.style(error_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passes_text_through() {
        let highlighter = SyntaxHighlighter {
            color_support: ColorSupport::NoColor,
        };

        assert_eq!(highlighter.highlight_command("prompt  save x"), "prompt  save x");
        assert_eq!(highlighter.highlight_error("oops"), "oops");
    }
}
