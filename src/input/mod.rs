mod completer;
mod quoted;
mod tokenizer;

pub use completer::ShellCompleter;
pub use quoted::parse_quoted;
pub use tokenizer::{tokenize, CommandLine, MAX_ARGS};
