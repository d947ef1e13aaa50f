//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence when set. Otherwise the level is `debug` with
//! `--debug` and `warn` without it. Output goes to stderr so it never mixes
//! with a child's stdout.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::ShellError;

pub fn init(debug: bool) -> Result<(), ShellError> {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
