//! Diagnostic logging to stderr.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "buildprep=warn",
        1 => "buildprep=info",
        _ => "buildprep=debug",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity count. Calling this twice
/// keeps the first subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
