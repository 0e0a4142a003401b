use std::{io::IsTerminal, sync::Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "salesbook=info";

/// Initializes the global tracing subscriber, writing to stderr so command
/// output on stdout stays clean. `RUST_LOG` overrides the default filter.
/// ANSI styling is only emitted when `color` is set and stderr is a terminal.
pub fn init_tracing(color: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(color && std::io::stderr().is_terminal())
            .try_init();
    });
}
