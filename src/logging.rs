//! Diagnostics go to stderr, and only when stderr is not the terminal the
//! dashboard is drawn on (e.g. `freqbar 2>freqbar.log`).

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Calling it again is a no-op.
pub fn init() {
    let stderr = io::stderr();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(stderr.is_terminal()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Everything is filtered out while stderr shares the screen with the frame;
/// otherwise `RUST_LOG` applies, falling back to `DEFAULT_FILTER`.
fn filter_for(stderr_is_terminal: bool) -> EnvFilter {
    if stderr_is_terminal {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
