use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence; `fallback_filter` (typically the configured
/// logging filter) applies when the environment sets nothing.
pub fn init(fallback_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .init();
}

/// Route panics through the log before unwinding continues
///
/// The host runtime swallows stderr, so without this an uncaught panic in
/// feature code disappears without a trace.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        error!(target: "panic", "An uncaught panic was thrown: {}", info);
        default_hook(info);
    }));
}
