//! Tracing output for test runs.

use tracing_subscriber::EnvFilter;

/// Route `tracing` events to the test harness writer.
///
/// Safe to call from every test; only the first call installs a subscriber.
/// Honours `RUST_LOG`, defaulting to `debug` for the UI crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fraudguard_ui=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
