//! One-time tracing subscriber for test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_TEST_FILTER: &str = "warn,sqlx=error,sea_orm=error";

/// Install the test subscriber. Safe to call from every test and every
/// `ctor` hook; only the first call has an effect.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then a quiet default.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        // with_test_writer keeps output inside cargo's per-test capture
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
