//! Logging configuration
//!
//! The library logs through the `log` facade; binaries and tests pick a
//! backend with one of the functions below, backed by `env_logger`.
//!
//! # Log Levels
//!
//! - `info!` - one line per lowered file
//! - `debug!` - one line per class, receiver and skipped construct
//! - `trace!` - one line per inserted embedding
//!
//! Set `RUST_LOG` to control logging at runtime:
//!
//! ```bash
//! RUST_LOG=debug gopp lower hello.json
//! RUST_LOG=gopp_syntax::lower=trace gopp lower hello.json
//! ```

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging with the default level (Warn).
///
/// This only initializes once; subsequent calls are no-ops.
pub fn init() {
    init_with_level(LevelFilter::Warn);
}

/// Initialize logging with a specific level.
///
/// This only initializes once; subsequent calls are no-ops.
pub fn init_with_level(level: LevelFilter) {
    INIT.call_once(|| {
        Builder::new()
            .filter_level(level)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{:5}] {} - {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .init();
    });
}

/// Initialize logging from the RUST_LOG environment variable, falling back
/// to `default` when it is not set.
pub fn init_from_env(default: LevelFilter) {
    INIT.call_once(|| {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default.as_str()),
        )
        .init();
    });
}

/// Initialize logging for tests.
///
/// Output is captured by the test harness; safe to call from every test.
pub fn init_test() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .is_test(true)
        .try_init();
}
