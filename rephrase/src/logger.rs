// rephrase/src/logger.rs
//! Logger initialization for the rephrase CLI.
//!
//! `RUST_LOG` is honored when set; the `--quiet`/`--debug` flags override
//! it with an explicit level.

use log::LevelFilter;

/// Initializes the global env_logger instance.
///
/// Passing a level forces it; `None` defers to `RUST_LOG` with an `Info`
/// default. Safe to call more than once: later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(level) = level {
        builder.filter_level(level);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Info);
    }

    // try_init so tests and library consumers that already installed a
    // logger do not panic.
    let _ = builder.format_timestamp(None).try_init();
}
