//! Logger setup for the command-line tool

use log::LevelFilter;

/// Initialize the global logger
///
/// Logs at `Info` level, or `Debug` when `debug_enabled` is set. An explicit
/// `RUST_LOG` overrides both. Calling this more than once is harmless; later
/// calls leave the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
