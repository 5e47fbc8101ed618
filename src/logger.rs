// src/logger.rs
// =============================================================================
// Logging setup.
//
// Library code only uses the `log` macros (error!, warn!, debug!...).
// This module wires those macros to stderr with fern, so stdout stays clean
// for the actual output (gist content, tokens) and can be piped.
//
// Verbosity:
//   (none) -> warnings and errors
//   -v     -> info
//   -vv    -> debug
//   -vvv   -> trace
// =============================================================================

use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use humantime::format_rfc3339_seconds;
use log::LevelFilter;
use std::sync::Once;
use std::time::SystemTime;

/// Guards against installing the global logger twice
static INIT_LOGGER_ONCE: Once = Once::new();

// Maps the number of -v flags to a level filter
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Installs the stderr logger
//
// Safe to call more than once, only the first call has an effect.
pub fn initialize(verbose: u8) -> Result<(), log::SetLoggerError> {
    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        let level = level_for_verbosity(verbose);
        let colors = ColoredLevelConfig::new()
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
            .trace(Color::Magenta);

        result = Dispatch::new()
            .level(level)
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} {level} {target}] {message}",
                    date = format_rfc3339_seconds(SystemTime::now()),
                    level = colors.color(record.level()),
                    target = record.target(),
                    message = message,
                ))
            })
            .chain(std::io::stderr())
            .apply();
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_initialize_twice_is_ok() {
        // Other tests may have installed a logger already; either way the
        // second call must not report an error
        let _ = initialize(0);
        assert!(initialize(2).is_ok());
    }
}
