//! Logger setup. Library code logs through the `log` facade; the binary
//! installs `simple_logger` once at startup.

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Where log output may go for a given front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr, so stdout carries only the headless event stream
    Console,
    /// The terminal UI owns the screen; nothing is written.
    Tui,
}

/// Level actually installed for `target`
pub fn effective_level(level: LevelFilter, target: LogTarget) -> LevelFilter {
    match target {
        LogTarget::Console => level,
        LogTarget::Tui => LevelFilter::Off,
    }
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, target: LogTarget) -> Result<(), log::SetLoggerError> {
    SimpleLogger::new()
        .with_level(effective_level(level, target))
        .without_timestamps()
        .init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_silences_logging() {
        assert_eq!(effective_level(LevelFilter::Trace, LogTarget::Tui), LevelFilter::Off);
    }

    #[test]
    fn test_console_keeps_level() {
        assert_eq!(
            effective_level(LevelFilter::Info, LogTarget::Console),
            LevelFilter::Info
        );
    }
}
