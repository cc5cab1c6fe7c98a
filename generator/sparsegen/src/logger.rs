//! sparsegen logging utilities.
use log::{Level, Log, Metadata, Record};
use sparsegen_reporting::highlight::{highlight, Colour, Modifier};

/// A terminal logger with colourised level prefixes, installed once at
/// startup; verbosity is controlled through the global max level.
pub struct GeneratorLogger;

impl GeneratorLogger {
    /// The highlighted prefix for a log level.
    fn prefix(level: Level) -> String {
        let colour = match level {
            Level::Error => Colour::Red,
            Level::Warn => Colour::Yellow,
            Level::Trace => Colour::Magenta,
            Level::Info | Level::Debug => Colour::Blue,
        };

        highlight(colour | Modifier::Bold, level.as_str().to_lowercase())
    }
}

impl Log for GeneratorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", Self::prefix(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}
