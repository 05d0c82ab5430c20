use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::console;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Records logged while the console is busy are dropped.
            console()
                .write_fmt(format_args!("[{}] - {}\r\n", record.level(), record.args()))
                .ok();
        }
    }

    fn flush(&self) {}
}

/// Routes `log` records to the process-wide console.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

    log::set_logger(&CONSOLE_LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
