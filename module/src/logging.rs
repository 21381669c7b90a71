//! Routes `log` records to the host's log file.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::bridge::ffi;

struct HostLog;

static LOGGER: HostLog = HostLog;

impl log::Log for HostLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            ffi::write_log(&format!("{}: {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Install the host log sink at [LevelFilter::Debug]. Call once, typically
/// from the vessel constructor; the `log` macros work from then on.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(LevelFilter::Debug)
}

/// Install the host log sink with an explicit level filter.
pub fn init_with_level(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
