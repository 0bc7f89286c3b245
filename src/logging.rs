//! Logger setup for the announcer binary.
//!
//! Every diagnostic goes to stderr; stdout stays reserved for the
//! announcement itself.

use flexi_logger::{
    style, DeferredNow, FlexiLoggerError, Logger, TS_DASHES_BLANK_COLONS_DOT_BLANK,
};
use log::Record;

fn format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();

    write!(
        w,
        "[{}] {} {}",
        now.format(TS_DASHES_BLANK_COLONS_DOT_BLANK),
        style(level).paint(format!("{:<5}", level)),
        record.args()
    )
}

/// Installs the stderr logger. `spec` is a log specification such as
/// `"debug"` or `"announcer=trace"`.
pub fn try_init(spec: &str) -> Result<(), FlexiLoggerError> {
    Logger::try_with_str(spec)?
        .format_for_stderr(format)
        .start()?;

    Ok(())
}
