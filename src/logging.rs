//! Logger setup.

use crate::error::AppError;

/// Installs a stderr logger printing `[time LEVEL target] message` lines.
pub fn init(level: log::LevelFilter) -> Result<(), AppError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
