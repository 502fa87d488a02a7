//! Opt-in diagnostic logging.
//!
//! The merge core only emits `log` records (`debug!` when a block is
//! established, `trace!` per appended entity and per buffer growth). Nothing
//! is printed unless the embedding application installs a logger, either its
//! own or the `env_logger` one set up here.

use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Once;

use log::LevelFilter;

use crate::config::ZebraConfig;
use crate::error::ZebraError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at `level`, writing `[LEVEL] message` lines to
/// stderr or, if `log_file` is given, appending them to that file.
///
/// Only the first call installs anything; later calls are no-ops.
pub fn enable_verbose_logging(level: LevelFilter, log_file: Option<&str>) -> Result<(), ZebraError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

/// Installs logging as described by `config.monitoring`, if present. An
/// unrecognised level name falls back to `info`.
pub fn init_from_config(config: &ZebraConfig) -> Result<(), ZebraError> {
    let Some(monitoring) = &config.monitoring else {
        return Ok(());
    };
    let level = monitoring
        .log_level
        .as_deref()
        .and_then(|name| LevelFilter::from_str(name).ok())
        .unwrap_or(LevelFilter::Info);
    enable_verbose_logging(level, monitoring.log_file.as_deref())
}
