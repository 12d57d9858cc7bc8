use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::SetLoggerError;

/// Install the `env_logger` backend, `info` unless `RUST_LOG` says otherwise
///
/// Log lines go through the returned [MultiProgress] so they do not tear
/// progress bars drawn on it.
pub fn init_logging() -> Result<MultiProgress, SetLoggerError> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    let logger = env_logger::Builder::from_env(env).build();
    let level = logger.filter();

    let multi_progress = MultiProgress::new();
    LogWrapper::new(multi_progress.clone(), logger).try_init()?;
    log::set_max_level(level);

    Ok(multi_progress)
}
