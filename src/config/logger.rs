use crate::config::settings::LoggerConfig;
use crate::types::errors::Result;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber: an `EnvFilter` from the configured level and a fmt layer on stderr.
/// Fails if the level is not a valid filter directive or a subscriber is already set.
pub fn init_logging(config: &LoggerConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)?;
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(config.ansi)
        .with_thread_ids(true)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::RollingAverageError;

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggerConfig {
            level: "rolling_average=loudest".to_string(),
            ansi: false,
        };
        let result = init_logging(&config);
        assert!(matches!(result, Err(RollingAverageError::InvalidLogFilter(_))));
    }
}
