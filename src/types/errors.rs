use config::ConfigError;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum RollingAverageError {
    #[error("Window size must be a positive integer, got {0}")]
    InvalidWindow(usize),
    #[error("Failed to load settings: {0}")]
    Settings(#[from] ConfigError),
    #[error("Invalid logger level directive: {0}")]
    InvalidLogFilter(#[from] ParseError),
    #[error("Logger is already initialized: {0}")]
    LoggerInit(#[from] TryInitError),
}

pub type Result<T, E = RollingAverageError> = std::result::Result<T, E>;
