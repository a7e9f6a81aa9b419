//! Rolling (moving) averages over ordered numeric sequences.
//!
//! Each output position averages the most recent `window` values up to and including it.
//! Averages can be weighted per recency slot and can be restricted to positions
//! that have a full window of history behind them.
//!
//! ```
//! use rolling_average::RollingAverageExt;
//!
//! # fn main() -> rolling_average::Result<()> {
//! let averages = [1, 2, 3, 4, 5, 6].rolling_average(Some(3), true, None)?;
//! assert_eq!(averages, vec![2.0, 3.0, 4.0, 5.0]);
//! # Ok(())
//! # }
//! ```

pub mod aggregators;
pub mod config;
pub mod types;
pub mod utils;

pub use crate::aggregators::rolling_average::{rolling_average, RollingAverage};
pub use crate::aggregators::slice_ext::RollingAverageExt;
pub use crate::aggregators::weights::Weights;
pub use crate::config::logger::init_logging;
pub use crate::config::settings::{LoggerConfig, Settings};
pub use crate::types::errors::{Result, RollingAverageError};
pub use crate::utils::rolling_window::RollingWindow;
