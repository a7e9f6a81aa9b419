use crate::aggregators::weights::Weights;
use crate::types::errors::{Result, RollingAverageError};
use crate::utils::rolling_window::RollingWindow;
use num_traits::AsPrimitive;
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Rolling average over an ordered sequence.
///
/// - `window`: how many of the most recent values each average looks back over, `None` means the full history
/// - `enforce_lookback`: only emit averages for positions that have a full window behind them
/// - `weights`: multipliers per recency slot, the first one applies to the most recent value of each window.
///   Slots without a weight count the raw value. The sum is always divided by the number of values in the window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingAverage {
    pub window: Option<usize>,
    pub enforce_lookback: bool,
    pub weights: Option<Vec<f64>>,
}

impl RollingAverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_enforce_lookback(mut self, enforce_lookback: bool) -> Self {
        self.enforce_lookback = enforce_lookback;
        self
    }

    pub fn with_weights<W: AsPrimitive<f64>>(mut self, weights: &[W]) -> Self {
        self.weights = Some(weights.iter().map(|weight| weight.as_()).collect());
        self
    }

    pub fn validate(&self) -> Result<()> {
        match self.window {
            Some(0) => Err(RollingAverageError::InvalidWindow(0)),
            _ => Ok(()),
        }
    }

    /// Computes one average per input position, or fewer when lookback is enforced.
    #[instrument(level = "debug", skip_all, fields(len = values.len()))]
    pub fn compute<T: AsPrimitive<f64>>(&self, values: &[T]) -> Result<Vec<f64>> {
        self.validate()?;
        let values: Vec<f64> = values.iter().map(|value| value.as_()).collect();
        let window = self.resolve_window(values.len());
        let weights = self
            .weights
            .as_deref()
            .map(|weights| Weights::truncated(weights, window));
        debug!(
            window,
            weights = weights.as_ref().map_or(0, Weights::len),
            enforce_lookback = self.enforce_lookback,
            "Resolved rolling average window"
        );

        if self.enforce_lookback && window > values.len() {
            debug!("Lookback of {window} exceeds {} values, nothing to average", values.len());
            return Ok(Vec::new());
        }

        let mut averages = match &weights {
            Some(weights) => weighted_averages(&values, window, weights),
            None => simple_averages(&values, window),
        };

        // positions before the first full window have too little history
        if self.enforce_lookback {
            averages.drain(..window.saturating_sub(1).min(averages.len()));
        }
        Ok(averages)
    }

    fn resolve_window(&self, len: usize) -> usize {
        match self.window {
            Some(window) if window <= len || self.enforce_lookback => window,
            _ => len,
        }
    }
}

/// Standalone form of [`RollingAverage::compute`].
pub fn rolling_average<T: AsPrimitive<f64>>(
    values: &[T],
    window: Option<usize>,
    enforce_lookback: bool,
    weights: Option<&[f64]>,
) -> Result<Vec<f64>> {
    RollingAverage {
        window,
        enforce_lookback,
        weights: weights.map(<[f64]>::to_vec),
    }
    .compute(values)
}

fn simple_averages(values: &[f64], window: usize) -> Vec<f64> {
    let mut rolling = RollingWindow::new(window);
    let mut averages = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        rolling.push(value);
        if let Some(average) = rolling.mean() {
            trace!(index, average, "Simple rolling average");
            averages.push(average);
        }
    }
    averages
}

fn weighted_averages(values: &[f64], window: usize, weights: &Weights) -> Vec<f64> {
    let mut averages = Vec::with_capacity(values.len());
    for index in 0..values.len() {
        let start = (index + 1).saturating_sub(window);
        let recent = &values[start..=index];
        let sum: f64 = recent
            .iter()
            .rev()
            .enumerate()
            .map(|(offset, &value)| weights.apply(offset, value))
            .sum();
        let average = sum / recent.len() as f64;
        trace!(index, average, "Weighted rolling average");
        averages.push(average);
    }
    averages
}
