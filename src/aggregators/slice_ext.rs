use crate::aggregators::rolling_average::RollingAverage;
use crate::types::errors::Result;
use num_traits::AsPrimitive;

/// Rolling averages as a method on any numeric slice (and therefore on `Vec`).
pub trait RollingAverageExt {
    fn rolling_average(
        &self,
        window: Option<usize>,
        enforce_lookback: bool,
        weights: Option<&[f64]>,
    ) -> Result<Vec<f64>>;

    fn rolling_average_with(&self, config: &RollingAverage) -> Result<Vec<f64>>;
}

impl<T: AsPrimitive<f64>> RollingAverageExt for [T] {
    fn rolling_average(
        &self,
        window: Option<usize>,
        enforce_lookback: bool,
        weights: Option<&[f64]>,
    ) -> Result<Vec<f64>> {
        crate::aggregators::rolling_average::rolling_average(self, window, enforce_lookback, weights)
    }

    fn rolling_average_with(&self, config: &RollingAverage) -> Result<Vec<f64>> {
        config.compute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_method() {
        let values = vec![1.0, 2.0, 3.0];
        assert_eq!(values.rolling_average(None, false, None).unwrap(), vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_integer_slice_with_config() {
        let values: &[u32] = &[1, 2, 3, 4, 5, 6];
        let config = RollingAverage::new().with_window(3).with_enforce_lookback(true);
        assert_eq!(values.rolling_average_with(&config).unwrap(), vec![2.0, 3.0, 4.0, 5.0]);
    }
}
