/// Per-slot multipliers for a weighted rolling average.
/// Slot 0 applies to the most recent value of a window, slot 1 to the one before it, and so on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weights {
    slots: Vec<f64>,
}

impl Weights {
    /// Keeps at most `window` leading slots; extra weights could never be reached.
    pub fn truncated(weights: &[f64], window: usize) -> Self {
        let keep = weights.len().min(window);
        Self {
            slots: weights[..keep].to_vec(),
        }
    }

    /// Applies the weight at `offset` to `value`.
    /// Offsets past the last slot pass the value through unweighted.
    pub fn apply(&self, offset: usize, value: f64) -> f64 {
        match self.slots.get(offset) {
            Some(weight) => weight * value,
            None => value,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
