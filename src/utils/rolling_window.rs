use std::collections::VecDeque;

/// A fixed-capacity sliding window over the most recent values.
/// The newest value sits at the front; pushing into a full window evicts the oldest one.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    buffer: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds a value as the most recent entry.
    /// If the window is full, the oldest entry is dropped.
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.buffer.len() == self.capacity {
            self.buffer.pop_back();
        }
        self.buffer.push_front(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Values from the most recent to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.buffer.iter()
    }

    /// Arithmetic mean of the current contents, `None` while empty.
    pub fn mean(&self) -> Option<f64> {
        if self.buffer.is_empty() {
            return None;
        }
        let sum: f64 = self.buffer.iter().sum();
        Some(sum / self.buffer.len() as f64)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_has_no_mean() {
        let window = RollingWindow::new(3);
        assert!(window.is_empty());
        assert_eq!(window.mean(), None);
    }

    #[test]
    fn test_growing_phase_averages_everything_seen() {
        let mut window = RollingWindow::new(4);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.len(), 2);
        assert_eq!(window.mean(), Some(1.5));
    }

    #[test]
    fn test_full_window_evicts_oldest() {
        let mut window = RollingWindow::new(2);
        for value in [1.0, 2.0, 3.0] {
            window.push(value);
        }
        assert_eq!(window.len(), 2);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![3.0, 2.0]);
        assert_eq!(window.mean(), Some(2.5));
    }

    #[test]
    fn test_single_slot_returns_value_unchanged() {
        let mut window = RollingWindow::new(1);
        for value in [0.1, 0.3, -7.25] {
            window.push(value);
            assert_eq!(window.mean(), Some(value));
        }
    }

    #[test]
    fn test_zero_capacity_ignores_pushes() {
        let mut window = RollingWindow::new(0);
        window.push(5.0);
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 0);
    }

    #[test]
    fn test_clear() {
        let mut window = RollingWindow::new(3);
        window.push(1.0);
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 3);
    }
}
