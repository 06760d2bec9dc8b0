/// Samples kept by [`RollingAverage::new`].
const DEFAULT_WINDOW: usize = 50;

/// Streaming mean over the most recent samples, O(1) per update.
///
/// Two regimes: while the window is filling, each sample folds into an
/// incremental mean; once full, the oldest sample is evicted from a circular
/// buffer and the mean adjusted by the difference. The mean is never resynced
/// against the true sum, so tiny float drift accumulates over very long runs —
/// fine for telemetry smoothing, compare with a tolerance when testing.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingAverage {
    capacity: usize,
    values: Vec<f64>,
    mean: Option<f64>,
    index: usize,
}

impl RollingAverage {
    /// A window of [`DEFAULT_WINDOW`] samples.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WINDOW)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // A window always holds at least one sample
        let capacity = capacity.max(1);
        Self {
            capacity,
            values: Vec::with_capacity(capacity),
            mean: None,
            index: 0,
        }
    }

    pub fn add(&mut self, value: f64) {
        if self.values.len() < self.capacity {
            // Filling: fold into the incremental mean
            let seen = self.values.len() as f64;
            self.mean = Some(match self.mean {
                Some(mean) => (mean * seen + value) / (seen + 1.0),
                None => value,
            });
            self.values.push(value);
            self.index = self.values.len() % self.capacity;
        } else {
            // Full: evict the oldest sample and adjust
            let old = self.values[self.index];
            self.values[self.index] = value;
            if let Some(mean) = &mut self.mean {
                *mean += (value - old) / self.capacity as f64;
            }
            self.index = (self.index + 1) % self.capacity;
        }
    }

    /// The current mean, or `None` if no sample was ever added.
    ///
    /// "No samples" and "mean of zero" are distinct states.
    pub fn get(&self) -> Option<f64> {
        self.mean
    }

    /// Forgets every sample and returns to the empty filling regime.
    pub fn clear(&mut self) {
        self.values.clear();
        self.mean = None;
        self.index = 0;
    }
}

impl Default for RollingAverage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn filling_mean() {
        let mut avg = RollingAverage::new();
        assert_eq!(avg.get(), None);

        for value in [1.0, 2.0, 3.0] {
            avg.add(value);
        }

        assert_eq!(avg.get(), Some(2.0));
    }

    #[test]
    fn eviction() {
        let mut avg = RollingAverage::with_capacity(3);
        for value in [1.0, 2.0, 3.0] {
            avg.add(value);
        }

        // 1.0 leaves the window
        avg.add(10.0);
        assert!(close(avg.get().unwrap(), 5.0));

        // then 2.0
        avg.add(10.0);
        assert!(close(avg.get().unwrap(), 23.0 / 3.0));
    }

    #[test]
    fn converges_when_saturated() {
        let mut avg = RollingAverage::new();
        avg.add(1000.0);

        for _ in 0..DEFAULT_WINDOW {
            avg.add(7.0);
        }

        assert!(close(avg.get().unwrap(), 7.0));
    }

    #[test]
    fn clear_forgets() {
        let mut avg = RollingAverage::new();
        avg.add(4.0);
        avg.clear();

        assert_eq!(avg.get(), None);

        // Usable again after a clear
        avg.add(8.0);
        assert_eq!(avg.get(), Some(8.0));
    }
}
