/// Running statistics for one key.
///
/// An accumulator only exists once a key has been seen with a parseable
/// value, so `count` is always at least one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    min: f64,
    max: f64,
    sum: f64,
    count: u64,
}

impl Accumulator {
    pub fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    #[inline]
    pub fn observe(&mut self, value: f64) {
        self.merge(&Self::new(value));
    }

    /// Folds `other` into `self`.
    ///
    /// min, max and count combine associatively and commutatively; the sum
    /// does too up to floating-point reassociation.
    #[inline]
    pub fn merge(&mut self, other: &Accumulator) {
        // strict comparisons: on a tie (e.g. 0.0 vs -0.0) the earlier value stays
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}
