//! Streaming statistics over trial outcomes.
//!
//! [`RunningStats`] consumes outcomes one at a time and keeps count, sum,
//! a Welford running mean / sum of squared deviations, and a fixed-width
//! histogram. Individual samples are never stored.

use serde::Serialize;

use crate::constants::HISTOGRAM_WIDTH;

/// Single-pass accumulator for one configuration's trial outcomes.
#[derive(Clone, Debug, PartialEq)]
pub struct RunningStats {
    n: u64,
    sum: u64,
    mean: f64,
    /// Welford's S: running sum of squared deviations from the mean.
    m2: f64,
    histogram: [u64; HISTOGRAM_WIDTH],
    overflow: u64,
    max: u32,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    pub fn new() -> Self {
        Self {
            n: 0,
            sum: 0,
            mean: 0.0,
            m2: 0.0,
            histogram: [0; HISTOGRAM_WIDTH],
            overflow: 0,
            max: 0,
        }
    }

    /// Add one outcome.
    pub fn record(&mut self, value: u32) {
        match self.histogram.get_mut(value as usize) {
            Some(bucket) => *bucket += 1,
            None => self.overflow += 1,
        }

        self.sum += value as u64;
        self.max = self.max.max(value);

        let x = value as f64;
        self.n += 1;
        if self.n == 1 {
            self.mean = x;
            self.m2 = 0.0;
        } else {
            let prev_mean = self.mean;
            self.mean = prev_mean + (x - prev_mean) / self.n as f64;
            self.m2 += (x - prev_mean) * (x - self.mean);
        }
    }

    /// Trials recorded so far.
    pub fn count(&self) -> u64 {
        self.n
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Largest outcome seen (0 when empty).
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Expected value = sum / n. `None` when no trials have been recorded.
    pub fn expected_value(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum as f64 / self.n as f64)
    }

    /// Sample variance S / (n - 1). `None` for fewer than two trials.
    pub fn variance(&self) -> Option<f64> {
        (self.n > 1).then(|| self.m2 / (self.n - 1) as f64)
    }

    /// Sample standard deviation. `None` for fewer than two trials.
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Bucket `i` counts outcomes exactly equal to `i`, for `i < HISTOGRAM_WIDTH`.
    pub fn histogram(&self) -> &[u64; HISTOGRAM_WIDTH] {
        &self.histogram
    }

    /// Outcomes at or past [`HISTOGRAM_WIDTH`].
    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    /// Largest single histogram bucket.
    pub fn max_bucket(&self) -> u64 {
        self.histogram.iter().copied().max().unwrap_or(0)
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            trials: self.n,
            expected_value: self.expected_value(),
            std_dev: self.std_dev(),
            max: self.max,
            histogram: self.histogram.to_vec(),
            overflow: self.overflow,
        }
    }
}

/// Serializable view of a finished [`RunningStats`].
///
/// Undefined statistics (`expected_value` at n = 0, `std_dev` at n ≤ 1)
/// serialize as `null`.
#[derive(Clone, Debug, Serialize)]
pub struct StatsSummary {
    pub trials: u64,
    pub expected_value: Option<f64>,
    pub std_dev: Option<f64>,
    pub max: u32,
    pub histogram: Vec<u64>,
    pub overflow: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_values(values: &[u32]) -> RunningStats {
        let mut stats = RunningStats::new();
        for &v in values {
            stats.record(v);
        }
        stats
    }

    #[test]
    fn test_empty_is_undefined() {
        let stats = RunningStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.expected_value(), None);
        assert_eq!(stats.std_dev(), None);
        assert_eq!(stats.max_bucket(), 0);
    }

    #[test]
    fn test_single_sample() {
        let stats = from_values(&[3]);
        assert_eq!(stats.count(), 1);
        assert_eq!(stats.expected_value(), Some(3.0));
        assert_eq!(stats.std_dev(), None);
        assert_eq!(stats.histogram()[3], 1);
    }

    #[test]
    fn test_all_equal_samples() {
        let stats = from_values(&[5; 1000]);
        assert_eq!(stats.expected_value(), Some(5.0));
        assert_eq!(stats.std_dev(), Some(0.0));
    }

    #[test]
    fn test_known_sequence() {
        // 2, 4, 4, 4, 5, 5, 7, 9: mean 5, sum of squared deviations 32
        let stats = from_values(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert!((stats.expected_value().unwrap() - 5.0).abs() < 1e-12);
        assert!((stats.variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(stats.max(), 9);
        assert_eq!(stats.sum(), 40);
    }

    #[test]
    fn test_histogram_overflow() {
        let w = HISTOGRAM_WIDTH as u32;
        let stats = from_values(&[0, 1, 1, w - 1, w, w + 5, 1000]);
        assert_eq!(stats.histogram()[0], 1);
        assert_eq!(stats.histogram()[1], 2);
        assert_eq!(stats.histogram()[HISTOGRAM_WIDTH - 1], 1);
        assert_eq!(stats.overflow(), 3);
        let in_range: u64 = stats.histogram().iter().sum();
        assert_eq!(in_range + stats.overflow(), stats.count());
        // Overflowed values still count toward the mean
        assert_eq!(stats.sum(), (w - 1 + w + w + 5 + 1000 + 2) as u64);
    }

    #[test]
    fn test_summary_serializes_undefined_as_null() {
        let json = serde_json::to_value(from_values(&[1]).summary()).unwrap();
        assert_eq!(json["trials"], 1);
        assert_eq!(json["expected_value"], 1.0);
        assert!(json["std_dev"].is_null());
        assert_eq!(json["histogram"].as_array().unwrap().len(), HISTOGRAM_WIDTH);
    }
}
