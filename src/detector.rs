use log::{debug, info};

use crate::config::DetectorConfig;
use crate::signal::Signal;

/// Local-maximum peak detector over the filtered column, with an adaptive
/// RMS-derived threshold and a refractory period between accepted peaks.
pub struct PeakDetector {
    config: DetectorConfig,
}

impl PeakDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Returns the timestamps of accepted peaks, in ascending order with
    /// adjacent gaps of at least the refractory period.
    ///
    /// Fewer than three samples cannot form a two-sided local maximum, so
    /// short signals yield an empty list rather than an error.
    pub fn detect(&self, signal: &Signal) -> Vec<f64> {
        let samples = signal.samples();
        if samples.len() < 3 {
            debug!(
                "peak detection needs at least 3 samples, got {}",
                samples.len()
            );
            return Vec::new();
        }

        let mut sum_sq = 0.0;
        let mut max_abs = 0.0f64;
        for sample in samples {
            let v = sample.filtered.abs();
            sum_sq += v * v;
            max_abs = max_abs.max(v);
        }
        let rms = (sum_sq / samples.len() as f64).sqrt();

        let mut threshold = self.config.min_threshold.max(1.2 * rms);
        if max_abs > 0.0 && threshold > 0.9 * max_abs {
            // A near-flat signal's RMS-derived threshold can exceed its own
            // maximum; lower it so real low-amplitude peaks still register.
            threshold = 0.6 * max_abs;
        }

        let mut peaks = Vec::new();
        let mut last_accepted = f64::NEG_INFINITY;
        for i in 1..samples.len() - 1 {
            let y = samples[i].filtered;
            let is_candidate = y > samples[i - 1].filtered
                && y > samples[i + 1].filtered
                && y.abs() >= threshold;
            if is_candidate && samples[i].time - last_accepted >= self.config.refractory_secs {
                peaks.push(samples[i].time);
                last_accepted = samples[i].time;
            }
        }
        info!("detected {} peaks", peaks.len());
        peaks
    }
}
