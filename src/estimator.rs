use log::warn;

use crate::config::DetectorConfig;
use crate::detector::PeakDetector;
use crate::signal::Signal;

/// Derives beats per minute from the mean RR interval of detected peaks.
pub struct HeartRateEstimator {
    detector: PeakDetector,
}

impl HeartRateEstimator {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            detector: PeakDetector::new(config),
        }
    }

    /// Runs peak detection over the filtered column and converts the mean RR
    /// interval to BPM. Fewer than two peaks yield 0.0.
    pub fn average_bpm(&self, signal: &Signal) -> f64 {
        Self::bpm_from_peaks(&self.detector.detect(signal))
    }

    /// BPM from an already-detected ascending peak list.
    ///
    /// The mean RR interval telescopes to
    /// `(last - first) / (count - 1)`.
    pub fn bpm_from_peaks(peaks: &[f64]) -> f64 {
        if peaks.len() < 2 {
            warn!("need at least 2 peaks for a heart rate, got {}", peaks.len());
            return 0.0;
        }
        let mean_rr = (peaks[peaks.len() - 1] - peaks[0]) / (peaks.len() - 1) as f64;
        if mean_rr > 0.0 {
            60.0 / mean_rr
        } else {
            0.0
        }
    }
}
