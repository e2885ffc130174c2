use log::debug;
use serde::{Deserialize, Serialize};

use crate::signal::Signal;

/// Selectable smoothing filter. Both variants read the raw amplitude column
/// and overwrite the filtered column of every sample; applying a filter to an
/// empty signal is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// First-order exponential low-pass:
    /// `y[n] = alpha * y[n-1] + (1 - alpha) * x[n]`, `y[0] = x[0]`.
    /// `alpha` is clamped to `[0, 1]`, so the output is a convex combination
    /// of the previous output and the current sample and stays within the
    /// raw amplitude bounds. `alpha = 0` reproduces the raw signal,
    /// `alpha = 1` holds the first sample.
    Exponential { alpha: f64 },
    /// Centered moving average over `2 * (window_length / 2) + 1` samples
    /// (even lengths round down to the nearest odd width). The window is
    /// truncated at the sequence boundaries and the divisor is the actual
    /// sample count, so edge samples see less smoothing.
    MovingAverage { window_length: usize },
}

impl Default for FilterKind {
    fn default() -> Self {
        FilterKind::Exponential { alpha: 0.98 }
    }
}

impl FilterKind {
    pub fn apply(&self, signal: &mut Signal) {
        if signal.is_empty() {
            return;
        }
        match *self {
            FilterKind::Exponential { alpha } => exponential(signal, alpha),
            FilterKind::MovingAverage { window_length } => moving_average(signal, window_length),
        }
    }
}

fn exponential(signal: &mut Signal, alpha: f64) {
    let alpha = alpha.clamp(0.0, 1.0);
    let samples = signal.samples_mut();
    samples[0].filtered = samples[0].amplitude;
    let mut prev = samples[0].filtered;
    for sample in &mut samples[1..] {
        sample.filtered = alpha * prev + (1.0 - alpha) * sample.amplitude;
        prev = sample.filtered;
    }
    debug!("exponential filter applied (alpha = {alpha})");
}

fn moving_average(signal: &mut Signal, window_length: usize) {
    let radius = window_length.max(1) / 2;
    let samples = signal.samples_mut();
    let last = samples.len() - 1;
    // Always averages the raw column, never a previous filter's output.
    let raw: Vec<f64> = samples.iter().map(|s| s.amplitude).collect();
    for (i, sample) in samples.iter_mut().enumerate() {
        let window = &raw[i.saturating_sub(radius)..=(i + radius).min(last)];
        sample.filtered = window.iter().sum::<f64>() / window.len() as f64;
    }
    debug!(
        "moving-average filter applied (window = {} samples)",
        2 * radius + 1
    );
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn signal_from(amplitudes: &[f64]) -> Signal {
        let mut signal = Signal::new();
        for (i, &amplitude) in amplitudes.iter().enumerate() {
            signal.push(i as f64 * 0.01, amplitude);
        }
        signal
    }

    fn filtered(signal: &Signal) -> Vec<f64> {
        signal.samples().iter().map(|s| s.filtered).collect()
    }

    fn variance(values: &[f64]) -> f64 {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
    }

    #[test]
    fn exponential_alpha_zero_is_identity() {
        let mut signal = signal_from(&[1.0, -2.0, 3.5, 0.0]);
        FilterKind::Exponential { alpha: 0.0 }.apply(&mut signal);
        assert_eq!(filtered(&signal), vec![1.0, -2.0, 3.5, 0.0]);
    }

    #[test]
    fn exponential_alpha_one_holds_first_sample() {
        let mut signal = signal_from(&[2.5, -7.0, 4.0, 11.0]);
        FilterKind::Exponential { alpha: 1.0 }.apply(&mut signal);
        assert_eq!(filtered(&signal), vec![2.5, 2.5, 2.5, 2.5]);
    }

    #[test]
    fn exponential_output_stays_within_amplitude_bounds() {
        let amplitudes = [0.3, -1.7, 4.2, 3.9, -0.8, 2.2, 1.0];
        let min = amplitudes.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = amplitudes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for alpha in [0.0, 0.25, 0.5, 0.75, 0.98, 1.0] {
            let mut signal = signal_from(&amplitudes);
            FilterKind::Exponential { alpha }.apply(&mut signal);
            for y in filtered(&signal) {
                assert!(y >= min && y <= max, "alpha {alpha}: {y} out of [{min}, {max}]");
            }
        }
    }

    #[test]
    fn exponential_clamps_out_of_range_alpha() {
        let amplitudes = [1.0, 5.0, -3.0];

        let mut high = signal_from(&amplitudes);
        FilterKind::Exponential { alpha: 1.5 }.apply(&mut high);
        let mut one = signal_from(&amplitudes);
        FilterKind::Exponential { alpha: 1.0 }.apply(&mut one);
        assert_eq!(filtered(&high), filtered(&one));

        let mut low = signal_from(&amplitudes);
        FilterKind::Exponential { alpha: -0.3 }.apply(&mut low);
        let mut zero = signal_from(&amplitudes);
        FilterKind::Exponential { alpha: 0.0 }.apply(&mut zero);
        assert_eq!(filtered(&low), filtered(&zero));
    }

    #[test]
    fn moving_average_truncates_window_at_edges() {
        let mut signal = signal_from(&[3.0, 6.0, 9.0]);
        FilterKind::MovingAverage { window_length: 3 }.apply(&mut signal);
        assert_eq!(filtered(&signal), vec![4.5, 6.0, 7.5]);
    }

    #[test]
    fn moving_average_even_window_rounds_down() {
        let amplitudes = [1.0, 4.0, 2.0, 8.0, 5.0, 7.0];
        let mut even = signal_from(&amplitudes);
        FilterKind::MovingAverage { window_length: 4 }.apply(&mut even);
        let mut odd = signal_from(&amplitudes);
        FilterKind::MovingAverage { window_length: 5 }.apply(&mut odd);
        assert_eq!(filtered(&even), filtered(&odd));
    }

    #[test]
    fn moving_average_window_one_copies_raw() {
        for window_length in [0, 1] {
            let mut signal = signal_from(&[1.0, -2.0, 3.0]);
            FilterKind::MovingAverage { window_length }.apply(&mut signal);
            assert_eq!(filtered(&signal), vec![1.0, -2.0, 3.0]);
        }
    }

    #[test]
    fn moving_average_reduces_variance_of_noise() {
        let mut rng = StdRng::seed_from_u64(42);
        let amplitudes: Vec<f64> = (0..256).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut signal = signal_from(&amplitudes);
        FilterKind::MovingAverage { window_length: 9 }.apply(&mut signal);
        assert!(variance(&filtered(&signal)) < variance(&amplitudes));
    }

    #[test]
    fn moving_average_reads_raw_column() {
        let amplitudes = [0.0, 6.0, 0.0];
        let mut signal = signal_from(&amplitudes);
        // A previous pass must not leak into the moving average.
        FilterKind::Exponential { alpha: 1.0 }.apply(&mut signal);
        FilterKind::MovingAverage { window_length: 3 }.apply(&mut signal);
        assert_eq!(filtered(&signal), vec![3.0, 2.0, 3.0]);
    }

    #[test]
    fn filters_are_noops_on_empty_signal() {
        let mut signal = Signal::new();
        FilterKind::Exponential { alpha: 0.5 }.apply(&mut signal);
        FilterKind::MovingAverage { window_length: 5 }.apply(&mut signal);
        assert!(signal.is_empty());
    }
}
