use serde::{Deserialize, Serialize};

use crate::filter::FilterKind;

/// Peak-detection parameters, shared by the detector and the heart-rate
/// estimator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Floor under the adaptive threshold.
    pub min_threshold: f64,
    /// Minimum gap between two accepted peaks, in seconds.
    pub refractory_secs: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_threshold: 0.5,
            refractory_secs: 0.25,
        }
    }
}

/// Full parameter set for one batch processing session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub filter: FilterKind,
    pub detector: DetectorConfig,
}
