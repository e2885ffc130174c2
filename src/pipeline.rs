use std::io::{Read, Write};
use std::path::Path;

use crate::config::PipelineConfig;
use crate::detector::PeakDetector;
use crate::error::EcgError;
use crate::estimator::HeartRateEstimator;
use crate::filter::FilterKind;
use crate::signal::Signal;

/// High level batch session over one owned signal: load a recording, run the
/// configured filter, read peaks and heart rate off the filtered column, and
/// export the processed columns.
pub struct EcgPipeline {
    signal: Signal,
    config: PipelineConfig,
}

impl EcgPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            signal: Signal::new(),
            config,
        }
    }

    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Swaps the filter for subsequent [`EcgPipeline::apply_filter`] calls;
    /// the filtered column is untouched until then.
    pub fn set_filter(&mut self, filter: FilterKind) {
        self.config.filter = filter;
    }

    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<usize, EcgError> {
        self.signal.load_from_reader(reader)
    }

    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize, EcgError> {
        self.signal.load_from_path(path)
    }

    /// Overwrites the filtered column with the configured filter's output.
    pub fn apply_filter(&mut self) {
        self.config.filter.apply(&mut self.signal);
    }

    /// Peak timestamps over the current filtered column. Detection runs
    /// fresh on every call; nothing is cached.
    pub fn detect_peaks(&self) -> Vec<f64> {
        PeakDetector::new(self.config.detector).detect(&self.signal)
    }

    pub fn average_bpm(&self) -> f64 {
        HeartRateEstimator::new(self.config.detector).average_bpm(&self.signal)
    }

    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<(), EcgError> {
        self.signal.export_to_writer(writer)
    }

    pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<(), EcgError> {
        self.signal.export_to_path(path)
    }
}
