//! Textual ingestion and export framing for [`Signal`].
//!
//! The ingestion format is whitespace-separated `(time, amplitude)` pairs;
//! the export format is a tab-separated header plus one
//! `time\toriginal\tfiltered` line per sample.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::error::EcgError;
use crate::signal::Signal;

impl Signal {
    /// Reads whitespace-separated `(time, amplitude)` pairs until the token
    /// stream is exhausted or the first malformed or incomplete pair.
    /// Trailing garbage after at least one valid pair is ignored; zero valid
    /// pairs is [`EcgError::EmptySource`] and leaves the signal unchanged.
    ///
    /// Returns the number of ingested samples.
    pub fn load_from_reader<R: Read>(&mut self, mut reader: R) -> Result<usize, EcgError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(EcgError::SourceUnavailable)?;

        let mut tokens = text.split_whitespace();
        let mut count = 0usize;
        while let Some(time) = tokens.next().and_then(|tok| tok.parse::<f64>().ok()) {
            let Some(amplitude) = tokens.next().and_then(|tok| tok.parse::<f64>().ok()) else {
                break;
            };
            self.push(time, amplitude);
            count += 1;
        }

        if count == 0 {
            return Err(EcgError::EmptySource);
        }
        info!("loaded {count} samples");
        Ok(count)
    }

    /// Opens `path` and ingests it via [`Signal::load_from_reader`].
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize, EcgError> {
        let file = File::open(path).map_err(EcgError::SourceUnavailable)?;
        self.load_from_reader(file)
    }

    /// Writes the `time\toriginal\tfiltered` header followed by one line per
    /// sample. Repeated export of an unchanged signal is byte-identical.
    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<(), EcgError> {
        let mut out = BufWriter::new(writer);
        writeln!(out, "time\toriginal\tfiltered").map_err(EcgError::SinkWrite)?;
        for sample in self.samples() {
            writeln!(out, "{}\t{}\t{}", sample.time, sample.amplitude, sample.filtered)
                .map_err(EcgError::SinkWrite)?;
        }
        out.flush().map_err(EcgError::SinkWrite)
    }

    /// Creates `path` and exports via [`Signal::export_to_writer`].
    pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<(), EcgError> {
        let file = File::create(path).map_err(EcgError::SinkUnavailable)?;
        self.export_to_writer(file)
    }
}
