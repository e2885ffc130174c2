use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcgError {
    #[error("cannot open signal source: {0}")]
    SourceUnavailable(#[source] io::Error),
    #[error("signal source yielded no parseable samples")]
    EmptySource,
    #[error("cannot open export sink: {0}")]
    SinkUnavailable(#[source] io::Error),
    #[error("failed writing to export sink: {0}")]
    SinkWrite(#[source] io::Error),
}
