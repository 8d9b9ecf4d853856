//! Error taxonomy for per-file analysis
//!
//! Every variant here is a record-level failure: it fails one file's task and is
//! reported on that file's row while the batch continues. Short or silent tracks
//! are not errors (see `DynamicsOutcome`); the authenticity verdict is still
//! computed for them.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a file into a sample buffer.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported or corrupt container: {0}")]
    Probe(#[source] symphonia::core::errors::Error),

    #[error("no decodable audio track found")]
    NoAudioTrack,

    #[error("file does not declare a sample rate")]
    MissingSampleRate,

    #[error("decoder failed: {0}")]
    Decode(#[source] symphonia::core::errors::Error),

    #[error("no audio samples decoded from file")]
    EmptyStream,
}

/// Any failure that aborts one file's analysis task.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("unsupported channel layout: {channels} channels (only mono and stereo are handled)")]
    UnsupportedChannelLayout { channels: usize },

    #[error("loudness measurement failed: {0}")]
    Loudness(String),
}

impl From<ebur128::Error> for AnalysisError {
    fn from(err: ebur128::Error) -> Self {
        Self::Loudness(format!("{err:?}"))
    }
}
