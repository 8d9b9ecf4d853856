//! FlacAudit - Spot upsampled fake lossless audio
//!
//! Audits FLAC/WAV collections for files that claim to be lossless but were
//! transcoded from a lossy source, and reports dynamic range / loudness quality
//! metrics alongside the authenticity verdict.
//!
//! ## How it works
//!
//! - **Spectral cutoff detection**: a lossy encoder leaves a hard spectral wall
//!   at its source Nyquist; the detector finds the highest frequency still
//!   carrying energy above a noise-floor-relative, frequency-biased threshold.
//! - **Verdict classification**: the (sample rate, cutoff) pair is mapped onto
//!   a six-tier Fake-to-Authentic ladder, with separate ladders for 48 kHz,
//!   hi-res, and CD-class rates.
//! - **Dynamics**: DR14-style block-based dynamic range, average block
//!   peak/RMS, and BS.1770 integrated loudness (LUFS), each banded into a
//!   red/yellow/green quality flag.
//! - **Batch engine**: one independent task per file on a worker pool; failed
//!   files become error rows instead of aborting the run.
//!
//! ## Module structure
//!
//! - `core` - decoding, DSP and the analysis algorithms
//! - `detection` - typed result records
//! - `batch` - file discovery and the concurrent batch engine
//! - `cli` - report rendering
//! - `config` - tunable constants with documented defaults
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use flacaudit::batch::{analyze_batch, discover_audio_files, BatchOptions, CancelToken};
//! use flacaudit::config::AnalysisConfig;
//!
//! let files = discover_audio_files(std::path::Path::new("album/"))?;
//! let records = analyze_batch(
//!     &files,
//!     &AnalysisConfig::default(),
//!     &BatchOptions::default(),
//!     &CancelToken::new(),
//! )?;
//! for record in &records {
//!     println!("{}: {:?}", record.file_name, record.outcome);
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod core;
pub mod detection;
pub mod error;

pub use batch::{analyze_batch, discover_audio_files, BatchOptions, CancelToken};
pub use config::{AnalysisConfig, CutoffConfig, DynamicsConfig};
pub use core::{analyze_file, analyze_to_record, AudioData};
pub use detection::{
    AnalysisRecord, DynamicsOutcome, DynamicsReport, FileMetrics, QualityBand, RecordOutcome,
    Verdict,
};
pub use error::{AnalysisError, DecodeError};
