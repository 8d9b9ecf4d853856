// src/core/analyzer.rs
//
// Per-file analysis pipeline: decode, spectral cutoff, dynamics, verdict.

use log::warn;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::core::analysis::{classify, CutoffDetector, DynamicsAnalyzer};
use crate::core::decoder::decode_audio;
use crate::detection::{AnalysisRecord, FileMetrics, RecordOutcome};
use crate::error::AnalysisError;

/// Run the full pipeline for one file.
///
/// TooShort/Silent tracks still get a verdict: the cutoff detector works on any
/// amount of audio and its absence case is an ordinary result, not a failure.
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> Result<FileMetrics, AnalysisError> {
    let audio = decode_audio(path)?;

    if !(1..=2).contains(&audio.channels) {
        return Err(AnalysisError::UnsupportedChannelLayout {
            channels: audio.channels,
        });
    }

    let mono = audio.mono_mixdown();
    let cutoff_hz = CutoffDetector::new(config.cutoff.clone()).detect(&mono, audio.sample_rate);
    let verdict = classify::classify_cutoff(audio.sample_rate, cutoff_hz);
    let dynamics = DynamicsAnalyzer::new(config.dynamics.clone()).measure(&audio)?;

    Ok(FileMetrics {
        sample_rate: audio.sample_rate,
        cutoff_hz,
        verdict,
        dynamics,
    })
}

/// Task-boundary wrapper: every failure becomes a record so one bad file can
/// never abort the batch.
pub fn analyze_to_record(path: &Path, config: &AnalysisConfig) -> AnalysisRecord {
    match analyze_file(path, config) {
        Ok(metrics) => AnalysisRecord::new(path, RecordOutcome::Analyzed(metrics)),
        Err(err) => {
            warn!("{}: {err}", path.display());
            AnalysisRecord::new(
                path,
                RecordOutcome::Failed {
                    error: err.to_string(),
                },
            )
        }
    }
}
