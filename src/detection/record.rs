//! Typed analysis results
//!
//! Every sentinel the reference behavior expressed as a display string ("N/A",
//! "Too Short", color codes) is a variant here. Rendering decides how these look;
//! nothing in this module knows about terminals.

use serde::Serialize;
use std::path::PathBuf;

/// Authenticity verdict, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Verdict {
    Fake,
    MostLikelyFake,
    MightBeFake,
    MightBeAuthentic,
    MostLikelyAuthentic,
    Authentic,
    /// No cutoff was found, or the metric fell outside every tier.
    Undetermined,
}

impl Verdict {
    /// Position on the fake-to-authentic scale, for monotonicity comparisons.
    /// `Undetermined` has no position.
    pub fn tier(&self) -> Option<u8> {
        match self {
            Verdict::Fake => Some(0),
            Verdict::MostLikelyFake => Some(1),
            Verdict::MightBeFake => Some(2),
            Verdict::MightBeAuthentic => Some(3),
            Verdict::MostLikelyAuthentic => Some(4),
            Verdict::Authentic => Some(5),
            Verdict::Undetermined => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Fake => "Fake",
            Verdict::MostLikelyFake => "Most likely Fake",
            Verdict::MightBeFake => "Might be Fake",
            Verdict::MightBeAuthentic => "Might be Authentic",
            Verdict::MostLikelyAuthentic => "Most likely Authentic",
            Verdict::Authentic => "Authentic",
            Verdict::Undetermined => "Can't determine",
        }
    }
}

/// Three-tier quality classification of a single metric. Independent of the
/// authenticity verdict; purely for human-readable flagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityBand {
    Poor,
    Moderate,
    Good,
}

/// Successful dynamic range / loudness measurement.
#[derive(Debug, Clone, Serialize)]
pub struct DynamicsReport {
    /// Overall DR in dB, mean of per-channel figures (unrounded).
    pub dr: f64,
    /// dB of the mean block peak, averaged over channels.
    pub avg_peak_db: f64,
    /// dB of the mean block RMS, averaged over channels.
    pub avg_rms_db: f64,
    /// BS.1770 integrated loudness over all channels jointly.
    pub integrated_lufs: f64,
}

impl DynamicsReport {
    /// DR rounded to the nearest integer, the conventional display form.
    pub fn dr_rounded(&self) -> i64 {
        self.dr.round() as i64
    }
}

/// Outcome of the dynamic range analysis. The failure markers suppress all four
/// metrics together; a partially populated report cannot be expressed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DynamicsOutcome {
    Measured(DynamicsReport),
    /// Fewer than five full analysis blocks (under 15 seconds of audio).
    TooShort,
    /// The second-loudest block peak is exactly zero.
    Silent,
}

/// Everything measured about one successfully decoded file.
#[derive(Debug, Clone, Serialize)]
pub struct FileMetrics {
    pub sample_rate: u32,
    /// Highest significant frequency in Hz; `None` when no bin crossed threshold.
    pub cutoff_hz: Option<f32>,
    pub verdict: Verdict,
    pub dynamics: DynamicsOutcome,
}

/// Per-file result, error or analyzed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordOutcome {
    Analyzed(FileMetrics),
    Failed { error: String },
}

/// One row of the final report. Immutable once produced; the batch engine only
/// ever appends records and sorts the finished collection by file name.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub file_name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: RecordOutcome,
}

impl AnalysisRecord {
    pub fn new(path: &std::path::Path, outcome: RecordOutcome) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            file_name,
            path: path.to_path_buf(),
            outcome,
        }
    }

    pub fn metrics(&self) -> Option<&FileMetrics> {
        match &self.outcome {
            RecordOutcome::Analyzed(metrics) => Some(metrics),
            RecordOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, RecordOutcome::Failed { .. })
    }
}
