//! Analysis result types

pub mod record;

pub use record::{
    AnalysisRecord, DynamicsOutcome, DynamicsReport, FileMetrics, QualityBand, RecordOutcome,
    Verdict,
};
