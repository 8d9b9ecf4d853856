//! Report rendering
//!
//! The only module that knows about terminals. Records arrive fully typed; all
//! string placeholders ("N/A", "Too Short") and ANSI styling are produced here
//! and nowhere else.

use colorful::{Color, Colorful};

use crate::core::analysis::classify;
use crate::detection::{AnalysisRecord, DynamicsOutcome, QualityBand, RecordOutcome, Verdict};

const HEADERS: [&str; 8] = [
    "File",
    "Sample Rate",
    "Max Freq",
    "Avg Peak",
    "Avg RMS",
    "LUFS",
    "DR",
    "Verdict",
];

/// Render the full batch report as an aligned table.
pub fn render_table(records: &[AnalysisRecord]) -> String {
    let rows: Vec<[String; 8]> = records.iter().map(plain_row).collect();

    // Column widths from uncolored text; ANSI codes are added afterwards so
    // they do not skew the padding.
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    for (i, header) in HEADERS.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", header, width = widths[i]));
    }
    out.push('\n');
    for (i, _) in HEADERS.iter().enumerate() {
        out.push_str(&"-".repeat(widths[i]));
        out.push_str("  ");
    }
    out.push('\n');

    for (record, row) in records.iter().zip(&rows) {
        for (i, cell) in row.iter().enumerate() {
            let padding = " ".repeat(widths[i] - cell.len());
            out.push_str(&colorize_cell(record, i, cell));
            out.push_str(&padding);
            out.push_str("  ");
        }
        out.push('\n');
    }

    out
}

/// Uncolored cell contents for one record.
fn plain_row(record: &AnalysisRecord) -> [String; 8] {
    let metrics = match &record.outcome {
        RecordOutcome::Failed { error } => {
            return [
                record.file_name.clone(),
                "-".into(),
                "-".into(),
                "-".into(),
                "-".into(),
                "-".into(),
                "-".into(),
                format!("Error: {error}"),
            ];
        }
        RecordOutcome::Analyzed(metrics) => metrics,
    };

    let cutoff = metrics
        .cutoff_hz
        .map(|hz| format!("{hz:.0}"))
        .unwrap_or_else(|| "N/A".into());

    let (peak, rms, lufs, dr) = match &metrics.dynamics {
        DynamicsOutcome::Measured(report) => (
            format!("{:.2} dB", report.avg_peak_db),
            format!("{:.2} dB", report.avg_rms_db),
            format!("{:.2} LUFS", report.integrated_lufs),
            report.dr_rounded().to_string(),
        ),
        DynamicsOutcome::TooShort => ("N/A".into(), "N/A".into(), "N/A".into(), "Too Short".into()),
        DynamicsOutcome::Silent => (
            "N/A".into(),
            "N/A".into(),
            "N/A".into(),
            "Silent Track".into(),
        ),
    };

    [
        record.file_name.clone(),
        metrics.sample_rate.to_string(),
        cutoff,
        peak,
        rms,
        lufs,
        dr,
        metrics.verdict.label().to_string(),
    ]
}

/// Apply the reference color palette to one cell.
fn colorize_cell(record: &AnalysisRecord, column: usize, cell: &str) -> String {
    let metrics = match &record.outcome {
        RecordOutcome::Failed { .. } => {
            return if column == 7 {
                cell.to_string().color(Color::Red).to_string()
            } else {
                cell.to_string()
            };
        }
        RecordOutcome::Analyzed(metrics) => metrics,
    };

    let measured = match &metrics.dynamics {
        DynamicsOutcome::Measured(report) => Some(report),
        _ => None,
    };

    match column {
        // Sample rate and cutoff are informational
        1 => cell.to_string().color(Color::Cyan).to_string(),
        2 => {
            if metrics.cutoff_hz.is_some() {
                cell.to_string().color(Color::Cyan).to_string()
            } else {
                cell.to_string().color(Color::Yellow).to_string()
            }
        }
        3 => match measured {
            Some(r) => band_color(cell, classify::peak_band(r.avg_peak_db)),
            None => cell.to_string().color(Color::Yellow).to_string(),
        },
        4 => match measured {
            Some(r) => band_color(cell, classify::rms_band(r.avg_rms_db)),
            None => cell.to_string().color(Color::Yellow).to_string(),
        },
        5 => match measured {
            Some(r) => band_color(cell, classify::loudness_band(r.integrated_lufs)),
            None => cell.to_string().color(Color::Yellow).to_string(),
        },
        6 => match measured {
            Some(r) => band_color(cell, classify::dr_band(r.dr_rounded() as f64)),
            None => cell.to_string().color(Color::Red).to_string(),
        },
        7 => verdict_color(cell, metrics.verdict),
        _ => cell.to_string(),
    }
}

fn band_color(cell: &str, band: QualityBand) -> String {
    let color = match band {
        QualityBand::Poor => Color::Red,
        QualityBand::Moderate => Color::Yellow,
        QualityBand::Good => Color::Green,
    };
    cell.to_string().color(color).to_string()
}

fn verdict_color(cell: &str, verdict: Verdict) -> String {
    let color = match verdict {
        Verdict::Fake | Verdict::MostLikelyFake => Color::Red,
        Verdict::MightBeFake | Verdict::MightBeAuthentic => Color::Yellow,
        Verdict::MostLikelyAuthentic | Verdict::Authentic => Color::Green,
        Verdict::Undetermined => Color::Blue,
    };
    cell.to_string().color(color).to_string()
}

/// Render records as pretty-printed JSON.
pub fn render_json(records: &[AnalysisRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
