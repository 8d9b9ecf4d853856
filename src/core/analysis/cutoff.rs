// src/core/analysis/cutoff.rs
//
// Spectral cutoff detector: the lossy-transcode fingerprint. Finds the highest
// frequency bin that still carries energy above a noise-floor-relative,
// frequency-biased threshold.

use log::debug;

use crate::config::CutoffConfig;
use crate::core::dsp::{savgol_smooth, stats, Stft};

/// Detects the highest significant frequency of a signal.
///
/// Pure function of (samples, sample rate): no I/O, no randomness, identical
/// output on repeated calls. The input is expected to be a mono mixdown (see
/// `AudioData::mono_mixdown`); framing and tuning come from `CutoffConfig` and
/// are held constant across files so results are comparable.
pub struct CutoffDetector {
    config: CutoffConfig,
}

impl CutoffDetector {
    pub fn new(config: CutoffConfig) -> Self {
        Self { config }
    }

    /// Highest frequency (Hz, rounded up to the next integer) at which any
    /// analysis frame exceeds the threshold curve, or `None` if no bin ever
    /// qualifies.
    pub fn detect(&self, samples: &[f32], sample_rate: u32) -> Option<f32> {
        let cfg = &self.config;
        let stft = Stft::new(cfg.fft_size, cfg.hop_size);
        let spectrogram = stft.process(samples, sample_rate);

        let max_magnitude = spectrogram.max_magnitude();
        if max_magnitude <= 0.0 {
            // Digital silence: no bin can qualify
            return None;
        }

        // dB relative to the loudest bin of the whole track, clamped to a
        // top_db window below it so the statistics track program material.
        let amin = 1e-10f32;
        let floor_db = -cfg.top_db as f32;
        let db_frames: Vec<Vec<f32>> = spectrogram
            .frames
            .iter()
            .map(|frame| {
                let db: Vec<f32> = frame
                    .iter()
                    .map(|&mag| {
                        let db = 20.0 * (mag.max(amin) / max_magnitude).log10();
                        db.max(floor_db)
                    })
                    .collect();
                savgol_smooth(&db, cfg.smooth_window)
            })
            .collect();

        let (mean, stddev) =
            stats::mean_stddev(db_frames.iter().flat_map(|f| f.iter().copied()));
        let base_threshold = mean + cfg.threshold_sigma * stddev;

        let f_max = spectrogram.bin_freqs.last().copied().unwrap_or(0.0);
        if f_max <= 0.0 {
            return None;
        }

        debug!(
            "cutoff thresholds: mean {mean:.1} dB, stddev {stddev:.1} dB, base {base_threshold:.1} dB"
        );

        // Scan from the top of the spectrum down; the first bin where any frame
        // clears its threshold is the answer. The threshold curve drops by
        // hf_bias_db toward f_max but never below the clamp floor, so bins
        // pinned at the floor are never significant.
        for bin in (0..spectrogram.num_bins()).rev() {
            let freq = spectrogram.bin_freqs[bin];
            let biased = base_threshold - cfg.hf_bias_db * (freq / f_max) as f64;
            let threshold = biased.max(floor_db as f64) as f32;

            let significant = db_frames.iter().any(|frame| frame[bin] > threshold);
            if significant {
                return Some(freq.ceil());
            }
        }

        None
    }
}
