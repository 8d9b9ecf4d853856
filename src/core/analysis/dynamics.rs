// src/core/analysis/dynamics.rs
//
// Block-based dynamic range estimation plus BS.1770 integrated loudness.
//
// Each channel is cut into non-overlapping blocks (3 s by default). The DR
// figure relates the quadratic mean of the loudest 20% of block RMS values to
// the second-highest block peak, which makes it robust against a single stray
// full-scale sample.

use ebur128::{EbuR128, Mode};
use log::debug;

use crate::config::DynamicsConfig;
use crate::core::decoder::AudioData;
use crate::core::dsp::stats;
use crate::detection::{DynamicsOutcome, DynamicsReport};
use crate::error::AnalysisError;

/// Dynamic range and loudness analyzer.
pub struct DynamicsAnalyzer {
    config: DynamicsConfig,
}

struct ChannelBlocks {
    /// Block peaks, sorted ascending.
    peaks: Vec<f64>,
    /// Block RMS values, sorted ascending.
    rms: Vec<f64>,
}

impl DynamicsAnalyzer {
    pub fn new(config: DynamicsConfig) -> Self {
        Self { config }
    }

    /// Measure DR, average peak/RMS and integrated loudness for a whole file.
    ///
    /// `TooShort` and `Silent` are ordinary outcomes, not errors; they suppress
    /// all four metrics together. An `Err` is only returned when the loudness
    /// meter itself fails.
    pub fn measure(&self, audio: &AudioData) -> Result<DynamicsOutcome, AnalysisError> {
        let block_size = (self.config.block_secs * audio.sample_rate as f64) as usize;
        if block_size == 0 {
            return Ok(DynamicsOutcome::TooShort);
        }

        let mut per_channel = Vec::with_capacity(audio.channels);
        for ch in 0..audio.channels {
            let samples = audio.channel(ch);
            match self.channel_blocks(&samples, block_size) {
                Some(blocks) => per_channel.push(blocks),
                None => return Ok(DynamicsOutcome::TooShort),
            }
        }

        let mut channel_drs = Vec::with_capacity(per_channel.len());
        let mut channel_mean_peaks = Vec::with_capacity(per_channel.len());
        let mut channel_mean_rms = Vec::with_capacity(per_channel.len());

        for blocks in &per_channel {
            let second_peak = blocks.peaks[blocks.peaks.len() - 2];
            if second_peak == 0.0 {
                return Ok(DynamicsOutcome::Silent);
            }

            let n = (self.config.loud_fraction * blocks.rms.len() as f64) as usize;
            if n == 0 {
                return Ok(DynamicsOutcome::TooShort);
            }

            let loudest_rms = &blocks.rms[blocks.rms.len() - n..];
            let top_rms = stats::quadratic_mean(loudest_rms);
            channel_drs.push(-stats::amplitude_to_db(top_rms / second_peak));
            channel_mean_peaks.push(stats::mean(&blocks.peaks));
            channel_mean_rms.push(stats::mean(&blocks.rms));
        }

        let dr = stats::mean(&channel_drs);
        let avg_peak_db = stats::amplitude_to_db(stats::mean(&channel_mean_peaks));
        let avg_rms_db = stats::amplitude_to_db(stats::mean(&channel_mean_rms));
        let integrated_lufs = self.integrated_loudness(audio)?;

        debug!(
            "dynamics: DR {dr:.2} dB, avg peak {avg_peak_db:.2} dB, avg rms {avg_rms_db:.2} dB, {integrated_lufs:.2} LUFS"
        );

        Ok(DynamicsOutcome::Measured(DynamicsReport {
            dr,
            avg_peak_db,
            avg_rms_db,
            integrated_lufs,
        }))
    }

    /// Per-block peak and RMS for one channel, both sorted ascending.
    /// `None` when fewer than two full blocks fit (the second-highest peak
    /// would not exist).
    fn channel_blocks(&self, samples: &[f32], block_size: usize) -> Option<ChannelBlocks> {
        let num_blocks = samples.len() / block_size;
        if num_blocks < 2 {
            return None;
        }

        let mut peaks = Vec::with_capacity(num_blocks);
        let mut rms = Vec::with_capacity(num_blocks);
        for block in samples.chunks_exact(block_size).take(num_blocks) {
            peaks.push(stats::peak_amplitude(block));
            rms.push(stats::rms(block));
        }

        peaks.sort_by(f64::total_cmp);
        rms.sort_by(f64::total_cmp);
        Some(ChannelBlocks { peaks, rms })
    }

    /// K-weighted, gated integrated loudness over all channels jointly.
    fn integrated_loudness(&self, audio: &AudioData) -> Result<f64, AnalysisError> {
        let mut meter = EbuR128::new(audio.channels as u32, audio.sample_rate, Mode::I)?;
        meter.add_frames_f32(&audio.samples)?;
        Ok(meter.loudness_global()?)
    }
}
