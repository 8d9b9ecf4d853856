//! Short-time magnitude spectrum
//!
//! Hann-windowed STFT over non-centered frames: frame `i` covers samples
//! `[i * hop, i * hop + fft_size)`. Input shorter than one frame is zero-padded
//! so every signal yields at least one frame.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f32::consts::PI;

/// A magnitude spectrogram plus the bin center frequencies it is indexed by.
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// One magnitude vector per analysis frame, `fft_size / 2 + 1` bins each.
    pub frames: Vec<Vec<f32>>,
    /// Center frequency of each bin in Hz, ascending.
    pub bin_freqs: Vec<f32>,
}

impl Spectrogram {
    pub fn num_bins(&self) -> usize {
        self.bin_freqs.len()
    }

    /// Largest magnitude anywhere in the spectrogram.
    pub fn max_magnitude(&self) -> f32 {
        self.frames
            .iter()
            .flat_map(|frame| frame.iter().copied())
            .fold(0.0f32, f32::max)
    }
}

/// STFT processor with a fixed framing.
pub struct Stft {
    fft_size: usize,
    hop_size: usize,
    window: Vec<f32>,
}

impl Stft {
    pub fn new(fft_size: usize, hop_size: usize) -> Self {
        // Hann window
        let window: Vec<f32> = (0..fft_size)
            .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f32 / fft_size as f32).cos()))
            .collect();

        Self {
            fft_size,
            hop_size,
            window,
        }
    }

    /// Compute the magnitude spectrogram of `samples` at `sample_rate`.
    pub fn process(&self, samples: &[f32], sample_rate: u32) -> Spectrogram {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(self.fft_size);

        let num_bins = self.fft_size / 2 + 1;
        let num_frames = if samples.len() < self.fft_size {
            1
        } else {
            (samples.len() - self.fft_size) / self.hop_size + 1
        };

        let mut frames = Vec::with_capacity(num_frames);
        let mut buffer = vec![Complex::new(0.0f32, 0.0); self.fft_size];

        for i in 0..num_frames {
            let start = i * self.hop_size;

            for (j, slot) in buffer.iter_mut().enumerate() {
                let sample = samples.get(start + j).copied().unwrap_or(0.0);
                *slot = Complex::new(sample * self.window[j], 0.0);
            }

            fft.process(&mut buffer);

            let magnitudes: Vec<f32> = buffer[..num_bins].iter().map(|c| c.norm()).collect();
            frames.push(magnitudes);
        }

        let bin_freqs: Vec<f32> = (0..num_bins)
            .map(|i| i as f32 * sample_rate as f32 / self.fft_size as f32)
            .collect();

        Spectrogram { frames, bin_freqs }
    }
}
