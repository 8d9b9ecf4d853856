//! Tunable analysis parameters with documented defaults
//!
//! These constants materially change verdicts, so they live in explicit config
//! structures rather than being buried in the algorithms. The defaults reproduce
//! the reference tuning that the verdict tables were calibrated against.

/// Parameters of the spectral cutoff detector.
#[derive(Debug, Clone)]
pub struct CutoffConfig {
    /// FFT size of the short-time transform. Held constant across files so
    /// cutoff figures are comparable.
    pub fft_size: usize,
    /// Hop between successive analysis frames, in samples.
    pub hop_size: usize,
    /// Savitzky-Golay smoothing window along the frequency axis (odd, >= 5).
    pub smooth_window: usize,
    /// Multiplier on the global standard deviation when deriving the base
    /// threshold: `base = mean + threshold_sigma * stddev`.
    pub threshold_sigma: f64,
    /// High-frequency bias in dB. The per-bin threshold decreases linearly by
    /// this amount toward the top of the spectrum, making high bins easier to
    /// qualify as significant. Known calibrations use 18 and 20.
    pub hf_bias_db: f64,
    /// Dynamic range of the dB spectrogram: magnitudes more than this far below
    /// the global peak are clamped. Bins pinned at the clamp floor never count
    /// as significant.
    pub top_db: f64,
}

impl Default for CutoffConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            hop_size: 512,
            smooth_window: 11,
            threshold_sigma: 1.5,
            hf_bias_db: 18.0,
            top_db: 80.0,
        }
    }
}

/// Parameters of the dynamic range analyzer.
#[derive(Debug, Clone)]
pub struct DynamicsConfig {
    /// Block duration in seconds. Each channel is cut into non-overlapping
    /// blocks of this length; a trailing partial block is discarded.
    pub block_secs: f64,
    /// Fraction of the loudest block RMS values averaged into the DR figure.
    pub loud_fraction: f64,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            block_secs: 3.0,
            loud_fraction: 0.2,
        }
    }
}

/// Complete per-file analysis configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub cutoff: CutoffConfig,
    pub dynamics: DynamicsConfig,
}
