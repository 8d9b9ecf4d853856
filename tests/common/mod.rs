//! Shared synthetic-signal helpers for the integration suites.

use std::f64::consts::PI;

/// STFT frame length the detector uses; signals built from bin-center
/// sinusoids of this period are exactly periodic in every analysis frame.
pub const PERIOD: usize = 2048;

/// Small deterministic PRNG so fixtures are reproducible across runs.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Noise-like signal band-limited to `band_hz`, amplitude-modulated into short
/// loud bursts over a quiet bed.
///
/// Built as a sum of random-phase sinusoids on the STFT bin centers below
/// `band_hz`, so analysis frames see no spectral leakage: everything above the
/// band is at the numeric floor. The burst envelope (0.3 s loud every 3 s,
/// raised-cosine ramps, -50 dB bed) gives the detector's threshold statistics
/// the temporal dynamics of program material.
pub fn band_limited_bursts(sample_rate: u32, band_hz: f64, secs: f64, seed: u64) -> Vec<f32> {
    let mut rng = XorShift::new(seed);
    let bin_width = sample_rate as f64 / PERIOD as f64;
    let max_bin = ((band_hz / bin_width).floor() as usize).min(PERIOD / 2);
    assert!(max_bin >= 1, "band too narrow for any bin");

    // One exact period of the sinusoid bank
    let mut period = vec![0.0f64; PERIOD];
    for k in 1..=max_bin {
        // Keep the topmost bin strong regardless of phase luck
        let phase = if k == max_bin {
            PI / 2.0
        } else {
            rng.next_f64() * 2.0 * PI
        };
        for (n, slot) in period.iter_mut().enumerate() {
            *slot += (2.0 * PI * k as f64 * n as f64 / PERIOD as f64 + phase).sin();
        }
    }
    let peak = period.iter().fold(0.0f64, |a, &b| a.max(b.abs()));
    for v in &mut period {
        *v *= 0.6 / peak;
    }

    let total = (sample_rate as f64 * secs) as usize;
    (0..total)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (period[i % PERIOD] * burst_gain(t)) as f32
        })
        .collect()
}

/// Burst envelope: 0.3 s loud every 3 s with 50 ms raised-cosine ramps,
/// -50 dB between bursts.
fn burst_gain(t: f64) -> f64 {
    const QUIET: f64 = 0.003;
    const RAMP: f64 = 0.05;
    const LOUD_LEN: f64 = 0.3;

    let phase = t % 3.0;
    let shape = if phase < RAMP {
        0.5 * (1.0 - (PI * phase / RAMP).cos())
    } else if phase < LOUD_LEN - RAMP {
        1.0
    } else if phase < LOUD_LEN {
        0.5 * (1.0 - (PI * ((LOUD_LEN - phase) / RAMP)).cos())
    } else {
        0.0
    };

    QUIET + (1.0 - QUIET) * shape
}
