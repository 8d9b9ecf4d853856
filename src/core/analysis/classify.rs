// src/core/analysis/classify.rs
//
// Sample-rate-aware verdict classification and quality banding.
//
// Upsampled lossy transcodes show a hard spectral wall at the Nyquist frequency
// of their true source rate. The three regimes let the ladder use absolute Hz
// bounds where a well-known source rate (44.1/48 kHz) is expected, and
// Nyquist-relative fractions for everything above it.

use crate::detection::{QualityBand, Verdict};

/// Nyquist of CD audio; the ladder for 44.1 kHz-class files is expressed as
/// fractions of this rate rather than of the file's own Nyquist.
const CD_NYQUIST_HZ: f32 = 22_050.0;

/// Lower bound of one ladder tier.
#[derive(Debug, Clone, Copy)]
pub enum TierBound {
    /// Absolute frequency in Hz.
    Hz(f32),
    /// Fraction of the file's Nyquist frequency, resolved at classify time.
    NyquistFraction(f32),
}

impl TierBound {
    fn resolve(&self, nyquist: f32) -> f32 {
        match *self {
            TierBound::Hz(hz) => hz,
            TierBound::NyquistFraction(frac) => frac * nyquist,
        }
    }
}

/// A 6-tier ladder: ascending lower bounds, worst verdict first. A cutoff
/// matches the highest tier whose bound it reaches.
pub type VerdictLadder = [(TierBound, Verdict); 6];

/// Ladder for files at exactly 48000 Hz.
pub const LADDER_48K: VerdictLadder = [
    (TierBound::Hz(0.0), Verdict::Fake),
    (TierBound::Hz(20_000.0), Verdict::MostLikelyFake),
    (TierBound::NyquistFraction(0.50), Verdict::MightBeFake),
    (TierBound::NyquistFraction(0.80), Verdict::MightBeAuthentic),
    (TierBound::NyquistFraction(0.90), Verdict::MostLikelyAuthentic),
    (TierBound::NyquistFraction(0.99), Verdict::Authentic),
];

/// Ladder for rates above 48000 Hz (88.2k, 96k, 192k...).
pub const LADDER_HIRES: VerdictLadder = [
    (TierBound::Hz(0.0), Verdict::Fake),
    (TierBound::Hz(22_050.0), Verdict::MostLikelyFake),
    (TierBound::NyquistFraction(0.50), Verdict::MightBeFake),
    (TierBound::NyquistFraction(0.70), Verdict::MightBeAuthentic),
    (TierBound::NyquistFraction(0.90), Verdict::MostLikelyAuthentic),
    (TierBound::NyquistFraction(0.99), Verdict::Authentic),
];

/// Ladder for the 44.1 kHz class (anything not covered above). Bounds are
/// absolute fractions of the CD Nyquist, not of the file's own Nyquist.
pub const LADDER_CD: VerdictLadder = [
    (TierBound::Hz(0.0), Verdict::Fake),
    (TierBound::Hz(CD_NYQUIST_HZ * 0.80), Verdict::MostLikelyFake),
    (TierBound::Hz(CD_NYQUIST_HZ * 0.85), Verdict::MightBeFake),
    (TierBound::Hz(CD_NYQUIST_HZ * 0.90), Verdict::MightBeAuthentic),
    (TierBound::Hz(CD_NYQUIST_HZ * 0.95), Verdict::MostLikelyAuthentic),
    (TierBound::Hz(CD_NYQUIST_HZ * 0.99), Verdict::Authentic),
];

/// Pick the ladder for a sample rate.
pub fn ladder_for_rate(sample_rate: u32) -> &'static VerdictLadder {
    if sample_rate == 48_000 {
        &LADDER_48K
    } else if sample_rate > 48_000 {
        &LADDER_HIRES
    } else {
        &LADDER_CD
    }
}

/// Map a detected cutoff frequency to an authenticity verdict.
///
/// Absent cutoff maps to `Undetermined`, as does a non-finite value (the
/// classification-gap guard: never an error, the batch stays non-fatal).
pub fn classify_cutoff(sample_rate: u32, cutoff_hz: Option<f32>) -> Verdict {
    let cutoff = match cutoff_hz {
        Some(hz) if hz.is_finite() && hz >= 0.0 => hz,
        Some(_) => return Verdict::Undetermined,
        None => return Verdict::Undetermined,
    };

    let nyquist = sample_rate as f32 / 2.0;
    let ladder = ladder_for_rate(sample_rate);

    // Resolve bounds and force them ascending. At 48 kHz the 0.50-Nyquist
    // fraction lands below the 20 kHz absolute bound, which would make the
    // ladder non-monotonic; the running max collapses such dead tiers so a
    // better cutoff can never map to a worse verdict.
    let mut resolved = [(0.0f32, Verdict::Undetermined); 6];
    let mut floor = 0.0f32;
    for (slot, (bound, verdict)) in resolved.iter_mut().zip(ladder.iter()) {
        floor = floor.max(bound.resolve(nyquist));
        *slot = (floor, *verdict);
    }

    for (bound, verdict) in resolved.iter().rev() {
        if cutoff >= *bound {
            return *verdict;
        }
    }

    Verdict::Undetermined
}

/// Band a DR figure: below 8 is heavily compressed, 12 and up is healthy.
pub fn dr_band(dr: f64) -> QualityBand {
    if dr < 8.0 {
        QualityBand::Poor
    } else if dr < 12.0 {
        QualityBand::Moderate
    } else {
        QualityBand::Good
    }
}

/// Band an average block peak in dB.
pub fn peak_band(avg_peak_db: f64) -> QualityBand {
    if avg_peak_db > -2.0 {
        QualityBand::Poor
    } else if avg_peak_db >= -4.0 {
        QualityBand::Moderate
    } else {
        QualityBand::Good
    }
}

/// Band an average block RMS in dB.
pub fn rms_band(avg_rms_db: f64) -> QualityBand {
    if avg_rms_db > -6.0 {
        QualityBand::Poor
    } else if avg_rms_db >= -9.0 {
        QualityBand::Moderate
    } else {
        QualityBand::Good
    }
}

/// Band an integrated loudness in LUFS.
pub fn loudness_band(lufs: f64) -> QualityBand {
    rms_band(lufs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_eight_k_regime_boundaries() {
        let sr = 48_000;
        assert_eq!(classify_cutoff(sr, Some(12_000.0)), Verdict::Fake);
        assert_eq!(classify_cutoff(sr, Some(16_000.0)), Verdict::Fake);
        assert_eq!(classify_cutoff(sr, Some(19_500.0)), Verdict::Fake);
        // The 0.50 and 0.80 Nyquist fractions (12000, 19200) sit below the
        // 20000 absolute bound, so those tiers collapse and 20000 opens
        // directly into MightBeAuthentic, as in the reference table.
        assert_eq!(
            classify_cutoff(sr, Some(20_000.0)),
            Verdict::MightBeAuthentic
        );
        assert_eq!(
            classify_cutoff(sr, Some(0.90 * 24_000.0)),
            Verdict::MostLikelyAuthentic
        );
        assert_eq!(classify_cutoff(sr, Some(23_999.0)), Verdict::Authentic);
    }

    #[test]
    fn hires_regime_boundaries() {
        let sr = 96_000; // nyquist 48000
        assert_eq!(classify_cutoff(sr, Some(21_000.0)), Verdict::Fake);
        assert_eq!(classify_cutoff(sr, Some(22_050.0)), Verdict::MostLikelyFake);
        assert_eq!(classify_cutoff(sr, Some(24_000.0)), Verdict::MightBeFake);
        assert_eq!(
            classify_cutoff(sr, Some(0.70 * 48_000.0)),
            Verdict::MightBeAuthentic
        );
        assert_eq!(
            classify_cutoff(sr, Some(0.90 * 48_000.0)),
            Verdict::MostLikelyAuthentic
        );
        assert_eq!(classify_cutoff(sr, Some(47_600.0)), Verdict::Authentic);
    }

    #[test]
    fn cd_regime_boundaries() {
        let sr = 44_100;
        assert_eq!(classify_cutoff(sr, Some(16_000.0)), Verdict::Fake);
        assert_eq!(classify_cutoff(sr, Some(17_640.0)), Verdict::MostLikelyFake);
        assert_eq!(classify_cutoff(sr, Some(18_800.0)), Verdict::MightBeFake);
        assert_eq!(
            classify_cutoff(sr, Some(19_900.0)),
            Verdict::MightBeAuthentic
        );
        // Content reaching ~21.8 kHz sits just below the 0.99 bound
        assert_eq!(
            classify_cutoff(sr, Some(21_800.0)),
            Verdict::MostLikelyAuthentic
        );
        assert_eq!(classify_cutoff(sr, Some(21_830.0)), Verdict::Authentic);
    }

    #[test]
    fn absent_and_degenerate_cutoffs_are_undetermined() {
        assert_eq!(classify_cutoff(44_100, None), Verdict::Undetermined);
        assert_eq!(
            classify_cutoff(44_100, Some(f32::NAN)),
            Verdict::Undetermined
        );
        assert_eq!(
            classify_cutoff(44_100, Some(f32::INFINITY)),
            Verdict::Undetermined
        );
        assert_eq!(
            classify_cutoff(44_100, Some(-10.0)),
            Verdict::Undetermined
        );
    }

    #[test]
    fn verdict_is_monotonic_in_cutoff_for_each_regime() {
        for &sr in &[44_100u32, 48_000, 96_000, 192_000] {
            let nyquist = sr as f32 / 2.0;
            let mut last_tier = 0u8;
            let mut hz = 100.0f32;
            while hz <= nyquist {
                let verdict = classify_cutoff(sr, Some(hz));
                let tier = verdict
                    .tier()
                    .unwrap_or_else(|| panic!("unexpected Undetermined at {hz} Hz / {sr} Hz"));
                assert!(
                    tier >= last_tier,
                    "verdict regressed at {hz} Hz for rate {sr}"
                );
                last_tier = tier;
                hz += 50.0;
            }
        }
    }

    #[test]
    fn low_rate_files_never_reach_authentic() {
        // A 22.05 kHz file tops out at 11025 Hz, far under the CD ladder bounds.
        assert_eq!(classify_cutoff(22_050, Some(11_025.0)), Verdict::Fake);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(dr_band(5.0), QualityBand::Poor);
        assert_eq!(dr_band(8.0), QualityBand::Moderate);
        assert_eq!(dr_band(12.0), QualityBand::Good);

        assert_eq!(peak_band(-1.0), QualityBand::Poor);
        assert_eq!(peak_band(-3.0), QualityBand::Moderate);
        assert_eq!(peak_band(-6.0), QualityBand::Good);

        assert_eq!(rms_band(-5.0), QualityBand::Poor);
        assert_eq!(rms_band(-7.5), QualityBand::Moderate);
        assert_eq!(rms_band(-12.0), QualityBand::Good);

        assert_eq!(loudness_band(-14.0), QualityBand::Good);
    }
}
