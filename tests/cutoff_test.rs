//! End-to-end cutoff detection on synthetic signals with known bandwidth.

mod common;

use flacaudit::core::analysis::classify::classify_cutoff;
use flacaudit::core::analysis::CutoffDetector;
use flacaudit::detection::Verdict;
use flacaudit::CutoffConfig;

use common::band_limited_bursts;

#[test]
fn full_band_noise_at_48k_reads_as_authentic() {
    let samples = band_limited_bursts(48000, 24000.0, 30.0, 0x5eed_0001);
    let detector = CutoffDetector::new(CutoffConfig::default());

    let cutoff = detector.detect(&samples, 48000).expect("cutoff expected");
    assert!(
        (23900.0..=24000.0).contains(&cutoff),
        "cutoff {cutoff} should reach Nyquist"
    );
    assert_eq!(classify_cutoff(48000, Some(cutoff)), Verdict::Authentic);
}

#[test]
fn noise_band_limited_to_16k_at_48k_reads_as_fake() {
    let samples = band_limited_bursts(48000, 16000.0, 30.0, 0x5eed_0002);
    let detector = CutoffDetector::new(CutoffConfig::default());

    let cutoff = detector.detect(&samples, 48000).expect("cutoff expected");
    assert!(
        (15700.0..=16300.0).contains(&cutoff),
        "cutoff {cutoff} should sit at the 16 kHz shelf"
    );
    assert_eq!(classify_cutoff(48000, Some(cutoff)), Verdict::Fake);
}

#[test]
fn near_nyquist_band_at_cd_rate_reads_as_authentic_tier() {
    let samples = band_limited_bursts(44100, 21800.0, 30.0, 0x5eed_0003);
    let detector = CutoffDetector::new(CutoffConfig::default());

    let cutoff = detector.detect(&samples, 44100).expect("cutoff expected");
    assert!(
        (21500.0..=22050.0).contains(&cutoff),
        "cutoff {cutoff} should sit just below Nyquist"
    );
    let verdict = classify_cutoff(44100, Some(cutoff));
    assert!(
        matches!(verdict, Verdict::MostLikelyAuthentic | Verdict::Authentic),
        "unexpected verdict {verdict:?} for cutoff {cutoff}"
    );
}

#[test]
fn pure_tone_cutoff_lands_just_above_the_tone() {
    // Tone on an exact analysis-bin center so the estimate is limited only by
    // the smoothing spread, not by leakage.
    let bin_width = 48000.0 / common::PERIOD as f64;
    let freq = (427.0 * bin_width) as f32;
    let samples: Vec<f32> = (0..48000 * 20)
        .map(|n| {
            let t = n as f64 / 48000.0;
            (0.5 * (2.0 * std::f64::consts::PI * freq as f64 * t).sin()) as f32
        })
        .collect();
    let detector = CutoffDetector::new(CutoffConfig::default());

    let cutoff = detector.detect(&samples, 48000).expect("cutoff expected");
    // Half the length-11 smoothing window plus the Hann main lobe: 7 bins
    let spread = 7.0 * bin_width as f32;
    assert!(
        cutoff >= freq - 1.0 && cutoff <= freq + spread,
        "cutoff {cutoff} should land within {spread} Hz above {freq}"
    );
}

#[test]
fn detection_is_deterministic_across_runs() {
    let samples = band_limited_bursts(48000, 16000.0, 12.0, 0x5eed_0004);
    let detector = CutoffDetector::new(CutoffConfig::default());

    let first = detector.detect(&samples, 48000);
    let second = detector.detect(&samples, 48000);
    assert_eq!(first, second);
}

#[test]
fn digital_silence_has_no_cutoff() {
    let samples = vec![0.0f32; 48000 * 5];
    let detector = CutoffDetector::new(CutoffConfig::default());

    assert_eq!(detector.detect(&samples, 48000), None);
    assert_eq!(classify_cutoff(48000, None), Verdict::Undetermined);
}
