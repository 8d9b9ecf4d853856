//! Block statistics and dB helpers

/// Peak absolute amplitude of a slice.
pub fn peak_amplitude(samples: &[f32]) -> f64 {
    samples.iter().map(|s| s.abs() as f64).fold(0.0, f64::max)
}

/// Root mean square of a slice.
pub fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Quadratic mean of a slice of values.
pub fn quadratic_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| v * v).sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Arithmetic mean of a slice of values.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Convert a linear amplitude to dB relative to full scale.
pub fn amplitude_to_db(amplitude: f64) -> f64 {
    20.0 * amplitude.log10()
}

/// Mean and standard deviation of an f32 surface, accumulated in f64.
pub fn mean_stddev(values: impl Iterator<Item = f32> + Clone) -> (f64, f64) {
    let mut count = 0usize;
    let mut sum = 0.0f64;
    for v in values.clone() {
        sum += v as f64;
        count += 1;
    }
    if count == 0 {
        return (0.0, 0.0);
    }
    let mean = sum / count as f64;

    let mut sq_dev = 0.0f64;
    for v in values {
        let d = v as f64 - mean;
        sq_dev += d * d;
    }
    (mean, (sq_dev / count as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_of_square_wave_is_amplitude() {
        let samples = vec![0.5, -0.5, 0.5, -0.5];
        assert!((rms(&samples) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn peak_tracks_largest_magnitude() {
        assert!((peak_amplitude(&[0.1, -0.9, 0.3]) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn full_scale_is_zero_db() {
        assert!(amplitude_to_db(1.0).abs() < 1e-9);
        assert!((amplitude_to_db(0.5) + 6.0206).abs() < 1e-3);
    }

    #[test]
    fn mean_stddev_of_constant_surface() {
        let values = vec![2.0f32; 100];
        let (mean, stddev) = mean_stddev(values.iter().copied());
        assert!((mean - 2.0).abs() < 1e-9);
        assert!(stddev < 1e-9);
    }
}
