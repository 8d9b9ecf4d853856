//! Savitzky-Golay polynomial smoothing
//!
//! Least-squares quadratic fit over a sliding odd-length window. Interior points
//! use the centered fit; within half a window of either edge the fit over the
//! first/last full window is evaluated at the off-center position, so the output
//! has the same length as the input and no padding artifacts.

/// Smooth `data` with a quadratic Savitzky-Golay filter of odd `window` length.
///
/// Inputs shorter than the window are returned unchanged. The window must be at
/// least 5 so the quadratic fit is overdetermined.
pub fn savgol_smooth(data: &[f32], window: usize) -> Vec<f32> {
    debug_assert!(window % 2 == 1 && window >= 5);
    if data.len() < window {
        return data.to_vec();
    }

    let m = (window / 2) as i64;

    // Power sums of the centered abscissa -m..=m
    let s0 = window as f64;
    let s2: f64 = (-m..=m).map(|i| (i * i) as f64).sum();
    let s4: f64 = (-m..=m).map(|i| ((i * i) * (i * i)) as f64).sum();
    let det = s0 * s4 - s2 * s2;

    let fit_at = |chunk: &[f32], t: f64| -> f32 {
        let mut t0 = 0.0f64;
        let mut t1 = 0.0f64;
        let mut t2 = 0.0f64;
        for (idx, &y) in chunk.iter().enumerate() {
            let x = idx as f64 - m as f64;
            let y = y as f64;
            t0 += y;
            t1 += x * y;
            t2 += x * x * y;
        }
        let a0 = (s4 * t0 - s2 * t2) / det;
        let a1 = t1 / s2;
        let a2 = (s0 * t2 - s2 * t0) / det;
        (a0 + a1 * t + a2 * t * t) as f32
    };

    let n = data.len();
    let half = m as usize;
    let mut out = Vec::with_capacity(n);

    // Leading edge: evaluate the first window's fit off-center
    for j in 0..half {
        out.push(fit_at(&data[..window], j as f64 - m as f64));
    }

    for j in half..n - half {
        out.push(fit_at(&data[j - half..j + half + 1], 0.0));
    }

    // Trailing edge: evaluate the last window's fit off-center
    for j in n - half..n {
        let t = j as f64 - (n - 1 - half) as f64;
        out.push(fit_at(&data[n - window..], t));
    }

    out
}
