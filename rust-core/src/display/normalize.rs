//! Normalizer and binner
//!
//! Maps arbitrary-range sequences onto the small integer ranges a display or
//! DAC accepts, and thins long sequences down to one value per column.

/// Linearly rescale `values` from [min, max] onto [target_min, target_max]
///
/// `out[i] = round((v - min) / (max - min) * (target_max - target_min)) + target_min`
///
/// A flat sequence (max == min) has no defined scale; every element then maps
/// to `target_min`, the bottom of the display. Results never leave the target
/// range.
pub fn normalize(values: &[f64], target_min: i32, target_max: i32) -> Vec<i32> {
    if values.is_empty() {
        return Vec::new();
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return vec![target_min; values.len()];
    }

    // Kept in f64: target_max - target_min can exceed i32
    let base = target_min as f64;
    let span = target_max as f64 - base;
    let lo = target_min.min(target_max) as f64;
    let hi = target_min.max(target_max) as f64;

    values
        .iter()
        .map(|&v| {
            let scaled = ((v - min) / range * span).round() + base;
            scaled.clamp(lo, hi) as i32
        })
        .collect()
}

/// Quantize onto `levels` steps 0..levels-1 by truncation
///
/// `out[i] = trunc((v - min) / (max - min) * (levels - 1))`, so only the
/// maximum itself reaches the top step. A flat sequence sits on step 0.
pub fn quantize(values: &[f64], levels: usize) -> Vec<usize> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    scale_to_range(values, min, max, levels)
}

/// Downsample to at most `bucket_count` values, one per stride
///
/// Stride is `max(1, len / bucket_count)`; the first sample of each stride is kept.
/// Fewer values come back when the input is shorter than `bucket_count`.
pub fn bin_reduce(values: &[f64], bucket_count: usize) -> Vec<f64> {
    if bucket_count == 0 {
        return Vec::new();
    }

    let stride = (values.len() / bucket_count).max(1);
    values
        .iter()
        .step_by(stride)
        .take(bucket_count)
        .copied()
        .collect()
}

/// Bar heights relative to the largest value, truncated to [0, height-1]
///
/// An all-zero sequence uses a peak of 1 so every bar stays at zero.
pub fn scale_to_peak(values: &[f64], height: usize) -> Vec<usize> {
    let peak = values.iter().copied().fold(0.0_f64, f64::max);
    let peak = if peak > 0.0 { peak } else { 1.0 };

    scale_to_range(values, 0.0, peak, height)
}

/// Heights for samples on a fixed full scale (e.g. 4095 for a 12-bit ADC)
pub fn scale_to_full_scale(values: &[f64], full_scale: f64, height: usize) -> Vec<usize> {
    scale_to_range(values, 0.0, full_scale, height)
}

/// Heights for values on a known range [lo, hi], truncated to [0, height-1]
pub fn scale_to_range(values: &[f64], lo: f64, hi: f64, height: usize) -> Vec<usize> {
    let top = height.saturating_sub(1);
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() {
        return vec![0; values.len()];
    }

    values
        .iter()
        .map(|&v| {
            let h = ((v - lo) / span * top as f64).trunc();
            if h <= 0.0 {
                0
            } else {
                (h as usize).min(top)
            }
        })
        .collect()
}
