use super::model::FilterKind;
use crate::config::FilterConfig;
use crate::error::{Result, SpectralError};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run the selected filter over `samples`.
///
/// The output always has `samples.len()` elements. [`FilterKind::None`]
/// returns a copy of the input (empty included); every other kind needs at
/// least one sample.
pub fn apply(kind: FilterKind, samples: &[f64], config: &FilterConfig) -> Result<Vec<f64>> {
    if kind != FilterKind::None {
        if samples.is_empty() {
            return Err(SpectralError::invalid(format!(
                "{kind} filter needs at least one sample"
            )));
        }
        config.validate()?;
    }

    let filtered = match kind {
        FilterKind::Kalman => exponential(samples, config.gain),
        FilterKind::Gaussian => gaussian(samples, config.gaussian_radius, config.gaussian_sigma),
        FilterKind::Median => median(samples, config.median_radius),
        FilterKind::None => samples.to_vec(),
    };
    log::debug!("applied {kind} filter to {} samples", samples.len());
    Ok(filtered)
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// First-order exponential smoother:
/// `y[0] = x[0]`, `y[i] = y[i-1] + gain * (x[i] - y[i-1])`.
pub fn exponential(samples: &[f64], gain: f64) -> Vec<f64> {
    let mut filtered = Vec::with_capacity(samples.len());
    let mut estimate = match samples.first() {
        Some(&first) => first,
        None => return filtered,
    };
    filtered.push(estimate);
    for &x in &samples[1..] {
        estimate += gain * (x - estimate);
        filtered.push(estimate);
    }
    filtered
}

/// Normalised Gaussian-weighted average over `radius` neighbours each side.
///
/// Weights depend on index distance only. Windows are truncated at the
/// edges and renormalised over what remains, so a radius at or beyond the
/// sequence length simply covers the whole input.
pub fn gaussian(samples: &[f64], radius: usize, sigma: f64) -> Vec<f64> {
    let n = samples.len();
    let denom = 2.0 * sigma * sigma;
    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(radius);
            let hi = n.min(i.saturating_add(radius).saturating_add(1));
            let (sum, weight_sum) = (lo..hi).fold((0.0, 0.0), |(sum, wsum), j| {
                let d = i.abs_diff(j) as f64;
                let weight = (-(d * d) / denom).exp();
                (sum + weight * samples[j], wsum + weight)
            });
            // The centre weight is exp(0) = 1, so weight_sum >= 1.
            sum / weight_sum
        })
        .collect()
}

/// Sliding median over `[i - radius, i + radius]`, truncated at the edges
/// without padding. Even-length edge windows take the upper of the two
/// middle elements (index `len / 2` after sorting).
pub fn median(samples: &[f64], radius: usize) -> Vec<f64> {
    let n = samples.len();
    let mut window = Vec::with_capacity(n.min(radius.saturating_mul(2).saturating_add(1)));
    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(radius);
            let hi = n.min(i.saturating_add(radius).saturating_add(1));
            window.clear();
            window.extend_from_slice(&samples[lo..hi]);
            window.sort_by(f64::total_cmp);
            window[window.len() / 2]
        })
        .collect()
}
