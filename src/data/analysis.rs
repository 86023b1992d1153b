use rand::Rng;
use serde::Serialize;

use super::filter;
use super::generator;
use super::model::{Archetype, FilterKind, Spectrum};
use crate::config::{FilterConfig, SpectralConfig};
use crate::error::Result;

/// A raw spectrum together with its filtered intensities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumAnalysis {
    pub archetype: Archetype,
    pub filter: FilterKind,
    pub raw: Spectrum,
    /// Same length as `raw.intensities`.
    pub filtered: Vec<f64>,
}

/// Draw a fresh spectrum and run it through the selected filter.
pub fn analyze<R: Rng + ?Sized>(
    archetype: Archetype,
    filter: FilterKind,
    config: &SpectralConfig,
    rng: &mut R,
) -> Result<SpectrumAnalysis> {
    let raw = generator::generate(archetype, &config.generator, rng)?;
    let filtered = filter::apply(filter, &raw.intensities, &config.filter)?;
    Ok(SpectrumAnalysis {
        archetype,
        filter,
        raw,
        filtered,
    })
}

impl SpectrumAnalysis {
    /// Re-run a (possibly different) filter over the same raw samples.
    pub fn refilter(&mut self, kind: FilterKind, config: &FilterConfig) -> Result<()> {
        self.filtered = filter::apply(kind, &self.raw.intensities, config)?;
        self.filter = kind;
        Ok(())
    }

    /// Filtered intensities on the raw wavelength axis.
    pub fn filtered_spectrum(&self) -> Spectrum {
        Spectrum {
            wavelengths: self.raw.wavelengths.clone(),
            intensities: self.filtered.clone(),
        }
    }

    /// `raw - filtered` per sample: what the filter removed.
    pub fn residuals(&self) -> Vec<f64> {
        self.raw
            .intensities
            .iter()
            .zip(&self.filtered)
            .map(|(r, f)| r - f)
            .collect()
    }

    /// Root mean square of [`SpectrumAnalysis::residuals`]; 0 for an empty trace.
    pub fn residual_rms(&self) -> f64 {
        let residuals = self.residuals();
        if residuals.is_empty() {
            return 0.0;
        }
        let mean_square = residuals.iter().map(|r| r * r).sum::<f64>() / residuals.len() as f64;
        mean_square.sqrt()
    }

    /// Restrict both traces to `[min_nm, max_nm]`.
    pub fn within_range(&self, min_nm: f64, max_nm: f64) -> SpectrumAnalysis {
        let raw = self.raw.within_range(min_nm, max_nm);
        let filtered = self.filtered_spectrum().within_range(min_nm, max_nm).intensities;
        SpectrumAnalysis {
            archetype: self.archetype,
            filter: self.filter,
            raw,
            filtered,
        }
    }

    /// Apply [`min_max_scaled`] to both traces independently.
    pub fn normalized(&self) -> SpectrumAnalysis {
        SpectrumAnalysis {
            archetype: self.archetype,
            filter: self.filter,
            raw: Spectrum {
                wavelengths: self.raw.wavelengths.clone(),
                intensities: min_max_scaled(&self.raw.intensities),
            },
            filtered: min_max_scaled(&self.filtered),
        }
    }
}

/// Rescale to `[0, 1]`. A flat (or empty) trace maps to zeros.
pub fn min_max_scaled(values: &[f64]) -> Vec<f64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if !range.is_finite() || range.abs() < f64::EPSILON {
        vec![0.0; values.len()]
    } else {
        values.iter().map(|&v| (v - min) / range).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn refilter_keeps_raw_samples() {
        let config = SpectralConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut analysis = analyze(Archetype::Emission, FilterKind::None, &config, &mut rng).unwrap();
        assert_eq!(analysis.filtered, analysis.raw.intensities);

        let raw_before = analysis.raw.clone();
        analysis.refilter(FilterKind::Median, &config.filter).unwrap();
        assert_eq!(analysis.raw, raw_before);
        assert_eq!(analysis.filter, FilterKind::Median);
        assert_ne!(analysis.filtered, analysis.raw.intensities);
    }

    #[test]
    fn residuals_vanish_without_filter() {
        let config = SpectralConfig::default();
        let analysis = analyze(
            Archetype::Interferometric,
            FilterKind::None,
            &config,
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        assert!(analysis.residuals().iter().all(|&r| r == 0.0));
        assert_eq!(analysis.residual_rms(), 0.0);
    }

    #[test]
    fn residual_rms_of_known_traces() {
        let analysis = SpectrumAnalysis {
            archetype: Archetype::Emission,
            filter: FilterKind::Median,
            raw: Spectrum {
                wavelengths: vec![300.0, 307.0],
                intensities: vec![3.0, -1.0],
            },
            filtered: vec![0.0, 3.0],
        };
        // residuals 3 and -4 -> sqrt((9 + 16) / 2)
        assert!((analysis.residual_rms() - 12.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn min_max_scaling() {
        assert_eq!(min_max_scaled(&[2.0, 4.0, 3.0]), vec![0.0, 1.0, 0.5]);
        assert_eq!(min_max_scaled(&[5.0, 5.0]), vec![0.0, 0.0]);
        assert!(min_max_scaled(&[]).is_empty());
    }

    #[test]
    fn range_crop_keeps_traces_aligned() {
        let config = SpectralConfig::default();
        let analysis = analyze(
            Archetype::Absorption,
            FilterKind::Gaussian,
            &config,
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        let cropped = analysis.within_range(500.0, 600.0);
        assert_eq!(cropped.raw.len(), cropped.filtered.len());
        assert!(cropped.raw.wavelengths.iter().all(|w| (500.0..=600.0).contains(w)));
        // 503, 510, ..., 594
        assert_eq!(cropped.raw.len(), 14);
    }
}
