//! Parameters for spectrum generation and filtering.
//!
//! Every value defaults to the constant the viewer was designed around; a
//! JSON file may override any subset of them.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectralError};

/// Shape, axis and noise parameters of the synthetic spectra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of samples per spectrum (default: 100).
    pub sample_count: usize,

    /// First wavelength of the axis in nm (default: 300).
    pub start_nm: f64,

    /// Distance between neighbouring samples in nm (default: 7).
    pub step_nm: f64,

    /// Centres of the emission lines in nm.
    pub emission_peaks_nm: Vec<f64>,

    /// Height of each emission line (default: 100).
    pub peak_amplitude: f64,

    /// Variance of the line profile in nm² (default: 100).
    ///
    /// The exponent denominator is `2 * peak_variance`, i.e. 200 for the default.
    pub peak_variance: f64,

    /// Centre of the absorption dip in nm (default: 550).
    pub absorption_center_nm: f64,

    /// Continuum level the dip is cut from (default: 100).
    pub absorption_baseline: f64,

    /// Depth of the dip at its centre (default: 100).
    pub absorption_depth: f64,

    /// Mean level of the interferogram (default: 50).
    pub interferometric_offset: f64,

    /// Fringe amplitude (default: 30).
    pub interferometric_amplitude: f64,

    /// Fringe frequency in rad/nm (default: 0.1).
    pub interferometric_frequency: f64,

    /// Upper bound of the uniform noise added to emission spectra (default: 5).
    pub emission_noise: f64,

    /// Upper bound of the uniform noise added to absorption spectra (default: 5).
    pub absorption_noise: f64,

    /// Upper bound of the uniform noise added to interferograms (default: 3).
    pub interferometric_noise: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_count: 100,
            start_nm: 300.0,
            step_nm: 7.0,
            emission_peaks_nm: vec![350.0, 450.0, 550.0, 650.0, 750.0],
            peak_amplitude: 100.0,
            peak_variance: 100.0,
            absorption_center_nm: 550.0,
            absorption_baseline: 100.0,
            absorption_depth: 100.0,
            interferometric_offset: 50.0,
            interferometric_amplitude: 30.0,
            interferometric_frequency: 0.1,
            emission_noise: 5.0,
            absorption_noise: 5.0,
            interferometric_noise: 3.0,
        }
    }
}

impl GeneratorConfig {
    /// Same shapes and axis, but no noise at all.
    pub fn noiseless() -> Self {
        Self {
            emission_noise: 0.0,
            absorption_noise: 0.0,
            interferometric_noise: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(SpectralError::invalid("sample_count must be at least 1"));
        }
        if !self.start_nm.is_finite() {
            return Err(SpectralError::invalid("start_nm must be finite"));
        }
        if !self.step_nm.is_finite() || self.step_nm == 0.0 {
            return Err(SpectralError::invalid(format!(
                "step_nm must be finite and non-zero, got {}",
                self.step_nm
            )));
        }
        if !self.peak_variance.is_finite() || self.peak_variance <= 0.0 {
            return Err(SpectralError::invalid(format!(
                "peak_variance must be positive, got {}",
                self.peak_variance
            )));
        }
        for (name, bound) in [
            ("emission_noise", self.emission_noise),
            ("absorption_noise", self.absorption_noise),
            ("interferometric_noise", self.interferometric_noise),
        ] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(SpectralError::invalid(format!(
                    "{name} must be a finite, non-negative bound, got {bound}"
                )));
            }
        }
        Ok(())
    }
}

/// Constants of the three smoothing filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Blending gain of the exponential ("Kalman") smoother (default: 0.75).
    pub gain: f64,

    /// Neighbours on each side in the Gaussian kernel (default: 5).
    pub gaussian_radius: usize,

    /// Kernel width in samples (default: 1).
    pub gaussian_sigma: f64,

    /// Neighbours on each side in the median window (default: 2).
    pub median_radius: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gain: 0.75,
            gaussian_radius: 5,
            gaussian_sigma: 1.0,
            median_radius: 2,
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.gain > 0.0 && self.gain <= 1.0) {
            return Err(SpectralError::invalid(format!(
                "gain must lie in (0, 1], got {}",
                self.gain
            )));
        }
        if !self.gaussian_sigma.is_finite() || self.gaussian_sigma <= 0.0 {
            return Err(SpectralError::invalid(format!(
                "gaussian_sigma must be positive, got {}",
                self.gaussian_sigma
            )));
        }
        Ok(())
    }
}

/// Full parameter set handed to [`crate::data::analysis::analyze`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectralConfig {
    pub generator: GeneratorConfig,
    pub filter: FilterConfig,
}

impl SpectralConfig {
    /// Read a (possibly partial) JSON config and validate it.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: SpectralConfig = serde_json::from_str(&text).context("parsing config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.filter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SpectralConfig::default().validate().is_ok());
        assert!(GeneratorConfig::noiseless().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: SpectralConfig =
            serde_json::from_str(r#"{ "filter": { "gain": 0.5 }, "generator": { "sample_count": 12 } }"#)
                .unwrap();
        assert_eq!(config.filter.gain, 0.5);
        assert_eq!(config.filter.median_radius, 2);
        assert_eq!(config.generator.sample_count, 12);
        assert_eq!(config.generator.step_nm, 7.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let generator = GeneratorConfig {
            sample_count: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(generator.validate(), Err(SpectralError::InvalidArgument(_))));

        let generator = GeneratorConfig {
            absorption_noise: -1.0,
            ..GeneratorConfig::default()
        };
        assert!(generator.validate().is_err());

        for gain in [0.0, 1.5, f64::NAN] {
            let filter = FilterConfig {
                gain,
                ..FilterConfig::default()
            };
            assert!(filter.validate().is_err(), "gain {gain} accepted");
        }

        let filter = FilterConfig {
            gaussian_sigma: 0.0,
            ..FilterConfig::default()
        };
        assert!(filter.validate().is_err());
    }
}
