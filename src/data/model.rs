use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpectralError;

// ---------------------------------------------------------------------------
// Archetype – which synthetic spectrum to draw
// ---------------------------------------------------------------------------

/// The fixed synthetic spectrum shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Five Gaussian emission lines over a dark background.
    Emission,
    /// A single inverted Gaussian dip in a flat continuum.
    Absorption,
    /// A sinusoidal fringe pattern.
    Interferometric,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [
        Archetype::Emission,
        Archetype::Absorption,
        Archetype::Interferometric,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Archetype::Emission => "Emission",
            Archetype::Absorption => "Absorption",
            Archetype::Interferometric => "Interferometric",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Archetype {
    type Err = SpectralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emission" => Ok(Archetype::Emission),
            "absorption" => Ok(Archetype::Absorption),
            "interferometric" => Ok(Archetype::Interferometric),
            other => Err(SpectralError::invalid(format!(
                "unknown spectrum archetype '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterKind – which smoother to run
// ---------------------------------------------------------------------------

/// Selector for the filter bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// First-order exponential smoothing. Historically labelled "Kalman";
    /// there is no covariance update.
    Kalman,
    /// Normalised Gaussian kernel over sample indices.
    Gaussian,
    /// Sliding-window median with truncated edge windows.
    Median,
    /// Identity.
    None,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Kalman,
        FilterKind::Gaussian,
        FilterKind::Median,
        FilterKind::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Kalman => "Kalman (exponential)",
            FilterKind::Gaussian => "Gaussian",
            FilterKind::Median => "Median",
            FilterKind::None => "No filter",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = SpectralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kalman" | "exponential" => Ok(FilterKind::Kalman),
            "gaussian" => Ok(FilterKind::Gaussian),
            "median" => Ok(FilterKind::Median),
            "none" | "off" => Ok(FilterKind::None),
            other => Err(SpectralError::invalid(format!("unknown filter '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Spectrum – intensities on a wavelength axis
// ---------------------------------------------------------------------------

/// One spectrum: intensity samples aligned to a wavelength axis in nm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Wavelength axis (x), in nm.
    pub wavelengths: Vec<f64>,
    /// Intensity axis (y) – same length as `wavelengths`.
    pub intensities: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    /// `[wavelength, intensity]` pairs, the shape plot widgets consume.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.wavelengths
            .iter()
            .zip(&self.intensities)
            .map(|(&x, &y)| [x, y])
    }

    /// First and last wavelength of the axis, if any.
    pub fn wavelength_span(&self) -> Option<(f64, f64)> {
        Some((*self.wavelengths.first()?, *self.wavelengths.last()?))
    }

    /// Keep only the samples whose wavelength lies in `[min_nm, max_nm]`.
    pub fn within_range(&self, min_nm: f64, max_nm: f64) -> Spectrum {
        let (wavelengths, intensities) = self
            .points()
            .filter(|[x, _]| (min_nm..=max_nm).contains(x))
            .map(|[x, y]| (x, y))
            .unzip();
        Spectrum {
            wavelengths,
            intensities,
        }
    }
}
