use rand::Rng;

use super::model::{Archetype, Spectrum};
use crate::config::GeneratorConfig;
use crate::error::Result;

/// Wavelengths `start + step * i` for `i` in `0..sample_count`.
pub fn wavelength_axis(config: &GeneratorConfig) -> Vec<f64> {
    (0..config.sample_count)
        .map(|i| config.start_nm + config.step_nm * i as f64)
        .collect()
}

fn line_profile(w: f64, center: f64, variance: f64) -> f64 {
    (-(w - center).powi(2) / (2.0 * variance)).exp()
}

/// Noise-free intensity of `archetype` at wavelength `w`.
pub fn shape(archetype: Archetype, w: f64, config: &GeneratorConfig) -> f64 {
    match archetype {
        Archetype::Emission => config
            .emission_peaks_nm
            .iter()
            .map(|&peak| config.peak_amplitude * line_profile(w, peak, config.peak_variance))
            .sum(),
        Archetype::Absorption => {
            config.absorption_baseline
                - config.absorption_depth
                    * line_profile(w, config.absorption_center_nm, config.peak_variance)
        }
        Archetype::Interferometric => {
            config.interferometric_offset
                + config.interferometric_amplitude * (config.interferometric_frequency * w).sin()
        }
    }
}

fn noise_bound(archetype: Archetype, config: &GeneratorConfig) -> f64 {
    match archetype {
        Archetype::Emission => config.emission_noise,
        Archetype::Absorption => config.absorption_noise,
        Archetype::Interferometric => config.interferometric_noise,
    }
}

/// Draw a fresh spectrum of the given archetype.
///
/// Each sample is `shape(w) + bound * u` with `u` uniform in `[0, 1)` taken
/// from `rng`, so the noise always lies in `[0, bound)`. Pass a seeded rng for
/// reproducible output, or `rand::rngs::mock::StepRng::new(0, 0)` for none.
pub fn generate<R: Rng + ?Sized>(
    archetype: Archetype,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Spectrum> {
    config.validate()?;

    let bound = noise_bound(archetype, config);
    let wavelengths = wavelength_axis(config);
    let intensities = wavelengths
        .iter()
        .map(|&w| shape(archetype, w, config) + bound * rng.gen::<f64>())
        .collect();

    log::debug!(
        "generated {archetype} spectrum: {} samples from {} nm, noise < {bound}",
        config.sample_count,
        config.start_nm
    );

    Ok(Spectrum {
        wavelengths,
        intensities,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn silent() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn axis_is_arithmetic_progression() {
        let axis = wavelength_axis(&GeneratorConfig::default());
        assert_eq!(axis.len(), 100);
        assert_eq!(axis[0], 300.0);
        assert_eq!(axis[1], 307.0);
        assert_eq!(axis[99], 993.0);
    }

    #[test]
    fn zero_noise_source_yields_pure_shape() {
        let config = GeneratorConfig::default();
        for archetype in Archetype::ALL {
            let sp = generate(archetype, &config, &mut silent()).unwrap();
            for (w, y) in sp.wavelengths.iter().zip(&sp.intensities) {
                assert_eq!(*y, shape(archetype, *w, &config));
            }
        }
    }

    #[test]
    fn emission_at_550_is_sum_of_lines() {
        // 5 nm steps so that 550 nm is on the axis (index 50).
        let config = GeneratorConfig {
            step_nm: 5.0,
            ..GeneratorConfig::default()
        };
        let sp = generate(Archetype::Emission, &config, &mut silent()).unwrap();
        assert_eq!(sp.wavelengths[50], 550.0);

        let expected: f64 = [350.0, 450.0, 550.0, 650.0, 750.0]
            .iter()
            .map(|p: &f64| 100.0 * (-(550.0 - p).powi(2) / 200.0).exp())
            .sum();
        assert!((sp.intensities[50] - expected).abs() < 1e-9);
        assert!((expected - 100.0).abs() < 1e-9);
    }

    #[test]
    fn absorption_dip_reaches_zero_at_center() {
        let config = GeneratorConfig::default();
        assert!(shape(Archetype::Absorption, 550.0, &config).abs() < 1e-12);
    }

    #[test]
    fn interferogram_starts_at_offset_plus_sine() {
        let sp = generate(
            Archetype::Interferometric,
            &GeneratorConfig::default(),
            &mut silent(),
        )
        .unwrap();
        assert!((sp.intensities[0] - (50.0 + 30.0 * 30.0_f64.sin())).abs() < 1e-12);
    }

    #[test]
    fn noise_stays_within_bound() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for archetype in Archetype::ALL {
            let bound = noise_bound(archetype, &config);
            let sp = generate(archetype, &config, &mut rng).unwrap();
            for (w, y) in sp.wavelengths.iter().zip(&sp.intensities) {
                let noise = y - shape(archetype, *w, &config);
                assert!((-1e-9..bound).contains(&noise), "{archetype}: noise {noise}");
            }
        }
    }

    #[test]
    fn same_seed_same_spectrum_fresh_draws_differ() {
        let config = GeneratorConfig::default();
        let a = generate(Archetype::Emission, &config, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generate(Archetype::Emission, &config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);

        let mut rng = StdRng::seed_from_u64(3);
        let first = generate(Archetype::Emission, &config, &mut rng).unwrap();
        let second = generate(Archetype::Emission, &config, &mut rng).unwrap();
        assert_ne!(first.intensities, second.intensities);
    }

    #[test]
    fn single_sample_config_is_supported() {
        let config = GeneratorConfig {
            sample_count: 1,
            ..GeneratorConfig::default()
        };
        let sp = generate(Archetype::Absorption, &config, &mut silent()).unwrap();
        assert_eq!(sp.len(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GeneratorConfig {
            sample_count: 0,
            ..GeneratorConfig::default()
        };
        assert!(generate(Archetype::Emission, &config, &mut silent()).is_err());
    }
}
