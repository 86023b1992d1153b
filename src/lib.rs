//! Synthetic spectra and the smoothing filters applied to them.
//!
//! The crate is split into a small numerical core ([`data`]) and the
//! configuration / error types it shares with the viewer and the headless
//! renderer.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rusty_prism::config::SpectralConfig;
//! use rusty_prism::data::analysis::analyze;
//! use rusty_prism::data::model::{Archetype, FilterKind};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let config = SpectralConfig::default();
//! let analysis = analyze(Archetype::Emission, FilterKind::Gaussian, &config, &mut rng).unwrap();
//! assert_eq!(analysis.filtered.len(), analysis.raw.len());
//! ```

pub mod config;
pub mod data;
pub mod error;

pub use error::{Result, SpectralError};
