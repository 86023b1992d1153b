/// Data layer: core types, generation, filtering and output.
///
/// Architecture:
/// ```text
///  Archetype + GeneratorConfig + rng
///        │
///        ▼
///   ┌───────────┐
///   │ generator  │  shape + uniform noise → Spectrum
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │  filter    │  FilterKind → smoothed intensities (same length)
///   └───────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ SpectrumAnalysis  │  raw + filtered, ready to plot or export
///   └──────────────────┘
/// ```

pub mod analysis;
pub mod export;
pub mod filter;
pub mod generator;
pub mod model;
