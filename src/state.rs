use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_prism::config::SpectralConfig;
use rusty_prism::data::analysis::{analyze, SpectrumAnalysis};
use rusty_prism::data::model::{Archetype, FilterKind};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Generator and filter constants.
    pub config: SpectralConfig,

    /// Selected spectrum shape.
    pub archetype: Archetype,

    /// Selected smoother.
    pub filter: FilterKind,

    /// Last generated spectrum and its filtered trace.
    pub analysis: Option<SpectrumAnalysis>,

    /// Draw the unfiltered trace behind the filtered one.
    pub show_raw: bool,

    /// Rescale both traces to [0, 1] before plotting.
    pub minmax_scaling: bool,

    /// Seed entered in the side panel; applied by [`AppState::reseed`].
    pub seed: u64,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Noise source owned by this state; never shared across threads.
    rng: StdRng,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_rng(SpectralConfig::default(), StdRng::from_entropy())
    }
}

impl AppState {
    /// Build a state around an explicit noise source and draw the first spectrum.
    pub fn with_rng(config: SpectralConfig, rng: StdRng) -> Self {
        let mut state = Self {
            config,
            archetype: Archetype::Emission,
            filter: FilterKind::Kalman,
            analysis: None,
            show_raw: true,
            minmax_scaling: false,
            seed: 0,
            status_message: None,
            rng,
        };
        state.regenerate();
        state
    }

    /// Draw a fresh noisy spectrum and filter it.
    pub fn regenerate(&mut self) {
        match analyze(self.archetype, self.filter, &self.config, &mut self.rng) {
            Ok(analysis) => {
                log::info!(
                    "Generated {} spectrum ({} samples), filter: {}",
                    analysis.archetype,
                    analysis.raw.len(),
                    analysis.filter
                );
                self.analysis = Some(analysis);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to generate spectrum: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Switch archetype; a new spectrum is drawn.
    pub fn set_archetype(&mut self, archetype: Archetype) {
        self.archetype = archetype;
        self.regenerate();
    }

    /// Switch filter; the current raw samples are kept.
    ///
    /// On failure the previous selection and trace stay in place.
    pub fn set_filter(&mut self, filter: FilterKind) {
        let Some(analysis) = self.analysis.as_mut() else {
            self.filter = filter;
            self.regenerate();
            return;
        };
        match analysis.refilter(filter, &self.config.filter) {
            Ok(()) => {
                self.filter = filter;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to apply {filter} filter: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// One-line description of what is plotted, for the status bar.
    pub fn summary_line(&self) -> String {
        match &self.analysis {
            Some(a) => format!(
                "{} · {} · residual RMS {:.3} · seed {}",
                a.archetype,
                a.filter,
                a.residual_rms(),
                self.seed
            ),
            None => "No spectrum generated".to_string(),
        }
    }

    /// Restart the noise source from `self.seed` and redraw.
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.regenerate();
    }
}
