use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use rusty_prism::data::analysis::SpectrumAnalysis;

use crate::color::TraceColors;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectral plot (central panel)
// ---------------------------------------------------------------------------

/// Render the raw and filtered traces in the central panel.
pub fn spectral_plot(ui: &mut Ui, state: &AppState) {
    let analysis = match &state.analysis {
        Some(a) => a,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Pick a spectrum type and press Regenerate");
            });
            return;
        }
    };

    let shown: SpectrumAnalysis = if state.minmax_scaling {
        analysis.normalized()
    } else {
        analysis.clone()
    };
    let colors = TraceColors::for_archetype(shown.archetype);

    Plot::new("spectral_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Wavelength (nm)")
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if state.show_raw {
                let points: PlotPoints = shown.raw.points().collect();
                let line = Line::new(points)
                    .name(format!("{} (raw)", shown.archetype))
                    .color(colors.raw)
                    .width(1.0);
                plot_ui.line(line);
            }

            let points: PlotPoints = shown.filtered_spectrum().points().collect();
            let line = Line::new(points)
                .name(format!("{} – {}", shown.archetype, shown.filter))
                .color(colors.filtered)
                .width(1.5);
            plot_ui.line(line);
        });
}
