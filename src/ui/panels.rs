use eframe::egui::{self, RichText, ScrollArea, Ui};

use rusty_prism::data::model::{Archetype, FilterKind};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – spectrum and filter selection
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Spectrum");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Archetype selector ----
            ui.strong("Spectrum type");
            let current = state.archetype;
            egui::ComboBox::from_id_salt("archetype")
                .selected_text(current.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for archetype in Archetype::ALL {
                        if ui
                            .selectable_label(current == archetype, archetype.label())
                            .clicked()
                            && current != archetype
                        {
                            state.set_archetype(archetype);
                        }
                    }
                });

            // ---- Filter selector ----
            ui.strong("Filter");
            let current = state.filter;
            egui::ComboBox::from_id_salt("filter")
                .selected_text(current.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for kind in FilterKind::ALL {
                        if ui
                            .selectable_label(current == kind, kind.label())
                            .clicked()
                            && current != kind
                        {
                            state.set_filter(kind);
                        }
                    }
                });
            ui.separator();

            // ---- Noise source ----
            if ui.button("Regenerate").clicked() {
                state.regenerate();
            }
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Seed");
                ui.add(egui::DragValue::new(&mut state.seed));
                if ui.small_button("Apply").clicked() {
                    state.reseed();
                }
            });
            ui.separator();

            // ---- Display options ----
            ui.checkbox(&mut state.show_raw, "Show raw spectrum");
            ui.checkbox(&mut state.minmax_scaling, "Min-Max Scaling");
            ui.separator();

            // ---- Filter constants (read-only) ----
            egui::CollapsingHeader::new(RichText::new("Filter constants").strong())
                .id_salt("filter_constants")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    let fc = &state.config.filter;
                    ui.label(format!("Exponential gain: {}", fc.gain));
                    ui.label(format!(
                        "Gaussian: radius {}, sigma {}",
                        fc.gaussian_radius, fc.gaussian_sigma
                    ));
                    ui.label(format!("Median: radius {}", fc.median_radius));
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Spectrum", |ui: &mut Ui| {
            if ui.button("Regenerate").clicked() {
                state.regenerate();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(analysis) = &state.analysis {
            let span = match analysis.raw.wavelength_span() {
                Some((first, last)) => format!("{first}–{last} nm"),
                None => "empty axis".to_string(),
            };
            ui.label(format!("{} samples, {span}", analysis.raw.len()));
        }

        ui.separator();

        if ui
            .selectable_label(state.minmax_scaling, "Min-Max Scaling")
            .clicked()
        {
            state.minmax_scaling = !state.minmax_scaling;
        }
    });
}
