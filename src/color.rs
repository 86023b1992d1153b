use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use rusty_prism::data::model::Archetype;

// ---------------------------------------------------------------------------
// Trace colours per archetype
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

fn hue(archetype: Archetype) -> f32 {
    match archetype {
        Archetype::Emission => 350.0,
        Archetype::Absorption => 205.0,
        Archetype::Interferometric => 175.0,
    }
}

/// Colours for the filtered and the raw trace of one spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceColors {
    pub filtered: Color32,
    pub raw: Color32,
}

impl TraceColors {
    pub fn for_archetype(archetype: Archetype) -> Self {
        let h = hue(archetype);
        TraceColors {
            filtered: hsl_to_color32(h, 0.75, 0.55),
            raw: hsl_to_color32(h, 0.25, 0.75),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetypes_get_distinct_colours() {
        let colors: Vec<Color32> = Archetype::ALL
            .iter()
            .map(|&a| TraceColors::for_archetype(a).filtered)
            .collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn raw_trace_is_dimmer_than_filtered() {
        let c = TraceColors::for_archetype(Archetype::Emission);
        assert_ne!(c.raw, c.filtered);
        assert!(c.filtered.r() > c.filtered.b());
    }
}
