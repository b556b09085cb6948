use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: industry → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct industry to a distinct colour.
#[derive(Debug, Clone, Default)]
pub struct IndustryColors {
    mapping: BTreeMap<String, Color32>,
}

impl IndustryColors {
    /// Build a colour map over the given industries (first-appearance order,
    /// so colours stay stable across renders).
    pub fn new(industries: &[String]) -> Self {
        let palette = generate_palette(industries.len());
        let mapping: BTreeMap<String, Color32> = industries
            .iter()
            .zip(palette.into_iter())
            .map(|(industry, c): (&String, Color32)| (industry.clone(), c))
            .collect();

        IndustryColors { mapping }
    }

    /// Look up the colour for an industry; unknown industries render grey.
    pub fn color_for(&self, industry: &str) -> Color32 {
        self.mapping.get(industry).copied().unwrap_or(Color32::GRAY)
    }
}
