use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Borough colour mapping for the map scatter
// ---------------------------------------------------------------------------

/// `n` visually distinct colours from evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.7, 0.5).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Stable borough → colour assignment, one hue per borough.
#[derive(Debug, Clone)]
pub struct BoroughColors {
    mapping: BTreeMap<String, Color32>,
    fallback: Color32,
}

impl BoroughColors {
    /// Assign colours to the given boroughs in order.
    pub fn new(boroughs: &[String]) -> Self {
        let palette = generate_palette(boroughs.len());
        BoroughColors {
            mapping: boroughs.iter().cloned().zip(palette).collect(),
            fallback: Color32::GRAY,
        }
    }

    /// Colour for a borough; grey for anything unmapped.
    pub fn color_for(&self, borough: &str) -> Color32 {
        self.mapping.get(borough).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unmapped_borough_falls_back_to_grey() {
        let colors = BoroughColors::new(&["Bronx".to_string(), "Queens".to_string()]);
        assert_ne!(colors.color_for("Bronx"), colors.color_for("Queens"));
        assert_eq!(colors.color_for("Yonkers"), Color32::GRAY);
    }
}
