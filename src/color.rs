use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hsl_to_color32(hue_offset + (i as f32 / n as f32) * 360.0, 0.65, 0.5))
        .collect()
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Fixed colours for the dashboard charts.
#[derive(Debug, Clone)]
pub struct ChartColors {
    pub trend: Color32,
    pub hourly: Color32,
    pub scatter: Color32,
    /// One colour per `weathersit` code 1..=4.
    weather: Vec<Color32>,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            trend: hsl_to_color32(210.0, 0.65, 0.5),
            hourly: hsl_to_color32(25.0, 0.8, 0.5),
            scatter: hsl_to_color32(150.0, 0.55, 0.45),
            weather: generate_palette(4, 200.0),
        }
    }
}

impl ChartColors {
    /// Colour of a weather situation; unknown codes are grey.
    pub fn weather(&self, code: u8) -> Color32 {
        usize::from(code)
            .checked_sub(1)
            .and_then(|i| self.weather.get(i))
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size_and_distinct() {
        let colors = generate_palette(4, 0.0);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0, 0.0).is_empty());
    }

    #[test]
    fn test_weather_colors() {
        let colors = ChartColors::default();
        assert_ne!(colors.weather(1), colors.weather(2));
        assert_eq!(colors.weather(0), Color32::GRAY);
        assert_eq!(colors.weather(5), Color32::GRAY);
    }
}
