use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Compliance flag colours
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Red (`#FF0000`) for non-compliant rows, green (`#008000`) for compliant ones.
pub fn flag_color(compliant: bool) -> Color32 {
    if compliant {
        hsl_to_color32(120.0, 1.0, 0.25)
    } else {
        hsl_to_color32(0.0, 1.0, 0.5)
    }
}

/// Legend entries (label → colour) in flag order 0, 1.
pub fn legend_entries() -> [(String, Color32); 2] {
    [false, true].map(|compliant| {
        (
            format!("{} = {}", crate::data::model::RULE_COLUMN, u8::from(compliant)),
            flag_color(compliant),
        )
    })
}
