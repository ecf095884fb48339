use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Brand colours
// ---------------------------------------------------------------------------

/// Colour used for brands outside the canonical set.
pub const DEFAULT_BRAND_COLOR: Color32 = Color32::from_rgb(0xB0, 0xBE, 0xC5);

/// Fixed colour per canonical brand; anything else gets the default grey.
pub fn brand_color(brand: &str) -> Color32 {
    match brand {
        "Wilson" => Color32::from_rgb(0xCF, 0x10, 0x2D),
        "Head" => Color32::from_rgb(0xE0, 0xE0, 0xE0),
        "Babolat" => Color32::from_rgb(0x12, 0x93, 0xE5),
        "Yonex" => Color32::from_rgb(0x00, 0xBC, 0x10),
        "Tecnifibre" => Color32::from_rgb(0x25, 0x32, 0x81),
        "Dunlop" => Color32::from_rgb(0xB5, 0xFB, 0x4C),
        "Pacific" => Color32::from_rgb(0xEB, 0x49, 0x01),
        "ProKennex" => Color32::from_rgb(0x26, 0xA1, 0xA8),
        "Volkl" => Color32::from_rgb(0xFD, 0xF0, 0x01),
        "Gamma" => Color32::from_rgb(0x53, 0x53, 0x53),
        "Genesis" => Color32::from_rgb(0x6C, 0x21, 0xA6),
        "Prince" => Color32::from_rgb(0xFF, 0x45, 0xF9),
        _ => DEFAULT_BRAND_COLOR,
    }
}

/// Black or white, whichever reads better on the given background
/// (YIQ luma threshold).
pub fn text_color_on(bg: Color32) -> Color32 {
    let yiq =
        (bg.r() as u32 * 299 + bg.g() as u32 * 587 + bg.b() as u32 * 114) / 1000;
    if yiq >= 128 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_brand_gets_default_colour() {
        assert_eq!(brand_color("Acme"), DEFAULT_BRAND_COLOR);
        assert_ne!(brand_color("Wilson"), DEFAULT_BRAND_COLOR);
    }

    #[test]
    fn contrast_flips_with_background_luma() {
        assert_eq!(text_color_on(Color32::WHITE), Color32::BLACK);
        assert_eq!(text_color_on(Color32::BLACK), Color32::WHITE);
        // Volkl yellow is light, Tecnifibre navy is dark.
        assert_eq!(text_color_on(brand_color("Volkl")), Color32::BLACK);
        assert_eq!(text_color_on(brand_color("Tecnifibre")), Color32::WHITE);
    }
}
