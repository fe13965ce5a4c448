// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the gallery UI.
//!
//! A trimmed token set in the W3C Design Tokens spirit: base palette,
//! spacing scale on an 8px grid, and typography sizes. Keep ratios intact
//! when adjusting (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    /// Card background shown behind images while they cover the tile.
    pub const CARD_BACKGROUND: Color = Color::from_rgb(0.8, 0.8, 0.8);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 20.0; // 2.5 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const SM: f32 = 12.0;
    pub const BASE: f32 = 14.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
    }

    #[test]
    fn card_background_is_light_gray() {
        assert_ne!(palette::CARD_BACKGROUND, palette::BLACK);
        assert_ne!(palette::CARD_BACKGROUND, palette::WHITE);
    }
}
