// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the showcase chrome and the component previews.
//!
//! Every size, color and duration used by a widget comes from one of these
//! scales. The token browser screen lists them through [`listing`].
//!
//! ```
//! use motion_kit::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert_eq!(spacing::MD, 16.0);
//! # let _ = scrim;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand scale
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);
    pub const PRIMARY_800: Color = Color::from_rgb(0.1, 0.3, 0.6);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Toast and panel backgrounds.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (4px steps)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Component widths
    pub const SIDEBAR_WIDTH: f32 = 290.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CARD_WIDTH: f32 = 360.0;
    pub const MODAL_WIDTH: f32 = 420.0;

    /// Control height on touch devices (44x44 hit area).
    pub const TOUCH_TARGET: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes, largest first.

    /// Screen headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Preview card headers.
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    /// Body text when the context asks for large fonts.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Hints and code snippets.
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accent stripe.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion Scale
// ============================================================================

pub mod motion {
    //! Transition durations in milliseconds.
    //!
    //! Components pick one of these as their base duration; adaptive props
    //! then scale it (reduced motion collapses it to `INSTANT`).

    pub const INSTANT: u64 = 0;
    pub const FAST: u64 = 120;
    pub const BASE: u64 = 200;
    pub const SLOW: u64 = 320;

    /// Multiplier applied to durations when motion is enhanced.
    pub const ENHANCED_FACTOR: f32 = 1.6;
}

// ============================================================================
// Token Browser Listings
// ============================================================================

/// Named token tables, in scale order, for the token browser screen.
pub mod listing {
    use super::{motion, palette, radius, spacing, typography, Color};

    pub const PALETTE: &[(&str, Color)] = &[
        ("gray-900", palette::GRAY_900),
        ("gray-700", palette::GRAY_700),
        ("gray-400", palette::GRAY_400),
        ("gray-200", palette::GRAY_200),
        ("gray-100", palette::GRAY_100),
        ("primary-100", palette::PRIMARY_100),
        ("primary-200", palette::PRIMARY_200),
        ("primary-400", palette::PRIMARY_400),
        ("primary-500", palette::PRIMARY_500),
        ("primary-600", palette::PRIMARY_600),
        ("primary-700", palette::PRIMARY_700),
        ("primary-800", palette::PRIMARY_800),
        ("error-500", palette::ERROR_500),
        ("warning-500", palette::WARNING_500),
        ("success-500", palette::SUCCESS_500),
        ("info-500", palette::INFO_500),
    ];

    pub const SPACING: &[(&str, f32)] = &[
        ("xxs", spacing::XXS),
        ("xs", spacing::XS),
        ("sm", spacing::SM),
        ("md", spacing::MD),
        ("lg", spacing::LG),
        ("xl", spacing::XL),
        ("xxl", spacing::XXL),
    ];

    pub const RADIUS: &[(&str, f32)] = &[
        ("none", radius::NONE),
        ("sm", radius::SM),
        ("md", radius::MD),
        ("lg", radius::LG),
    ];

    pub const TYPOGRAPHY: &[(&str, f32)] = &[
        ("title-lg", typography::TITLE_LG),
        ("title-md", typography::TITLE_MD),
        ("title-sm", typography::TITLE_SM),
        ("body-lg", typography::BODY_LG),
        ("body", typography::BODY),
        ("body-sm", typography::BODY_SM),
        ("caption", typography::CAPTION),
    ];

    pub const MOTION: &[(&str, u64)] = &[
        ("instant", motion::INSTANT),
        ("fast", motion::FAST),
        ("base", motion::BASE),
        ("slow", motion::SLOW),
    ];
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation
    assert!(motion::FAST > motion::INSTANT);
    assert!(motion::BASE > motion::FAST);
    assert!(motion::SLOW > motion::BASE);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn listings_are_in_ascending_scale_order() {
        assert!(listing::SPACING.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(listing::RADIUS.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(listing::MOTION.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(listing::TYPOGRAPHY.windows(2).all(|w| w[0].1 > w[1].1));
    }

    #[test]
    fn palette_listing_names_are_unique() {
        let names: std::collections::HashSet<_> =
            listing::PALETTE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), listing::PALETTE.len());
    }
}
