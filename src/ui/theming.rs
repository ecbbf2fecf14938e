// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system-following themes for the showcase.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Semantic colors used by the showcase chrome and previews.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    /// Backdrop drawn behind the modal preview.
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_tertiary: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }
}

/// Theme preference stored in `[general] theme_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// System mode asks the desktop and falls back to dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Cycles Light → Dark → System.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}

/// Resolved theme: the preference plus the colors it maps to.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = if mode.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode }
    }

    /// The built-in iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
