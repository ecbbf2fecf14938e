// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the context panel and section blocks.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Raised card holding one component preview.
pub fn card(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(weak.text),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Monospace block showing a usage snippet.
pub fn code(theme: &Theme) -> container::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        Color::from_rgb(0.12, 0.12, 0.12)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline hint bubble shown to novice users.
pub fn hint(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::INFO_500
        })),
        border: Border {
            color: palette::INFO_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Square swatch filled with a token color.
pub fn swatch(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
