// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Button tinted with an arbitrary accent, used by the toast demo row.
pub fn accent(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (fill, lift) = match status {
            button::Status::Hovered => (Color { a: 0.85, ..color }, shadow::MD),
            button::Status::Pressed => (Color { a: 0.7, ..color }, shadow::NONE),
            button::Status::Active | button::Status::Disabled => (color, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: lift,
            snap: true,
        }
    }
}

/// Selected entry in a toggle group (navigation, pickers).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled(theme),
        other => primary(theme, other),
    }
}

/// Unselected entry in a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => disabled(theme),
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
