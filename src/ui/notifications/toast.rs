// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with kind-colored accents, an optional inline action and a
//! close button for dismissible entries.

use super::manager::{Manager, Message};
use super::notification::{Kind, Notification};
use super::timer::Scheduler;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();
        let id = notification.id();

        let glyph = Text::new(Self::kind_glyph(kind))
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        let heading = notification
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| i18n.tr(kind.i18n_key()));
        body = body.push(Text::new(heading).size(typography::BODY_LG));
        body = body.push(
            Text::new(notification.message())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );

        if let Some(action) = notification.action() {
            body = body.push(
                button(Text::new(action.label.as_str()).size(typography::BODY_SM))
                    .on_press(Message::Action(id))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status| action_button_style(theme, status, accent_color)),
            );
        }

        // Layout: [glyph] [title/message/action] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(body);

        if notification.is_dismissible() {
            content = content.push(
                button(Text::new("✕").size(typography::BODY))
                    .on_press(Message::Dismiss(id))
                    .padding(spacing::XXS)
                    .style(dismiss_button_style),
            );
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Notifications top to bottom as drawn in the overlay.
    ///
    /// Always insertion order; the anchor only changes alignment.
    fn stacked<'a, S: Scheduler>(
        manager: &'a Manager<S>,
    ) -> impl Iterator<Item = &'a Notification> + 'a {
        manager.iter()
    }

    /// Renders the toast overlay anchored at the manager's position.
    pub fn view_overlay<'a, S: Scheduler>(
        manager: &'a Manager<S>,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let position = manager.position();

        let toasts: Vec<Element<'a, Message>> = Self::stacked(manager)
            .map(|n| Self::view(n, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(position.horizontal());

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(position.horizontal())
            .align_y(position.vertical())
            .padding(spacing::MD)
            .into()
    }

    fn kind_glyph(kind: Kind) -> &'static str {
        match kind {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "!",
            Kind::Info => "i",
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Outlined button tinted with the toast's accent.
fn action_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let fill = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: fill,
        text_color: base.text,
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Options, Position, Unscheduled};

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_fills_on_interaction() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn action_button_border_matches_accent() {
        let style = action_button_style(&Theme::Dark, button::Status::Active, palette::ERROR_500);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn overlay_keeps_insertion_order_at_every_anchor() {
        for position in [Position::TopRight, Position::BottomLeft] {
            let mut manager = Manager::new(Unscheduled);
            manager.set_position(position);
            let first = manager.info("first", Options::default());
            let second = manager.info("second", Options::default());
            let third = manager.info("third", Options::default());

            let order: Vec<_> = Toast::stacked(&manager).map(Notification::id).collect();
            assert_eq!(order, [first, second, third], "anchor {position}");

            let i18n = I18n::default();
            let _overlay = Toast::view_overlay(&manager, &i18n);
        }
    }

    #[test]
    fn every_kind_has_a_glyph() {
        for kind in Kind::ALL {
            assert!(!Toast::kind_glyph(kind).is_empty());
        }
    }
}
