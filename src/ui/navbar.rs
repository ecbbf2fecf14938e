// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! A row of section buttons (Catalog, Tokens, About) with the active one
//! highlighted, plus a theme switcher on the right.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Open(Screen),
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SwitchScreen(Screen),
    ThemeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message, theme_mode: ThemeMode) -> Event {
    match message {
        Message::Open(screen) => Event::SwitchScreen(screen),
        Message::CycleTheme => Event::ThemeChanged(theme_mode.next()),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fixed(spacing::MD)));

    for screen in Screen::ALL {
        let label = Text::new(ctx.i18n.tr(screen.i18n_key())).size(typography::BODY);
        let style = if screen == ctx.screen {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row = row.push(
            button(label)
                .on_press(Message::Open(screen))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
        );
    }

    let theme_label = format!(
        "{}: {}",
        ctx.i18n.tr("navbar-theme-label"),
        ctx.i18n.tr(ctx.theme_mode.i18n_key())
    );
    row = row
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(theme_label).size(typography::BODY_SM))
                .on_press(Message::CycleTheme)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected),
        );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_for_every_screen() {
        let i18n = I18n::default();
        for screen in Screen::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                screen,
                theme_mode: ThemeMode::Dark,
            });
        }
    }

    #[test]
    fn open_emits_switch_event() {
        let event = update(Message::Open(Screen::Tokens), ThemeMode::Light);
        assert_eq!(event, Event::SwitchScreen(Screen::Tokens));
    }

    #[test]
    fn cycle_theme_advances_mode() {
        let event = update(Message::CycleTheme, ThemeMode::Light);
        assert_eq!(event, Event::ThemeChanged(ThemeMode::Dark));
    }
}
