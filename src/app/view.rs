// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits under the navbar; the toast overlay is stacked
//! on top of everything.

use super::{Message, Screen};
use crate::domain::adaptive::Experience;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::catalog::{self, ViewContext as CatalogViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, TaskScheduler, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::tokens::{self, ViewContext as TokensViewContext};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub catalog: &'a catalog::State,
    pub experience: &'a Experience,
    pub toasts: &'a Manager<TaskScheduler>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Catalog => ctx
            .catalog
            .view(CatalogViewContext {
                i18n: ctx.i18n,
                experience: ctx.experience,
                toast_position: ctx.toasts.position(),
                active_toasts: ctx.toasts.len(),
            })
            .map(Message::Catalog),
        Screen::Tokens => tokens::view(TokensViewContext { i18n: ctx.i18n }),
        Screen::About => about::view(AboutViewContext {
            i18n: ctx.i18n,
            rules: ctx.experience.rules(),
        }),
    };

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.toasts, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
