// SPDX-License-Identifier: MPL-2.0
//! Component catalog screen.
//!
//! Shows one live preview per [`ComponentKind`] next to a context panel
//! that edits the shared user context. Previews read their
//! [`AdaptiveProps`](crate::domain::adaptive::AdaptiveProps) from the
//! [`Experience`] passed in by the application and report interactions
//! back as [`Event::Interaction`] so usage can be tracked.
//!
//! The screen owns only cosmetic preview state (toggle position, input
//! text, open tab). Context and toasts live in the application.

mod context_panel;
mod previews;
pub mod snippets;

use crate::domain::adaptive::{AnimationStyle, ComponentKind, ContextUpdate, Device, Experience};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Kind, Position};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the catalog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub experience: &'a Experience,
    pub toast_position: Position,
    pub active_toasts: usize,
}

/// Cosmetic state of the previews.
#[derive(Debug, Clone, Default)]
pub struct State {
    button_presses: u32,
    card_expanded: bool,
    modal_open: bool,
    active_tab: usize,
    input_value: String,
    toggle_on: bool,
}

/// Messages emitted by the catalog.
#[derive(Debug, Clone)]
pub enum Message {
    ButtonPressed,
    CardToggled,
    ModalOpened,
    ModalClosed,
    TabSelected(usize),
    InputChanged(String),
    InputSubmitted,
    Toggled(bool),
    ToastRequested(Kind),
    ToastWithActionRequested,
    DeviceSelected(Device),
    AnimationStyleSelected(AnimationStyle),
    ReducedMotionToggled(bool),
    LargeFontsToggled(bool),
    PositionSelected(Position),
    DismissAllToasts,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Interaction {
        component: ComponentKind,
        action: &'static str,
    },
    ContextChanged(ContextUpdate),
    ShowToast {
        kind: Kind,
        with_action: bool,
    },
    ToastPositionChanged(Position),
    DismissAllToasts,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a catalog message and returns what the parent has to do.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ButtonPressed => {
                self.button_presses = self.button_presses.saturating_add(1);
                interaction(ComponentKind::Button, "press")
            }
            Message::CardToggled => {
                self.card_expanded = !self.card_expanded;
                interaction(ComponentKind::Card, "expand")
            }
            Message::ModalOpened => {
                self.modal_open = true;
                interaction(ComponentKind::Modal, "open")
            }
            Message::ModalClosed => {
                self.modal_open = false;
                interaction(ComponentKind::Modal, "close")
            }
            Message::TabSelected(index) => {
                if index == self.active_tab {
                    return Event::None;
                }
                self.active_tab = index;
                interaction(ComponentKind::Tabs, "select")
            }
            Message::InputChanged(value) => {
                self.input_value = value;
                Event::None
            }
            Message::InputSubmitted => {
                if self.input_value.trim().is_empty() {
                    return Event::None;
                }
                interaction(ComponentKind::Input, "submit")
            }
            Message::Toggled(on) => {
                self.toggle_on = on;
                interaction(ComponentKind::Toggle, "switch")
            }
            Message::ToastRequested(kind) => Event::ShowToast {
                kind,
                with_action: false,
            },
            Message::ToastWithActionRequested => Event::ShowToast {
                kind: Kind::Info,
                with_action: true,
            },
            Message::DeviceSelected(device) => {
                Event::ContextChanged(ContextUpdate::device(device))
            }
            Message::AnimationStyleSelected(style) => {
                Event::ContextChanged(ContextUpdate::animation_style(style))
            }
            Message::ReducedMotionToggled(enabled) => {
                Event::ContextChanged(ContextUpdate::reduced_motion(enabled))
            }
            Message::LargeFontsToggled(enabled) => {
                Event::ContextChanged(ContextUpdate::large_fonts(enabled))
            }
            Message::PositionSelected(position) => Event::ToastPositionChanged(position),
            Message::DismissAllToasts => Event::DismissAllToasts,
        }
    }

    /// Render the catalog screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr("catalog-title")).size(typography::TITLE_LG))
            .push(Text::new(ctx.i18n.tr("catalog-subtitle")).size(typography::BODY));

        let mut previews = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .width(Length::Fill)
            .push(header);

        for kind in ComponentKind::ALL {
            previews = previews.push(previews::card(self, &ctx, kind));
        }

        let panel = Container::new(context_panel::view(&ctx))
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .height(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel);

        Row::new()
            .push(scrollable(previews).width(Length::Fill).height(Length::Fill))
            .push(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn interaction(component: ComponentKind, action: &'static str) -> Event {
    Event::Interaction { component, action }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_view_renders_with_default_experience() {
        let i18n = I18n::default();
        let experience = Experience::default();
        let state = State::new();
        let _element = state.view(ViewContext {
            i18n: &i18n,
            experience: &experience,
            toast_position: Position::default(),
            active_toasts: 0,
        });
    }

    #[test]
    fn button_press_reports_interaction() {
        let mut state = State::new();
        let event = state.update(Message::ButtonPressed);
        assert_eq!(
            event,
            Event::Interaction {
                component: ComponentKind::Button,
                action: "press"
            }
        );
        assert_eq!(state.button_presses, 1);
    }

    #[test]
    fn reselecting_the_open_tab_is_not_an_interaction() {
        let mut state = State::new();
        assert_eq!(state.update(Message::TabSelected(0)), Event::None);
        assert!(matches!(
            state.update(Message::TabSelected(1)),
            Event::Interaction {
                component: ComponentKind::Tabs,
                ..
            }
        ));
        assert_eq!(state.active_tab, 1);
    }

    #[test]
    fn typing_is_not_tracked_but_submitting_is() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::InputChanged("hello".into())),
            Event::None
        );
        assert!(matches!(
            state.update(Message::InputSubmitted),
            Event::Interaction {
                component: ComponentKind::Input,
                action: "submit"
            }
        ));
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut state = State::new();
        state.update(Message::InputChanged("   ".into()));
        assert_eq!(state.update(Message::InputSubmitted), Event::None);
    }

    #[test]
    fn context_controls_emit_partial_updates() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::DeviceSelected(Device::Tablet)),
            Event::ContextChanged(ContextUpdate::device(Device::Tablet))
        );
        assert_eq!(
            state.update(Message::ReducedMotionToggled(true)),
            Event::ContextChanged(ContextUpdate::reduced_motion(true))
        );
    }

    #[test]
    fn modal_open_and_close_round_trip() {
        let mut state = State::new();
        state.update(Message::ModalOpened);
        assert!(state.modal_open);
        state.update(Message::ModalClosed);
        assert!(!state.modal_open);
    }

    #[test]
    fn toast_requests_are_forwarded() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::ToastRequested(Kind::Error)),
            Event::ShowToast {
                kind: Kind::Error,
                with_action: false
            }
        );
        assert_eq!(
            state.update(Message::DismissAllToasts),
            Event::DismissAllToasts
        );
    }
}
