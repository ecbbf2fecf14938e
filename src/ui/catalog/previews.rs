// SPDX-License-Identifier: MPL-2.0
//! Live previews, one per component kind.

use super::{snippets, Message, State, ViewContext};
use crate::domain::adaptive::{AdaptiveProps, ComponentKind, Device, Experience, Layout, Motion};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::notifications::Kind;
use crate::ui::styles::{self, adaptive};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text_input, toggler, Column, Container, Row, Text};
use iced::{alignment::Vertical, Background, Element, Font, Length, Theme};

/// Everything a preview needs beyond the catalog state.
struct Look<'a> {
    i18n: &'a I18n,
    experience: &'a Experience,
    props: AdaptiveProps,
    text_size: f32,
    control_height: f32,
}

impl<'a> Look<'a> {
    fn new(ctx: &ViewContext<'a>, kind: ComponentKind) -> Self {
        let context = ctx.experience.context();
        let touch = matches!(context.device, Some(Device::Mobile | Device::Tablet));
        Self {
            i18n: ctx.i18n,
            experience: ctx.experience,
            props: ctx.experience.adaptive_props(kind),
            text_size: adaptive::body_size(context.accessibility.large_fonts),
            control_height: adaptive::control_height(touch),
        }
    }

    fn tr(&self, key: &str) -> String {
        self.i18n.tr(key)
    }

    fn label(&self, key: &str) -> Text<'a> {
        Text::new(self.tr(key)).size(self.text_size)
    }
}

/// Preview card: title, adaptation summary, live widget, hint and snippet.
pub(super) fn card<'a>(
    state: &'a State,
    ctx: &ViewContext<'a>,
    kind: ComponentKind,
) -> Element<'a, Message> {
    let look = Look::new(ctx, kind);
    let uses = ctx.experience.context().usage.total_for(kind).to_string();

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(look.tr(&format!("component-{}", kind.as_str())))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("catalog-usage-count", &[("count", uses.as_str())]),
            )
            .size(typography::CAPTION),
        );

    let live = match kind {
        ComponentKind::Button => button_preview(state, &look),
        ComponentKind::Card => card_preview(state, &look),
        ComponentKind::Modal => modal_preview(state, &look),
        ComponentKind::Tabs => tabs_preview(state, &look),
        ComponentKind::Toast => toast_preview(&look),
        ComponentKind::Input => input_preview(state, &look),
        ComponentKind::Toggle => toggle_preview(state, &look),
    };

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(summary(&look, kind))
        .push(
            Container::new(live)
                .padding(adaptive::padding(&look.props))
                .width(Length::Fill),
        );

    if look.props.shows_hints() {
        body = body.push(
            Container::new(
                Text::new(look.tr(&format!("catalog-hint-{}", kind.as_str())))
                    .size(typography::BODY_SM),
            )
            .padding([spacing::XXS, spacing::XS])
            .width(Length::Fill)
            .style(styles::container::hint),
        );
    }

    body = body.push(
        Container::new(
            Text::new(snippets::snippet(kind))
                .font(Font::MONOSPACE)
                .size(typography::CAPTION),
        )
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::code),
    );

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// One line describing which adaptations are active.
fn summary<'a>(look: &Look<'a>, kind: ComponentKind) -> Element<'a, Message> {
    let i18n = look.i18n;
    if look.props.is_empty() {
        return Text::new(i18n.tr("catalog-props-none"))
            .size(typography::BODY_SM)
            .into();
    }

    let motion_key = match look.props.motion() {
        Motion::Reduced => "motion-reduced",
        Motion::Standard => "motion-standard",
        Motion::Enhanced => "motion-enhanced",
    };
    let layout_key = match look.props.layout() {
        Layout::Compact => "layout-compact",
        Layout::Standard => "layout-standard",
        Layout::Spacious => "layout-spacious",
    };
    let motion = i18n.tr(motion_key);
    let layout = i18n.tr(layout_key);
    let millis = adaptive::transition(&look.props, base_duration(kind))
        .as_millis()
        .to_string();
    let rules = look
        .experience
        .rules()
        .matching(look.experience.context(), kind)
        .join(", ");

    let line = i18n.tr_with_args(
        "catalog-props-summary",
        &[
            ("motion", motion.as_str()),
            ("layout", layout.as_str()),
            ("ms", millis.as_str()),
            ("rules", rules.as_str()),
        ],
    );
    Text::new(line).size(typography::BODY_SM).into()
}

/// Resting transition length for each kind.
pub(super) fn base_duration(kind: ComponentKind) -> u64 {
    match kind {
        ComponentKind::Button | ComponentKind::Toggle | ComponentKind::Input => motion::FAST,
        ComponentKind::Tabs | ComponentKind::Card | ComponentKind::Toast => motion::BASE,
        ComponentKind::Modal => motion::SLOW,
    }
}

fn button_preview<'a>(state: &'a State, look: &Look<'a>) -> Element<'a, Message> {
    let primary = button(look.label("preview-button-primary"))
        .on_press(Message::ButtonPressed)
        .height(Length::Fixed(look.control_height))
        .padding([spacing::XS, adaptive::padding(&look.props)])
        .style(styles::button::primary);

    let mut row = Row::new()
        .spacing(adaptive::gap(&look.props))
        .align_y(Vertical::Center)
        .push(primary);

    if !look.props.is_simplified() {
        row = row.push(
            button(look.label("preview-button-secondary"))
                .on_press(Message::ButtonPressed)
                .height(Length::Fixed(look.control_height))
                .padding([spacing::XS, adaptive::padding(&look.props)])
                .style(styles::button::unselected),
        );
    }

    let presses = state.button_presses.to_string();
    row.push(
        Text::new(
            look.i18n
                .tr_with_args("preview-button-presses", &[("count", presses.as_str())]),
        )
        .size(typography::BODY_SM),
    )
    .into()
}

fn card_preview<'a>(state: &'a State, look: &Look<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(adaptive::gap(&look.props))
        .push(Text::new(look.tr("preview-card-title")).size(typography::TITLE_SM))
        .push(look.label("preview-card-body"));

    if state.card_expanded && !look.props.is_simplified() {
        content = content.push(look.label("preview-card-details"));
    }

    let toggle_key = if state.card_expanded {
        "preview-card-collapse"
    } else {
        "preview-card-expand"
    };
    content = content.push(
        button(look.label(toggle_key))
            .on_press(Message::CardToggled)
            .style(styles::button::unselected),
    );

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(adaptive::padding(&look.props))
        .style(styles::container::card)
        .into()
}

fn modal_preview<'a>(state: &'a State, look: &Look<'a>) -> Element<'a, Message> {
    if !state.modal_open {
        return button(look.label("preview-modal-open"))
            .on_press(Message::ModalOpened)
            .height(Length::Fixed(look.control_height))
            .style(styles::button::primary)
            .into();
    }

    let mut actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(look.label("preview-modal-confirm"))
                .on_press(Message::ModalClosed)
                .style(styles::button::primary),
        );
    if !look.props.is_simplified() {
        actions = actions.push(
            button(look.label("preview-modal-cancel"))
                .on_press(Message::ModalClosed)
                .style(styles::button::unselected),
        );
    }

    let dialog = Container::new(
        Column::new()
            .spacing(adaptive::gap(&look.props))
            .push(Text::new(look.tr("preview-modal-title")).size(typography::TITLE_SM))
            .push(look.label("preview-modal-body"))
            .push(actions),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(adaptive::padding(&look.props))
    .style(styles::container::card);

    Container::new(dialog)
        .width(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .style(scrim)
        .into()
}

fn scrim(theme: &Theme) -> container::Style {
    let scheme = if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    };
    container::Style {
        background: Some(Background::Color(scheme.scrim)),
        ..Default::default()
    }
}

fn tabs_preview<'a>(state: &'a State, look: &Look<'a>) -> Element<'a, Message> {
    const TABS: [&str; 3] = ["preview-tab-overview", "preview-tab-usage", "preview-tab-api"];
    let visible = if look.props.is_simplified() { 2 } else { TABS.len() };
    let active = state.active_tab.min(visible - 1);

    let mut strip = Row::new().spacing(spacing::XXS);
    for (index, key) in TABS.iter().take(visible).enumerate() {
        let style = if index == active {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        strip = strip.push(
            button(look.label(key))
                .on_press(Message::TabSelected(index))
                .height(Length::Fixed(look.control_height))
                .style(style),
        );
    }

    Column::new()
        .spacing(adaptive::gap(&look.props))
        .push(strip)
        .push(look.label(&format!("{}-content", TABS[active])))
        .into()
}

fn toast_preview<'a>(look: &Look<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(adaptive::gap(&look.props));
    for kind in Kind::ALL {
        row = row.push(
            button(look.label(kind.i18n_key()))
                .on_press(Message::ToastRequested(kind))
                .height(Length::Fixed(look.control_height))
                .style(styles::button::accent(kind.color())),
        );
    }
    if !look.props.is_simplified() {
        row = row.push(
            button(look.label("preview-toast-with-action"))
                .on_press(Message::ToastWithActionRequested)
                .height(Length::Fixed(look.control_height))
                .style(styles::button::unselected),
        );
    }
    row.into()
}

fn input_preview<'a>(state: &'a State, look: &Look<'a>) -> Element<'a, Message> {
    let placeholder = look.tr("preview-input-placeholder");
    let input = text_input(&placeholder, &state.input_value)
        .on_input(Message::InputChanged)
        .on_submit(Message::InputSubmitted)
        .size(look.text_size)
        .padding(adaptive::padding(&look.props))
        .width(Length::Fixed(sizing::CARD_WIDTH));

    let mut column = Column::new().spacing(adaptive::gap(&look.props)).push(input);
    if !look.props.is_simplified() {
        column = column.push(
            Text::new(look.tr("preview-input-helper")).size(typography::CAPTION),
        );
    }
    column.into()
}

fn toggle_preview<'a>(state: &'a State, look: &Look<'a>) -> Element<'a, Message> {
    let status_key = if state.toggle_on {
        "preview-toggle-on"
    } else {
        "preview-toggle-off"
    };

    let mut row = Row::new()
        .spacing(adaptive::gap(&look.props))
        .align_y(Vertical::Center)
        .push(
            toggler(state.toggle_on)
                .on_toggle(Message::Toggled)
                .size(look.control_height / 2.0),
        )
        .push(look.label(status_key));

    if !look.props.is_simplified() {
        row = row.push(Text::new(look.tr("preview-toggle-description")).size(typography::CAPTION));
    }
    row.into()
}
