// SPDX-License-Identifier: MPL-2.0
//! Context panel: edits the user context and drives the toast demo.

use super::{Message, ViewContext};
use crate::domain::adaptive::{AnimationStyle, Device};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Position;
use crate::ui::styles;
use iced::widget::{button, checkbox, pick_list, rule, scrollable, Column, Text};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let context = ctx.experience.context();
    let i18n = ctx.i18n;

    let device = pick_list(Device::ALL, context.device, Message::DeviceSelected)
        .placeholder(i18n.tr("context-device-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fill);

    let animation = pick_list(
        AnimationStyle::ALL,
        context.preferred_animation_style,
        Message::AnimationStyleSelected,
    )
    .placeholder(i18n.tr("context-animation-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    let reduced_motion = checkbox(context.accessibility.reduced_motion)
        .label(i18n.tr("context-reduced-motion"))
        .on_toggle(Message::ReducedMotionToggled);

    let large_fonts = checkbox(context.accessibility.large_fonts)
        .label(i18n.tr("context-large-fonts"))
        .on_toggle(Message::LargeFontsToggled);

    let mut usage = Column::new().spacing(spacing::XXS);
    let mut any_usage = false;
    for (key, count) in context.usage.iter() {
        any_usage = true;
        usage = usage.push(Text::new(format!("{key} · {count}")).size(typography::CAPTION));
    }
    if !any_usage {
        usage = usage.push(Text::new(i18n.tr("context-usage-empty")).size(typography::CAPTION));
    }

    let position = pick_list(
        Position::ALL,
        Some(ctx.toast_position),
        Message::PositionSelected,
    )
    .padding(spacing::XS)
    .width(Length::Fill);

    let active = ctx.active_toasts.to_string();
    let dismiss_all = button(Text::new(i18n.tr("toast-demo-dismiss-all")).size(typography::BODY))
        .width(Length::Fill)
        .style(styles::button::unselected);
    let dismiss_all = if ctx.active_toasts > 0 {
        dismiss_all.on_press(Message::DismissAllToasts)
    } else {
        dismiss_all
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("context-title")).size(typography::TITLE_SM))
        .push(field(i18n.tr("context-device"), device.into()))
        .push(field(i18n.tr("context-animation-style"), animation.into()))
        .push(reduced_motion)
        .push(large_fonts)
        .push(rule::horizontal(1))
        .push(Text::new(i18n.tr("context-usage-title")).size(typography::BODY_LG))
        .push(usage)
        .push(rule::horizontal(1))
        .push(Text::new(i18n.tr("toast-demo-title")).size(typography::TITLE_SM))
        .push(field(i18n.tr("toast-demo-position"), position.into()))
        .push(
            Text::new(i18n.tr_with_args("toast-demo-active", &[("count", active.as_str())]))
                .size(typography::BODY_SM),
        )
        .push(dismiss_all);

    scrollable(content).height(Length::Fill).into()
}

fn field<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(control)
        .into()
}
