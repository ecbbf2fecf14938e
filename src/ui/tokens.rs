// SPDX-License-Identifier: MPL-2.0
//! Design token browser.
//!
//! Read-only screen listing the palette, spacing, radius, typography and
//! motion scales with a small visual sample next to each value.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{listing, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Background, Border, Color, Element, Font, Length, Theme};

/// Contextual data needed to render the token browser.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the token browser.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("tokens-title")).size(typography::TITLE_LG))
        .push(section(ctx.i18n.tr("tokens-section-palette"), palette_rows()))
        .push(section(
            ctx.i18n.tr("tokens-section-spacing"),
            scale_rows(listing::SPACING, |value| {
                bar(value, palette::PRIMARY_500, radius::NONE)
            }),
        ))
        .push(section(
            ctx.i18n.tr("tokens-section-radius"),
            scale_rows(listing::RADIUS, |value| {
                bar(sizing::ICON_LG, palette::PRIMARY_400, value)
            }),
        ))
        .push(section(
            ctx.i18n.tr("tokens-section-typography"),
            scale_rows(listing::TYPOGRAPHY, |value| {
                Text::new("Aa").size(value).into()
            }),
        ))
        .push(section(ctx.i18n.tr("tokens-section-motion"), motion_rows(ctx.i18n)));

    scrollable(content).into()
}

fn section<'a, Message: 'a>(title: String, rows: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM));
    for row in rows {
        column = column.push(row);
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn token_row<'a, Message: 'a>(
    name: &str,
    value: String,
    sample: Element<'a, Message>,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(name.to_string())
                .font(Font::MONOSPACE)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::SIDEBAR_WIDTH / 2.0)),
        )
        .push(
            Text::new(value)
                .size(typography::BODY_SM)
                .width(Length::Fixed(sizing::SIDEBAR_WIDTH / 3.0)),
        )
        .push(sample)
        .into()
}

fn palette_rows<'a, Message: 'a>() -> Vec<Element<'a, Message>> {
    listing::PALETTE
        .iter()
        .map(|(name, color)| {
            let swatch = Container::new(Space::new())
                .width(Length::Fixed(sizing::ICON_LG))
                .height(Length::Fixed(sizing::ICON_MD))
                .style(styles::container::swatch(*color));
            token_row(name, hex(*color), swatch.into())
        })
        .collect()
}

fn scale_rows<'a, Message: 'a>(
    entries: &[(&str, f32)],
    sample: impl Fn(f32) -> Element<'a, Message>,
) -> Vec<Element<'a, Message>> {
    entries
        .iter()
        .map(|(name, value)| token_row(name, format!("{value} px"), sample(*value)))
        .collect()
}

fn motion_rows<'a, Message: 'a>(i18n: &I18n) -> Vec<Element<'a, Message>> {
    listing::MOTION
        .iter()
        .map(|(name, millis)| {
            let ms = millis.to_string();
            let value = i18n.tr_with_args("tokens-motion-value", &[("ms", ms.as_str())]);
            // One pixel of bar per two milliseconds.
            let sample = bar((*millis as f32 / 2.0).max(1.0), palette::INFO_500, radius::SM);
            token_row(name, value, sample)
        })
        .collect()
}

fn bar<'a, Message: 'a>(width: f32, color: Color, corner: f32) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fixed(width.max(1.0)))
        .height(Length::Fixed(sizing::ICON_SM))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: corner.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// `#rrggbb` form of a color.
#[must_use]
pub fn hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}")
}
