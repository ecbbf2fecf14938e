// SPDX-License-Identifier: MPL-2.0
//! About screen module displaying application information and licenses.
//!
//! Shows the version, the license notice, how the adaptive rules work and
//! credits for the main dependencies.

use crate::domain::adaptive::RuleSet;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, rule, scrollable, Column, Container, Row, Text},
    Border, Element, Font, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub rules: &'a RuleSet,
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title)
        .push(build_app_section(&ctx))
        .push(build_rules_section(&ctx))
        .push(build_license_section(&ctx))
        .push(build_credits_section(&ctx));

    scrollable(content).into()
}

/// Build the application info section.
fn build_app_section<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let app_name = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);
    let version = Text::new(format!("v{APP_VERSION}")).size(typography::BODY);
    let description = Text::new(ctx.i18n.tr("about-app-description")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(app_name)
                .push(version),
        )
        .push(description);

    build_section(ctx.i18n.tr("about-section-app"), content.into())
}

/// Lists the active rules in evaluation order.
fn build_rules_section<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let threshold = ctx.rules.novice_threshold().to_string();
    let mut content = Column::new().spacing(spacing::XS).push(
        Text::new(
            ctx.i18n
                .tr_with_args("about-rules-summary", &[("threshold", threshold.as_str())]),
        )
        .size(typography::BODY),
    );

    for (index, rule) in ctx.rules.rules().iter().enumerate() {
        content = content.push(
            Text::new(format!("{}. {}", index + 1, rule.name))
                .font(Font::MONOSPACE)
                .size(typography::BODY_SM),
        );
    }

    build_section(ctx.i18n.tr("about-section-rules"), content.into())
}

/// Build the license section (MPL-2.0).
fn build_license_section<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let license_name = Text::new(ctx.i18n.tr("about-license-name")).size(typography::BODY_LG);
    let license_summary = Text::new(ctx.i18n.tr("about-license-summary")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(license_name)
        .push(license_summary);

    build_section(ctx.i18n.tr("about-section-license"), content.into())
}

/// Build the credits section.
fn build_credits_section<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(build_credit_item(&ctx.i18n.tr("about-credits-iced")))
        .push(build_credit_item(&ctx.i18n.tr("about-credits-tokio")))
        .push(build_credit_item(&ctx.i18n.tr("about-credits-fluent")));

    build_section(ctx.i18n.tr("about-section-credits"), content.into())
}

/// Build a single credit item.
fn build_credit_item<'a, Message: 'a>(description: &str) -> Element<'a, Message> {
    Text::new(format!("• {description}"))
        .size(typography::BODY)
        .into()
}

/// Build a section with a title and content.
fn build_section<'a, Message: 'a>(
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
