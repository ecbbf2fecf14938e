// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler works on an [`UpdateContext`] borrowed from `App` so the
//! routing in `App::update` stays a flat match.

use super::{Message, Screen};
use crate::config::{self, Config};
use crate::domain::adaptive::{ComponentKind, Experience};
use crate::i18n::fluent::I18n;
use crate::ui::catalog::{self, Event as CatalogEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{
    Action, Kind, Manager, NotificationMessage, Options, TaskScheduler,
};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub catalog: &'a mut catalog::State,
    pub experience: &'a mut Experience,
    pub toasts: &'a mut Manager<TaskScheduler>,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) {
    match navbar::update(message, *ctx.theme_mode) {
        NavbarEvent::SwitchScreen(screen) => *ctx.screen = screen,
        NavbarEvent::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            persist(ctx);
        }
    }
}

pub fn handle_catalog_message(ctx: &mut UpdateContext<'_>, message: catalog::Message) {
    match ctx.catalog.update(message) {
        CatalogEvent::None => {}
        CatalogEvent::Interaction { component, action } => {
            ctx.experience.track_usage(component, action);
        }
        CatalogEvent::ContextChanged(update) => ctx.experience.update_context(update),
        CatalogEvent::ShowToast { kind, with_action } => {
            ctx.experience.track_usage(ComponentKind::Toast, "show");
            show_demo_toast(ctx, kind, with_action);
        }
        CatalogEvent::ToastPositionChanged(position) => {
            ctx.toasts.set_position(position);
            ctx.config.notifications.position = Some(position);
            persist(ctx);
        }
        CatalogEvent::DismissAllToasts => ctx.toasts.dismiss_all(),
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
) {
    if let NotificationMessage::Action(id) = message {
        if ctx.toasts.get(*id).is_some_and(|n| n.action().is_some()) {
            ctx.experience.track_usage(ComponentKind::Toast, "action");
        }
    }
    ctx.toasts.handle_message(message);
}

/// Turns timers armed during this update into expiry messages.
pub fn drain_timers(toasts: &mut Manager<TaskScheduler>) -> Task<Message> {
    toasts
        .scheduler_mut()
        .take()
        .map(|id| Message::Notification(NotificationMessage::Expired(id)))
}

fn show_demo_toast(ctx: &mut UpdateContext<'_>, kind: Kind, with_action: bool) {
    if with_action {
        let undo = ctx.i18n.tr("toast-demo-undo");
        let options = Options::default()
            .kind(Kind::Info)
            .title(ctx.i18n.tr("toast-demo-archived-title"))
            .action(Action::new(undo, |id| tracing::info!(%id, "undo requested")))
            .on_dismiss(|id| tracing::debug!(%id, "archive toast closed"));
        ctx.toasts
            .notify(ctx.i18n.tr("toast-demo-archived-message"), options);
        return;
    }

    let key = match kind {
        Kind::Success => "toast-demo-message-success",
        Kind::Error => "toast-demo-message-error",
        Kind::Warning => "toast-demo-message-warning",
        Kind::Info => "toast-demo-message-info",
    };
    ctx.toasts
        .notify(ctx.i18n.tr(key), Options::default().kind(kind));
}

/// Writes the config, reporting failures as an error toast.
fn persist(ctx: &mut UpdateContext<'_>) {
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.cloned()) {
        tracing::warn!(%err, "could not save settings");
        ctx.toasts
            .error(ctx.i18n.tr("notification-config-save-error"), Options::default());
    }
}
