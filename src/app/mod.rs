// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the showcase screens.
//!
//! The `App` struct owns the single toast [`Manager`] and the single
//! [`Experience`] and hands them to screens by reference. Nothing in the
//! application is global; tests build their own `App` with its own stores.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::domain::adaptive::Experience;
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::notifications::{Manager, Options, TaskScheduler};
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    config: Config,
    /// Directory override for settings.toml, `None` for the resolved default.
    config_dir: Option<PathBuf>,
    catalog: catalog::State,
    experience: Experience,
    toasts: Manager<TaskScheduler>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("toasts", &self.toasts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1180;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 820;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, resolves the locale and seeds both stores.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let mut app = Self::from_config(flags.lang, config, config_dir);

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.toasts.warning(message, Options::default());
        }

        let task = update::drain_timers(&mut app.toasts);
        (app, task)
    }

    /// Builds the application state from an already loaded config.
    #[must_use]
    pub fn from_config(lang: Option<String>, config: Config, config_dir: Option<PathBuf>) -> Self {
        let i18n = I18n::new(lang, &config);
        let experience = Experience::new(
            config.adaptive.initial_context(),
            config.adaptive.rule_set(),
        );
        let toasts = Manager::with_settings(config.notifications.settings(), TaskScheduler::new());

        Self {
            i18n,
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            catalog: catalog::State::new(),
            experience,
            toasts,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let section = self.i18n.tr(self.screen.i18n_key());
        format!("{section} - {app_name}")
    }

    fn theme(&self) -> Theme {
        AppTheme::new(self.theme_mode).iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            catalog: &mut self.catalog,
            experience: &mut self.experience,
            toasts: &mut self.toasts,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message);
            }
            Message::Catalog(catalog_message) => {
                update::handle_catalog_message(&mut ctx, catalog_message);
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message);
            }
        }

        update::drain_timers(&mut self.toasts)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            catalog: &self.catalog,
            experience: &self.experience,
            toasts: &self.toasts,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn experience(&self) -> &Experience {
        &self.experience
    }

    #[must_use]
    pub fn toasts(&self) -> &Manager<TaskScheduler> {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adaptive::{ComponentKind, Device, Motion};
    use crate::ui::navbar;
    use crate::ui::notifications::{Kind, NotificationMessage, Position};
    use tempfile::TempDir;

    fn test_app() -> (App, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let app = App::from_config(
            Some("en-US".to_string()),
            Config::default(),
            Some(dir.path().to_path_buf()),
        );
        (app, dir)
    }

    #[test]
    fn starts_on_catalog_with_no_toasts() {
        let (app, _dir) = test_app();
        assert_eq!(app.screen(), Screen::Catalog);
        assert!(app.toasts().is_empty());
        let _ = app.view();
    }

    #[test]
    fn navbar_switches_screens() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::Open(Screen::Tokens)));
        assert_eq!(app.screen(), Screen::Tokens);
        assert!(app.title().contains("Tokens"));
        let _ = app.view();
    }

    #[test]
    fn theme_change_is_persisted() {
        let (mut app, dir) = test_app();
        let before = app.theme_mode();
        let _ = app.update(Message::Navbar(navbar::Message::CycleTheme));
        assert_eq!(app.theme_mode(), before.next());

        let saved = config::load_from_path(&dir.path().join("settings.toml")).expect("saved");
        assert_eq!(saved.general.theme_mode, before.next());
    }

    #[test]
    fn demo_toast_buttons_enqueue_and_track_usage() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Catalog(catalog::Message::ToastRequested(
            Kind::Success,
        )));

        assert_eq!(app.toasts().len(), 1);
        assert_eq!(
            app.toasts().iter().next().map(|n| n.kind()),
            Some(Kind::Success)
        );
        assert_eq!(
            app.experience()
                .context()
                .usage
                .get(ComponentKind::Toast, "show"),
            1
        );
    }

    #[test]
    fn escape_message_clears_toasts() {
        let (mut app, _dir) = test_app();
        for kind in Kind::ALL {
            let _ = app.update(Message::Catalog(catalog::Message::ToastRequested(kind)));
        }
        assert_eq!(app.toasts().len(), Kind::ALL.len());

        let _ = app.update(Message::Notification(NotificationMessage::DismissAll));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn expiry_message_removes_the_toast() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Catalog(catalog::Message::ToastRequested(Kind::Info)));
        let id = app.toasts().iter().next().map(|n| n.id()).expect("toast");

        let _ = app.update(Message::Notification(NotificationMessage::Expired(id)));
        assert!(app.toasts().is_empty());

        // A late expiry for the same id is ignored.
        let _ = app.update(Message::Notification(NotificationMessage::Expired(id)));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn context_panel_updates_adaptive_props() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Catalog(catalog::Message::DeviceSelected(
            Device::Mobile,
        )));
        let props = app.experience().adaptive_props(ComponentKind::Button);
        assert_eq!(props.motion, Some(Motion::Reduced));
    }

    #[test]
    fn interactions_retire_novice_hints() {
        let (mut app, _dir) = test_app();
        assert!(app
            .experience()
            .adaptive_props(ComponentKind::Button)
            .shows_hints());

        for _ in 0..crate::config::DEFAULT_NOVICE_THRESHOLD {
            let _ = app.update(Message::Catalog(catalog::Message::ButtonPressed));
        }
        assert!(!app
            .experience()
            .adaptive_props(ComponentKind::Button)
            .shows_hints());
    }

    #[test]
    fn toast_position_change_moves_the_stack() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Catalog(catalog::Message::PositionSelected(
            Position::BottomCenter,
        )));
        assert_eq!(app.toasts().position(), Position::BottomCenter);
    }
}
