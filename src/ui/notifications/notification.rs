// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind`, and the
//! `Options` builder used by every producer call on the manager.

use crate::config::{DEFAULT_TOAST_DURATION_MS, DEFAULT_ERROR_DURATION_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of notification, drives accent color and default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Failure requiring attention (red, manual dismiss by default).
    Error,
    /// Non-blocking warning (orange).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    /// Returns the primary color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Returns the built-in auto-dismiss duration for this kind.
    ///
    /// `Duration::ZERO` means the notification stays until dismissed.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        match self {
            Kind::Error => Duration::from_millis(DEFAULT_ERROR_DURATION_MS),
            Kind::Success | Kind::Warning | Kind::Info => {
                Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
            }
        }
    }

    /// Returns the i18n key used for this kind's label.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Kind::Success => "toast-kind-success",
            Kind::Error => "toast-kind-error",
            Kind::Warning => "toast-kind-warning",
            Kind::Info => "toast-kind-info",
        }
    }
}

/// Shared callback invoked with the id of the notification it belongs to.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(ToastId) + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn(ToastId) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, id: ToastId) {
        (self.0)(id);
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Inline response offered on a notification ("Undo", "Retry", ...).
#[derive(Debug, Clone)]
pub struct Action {
    pub label: String,
    pub callback: Callback,
}

impl Action {
    pub fn new(label: impl Into<String>, f: impl Fn(ToastId) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Callback::new(f),
        }
    }
}

/// Producer-side options for a notification.
///
/// Unset fields fall back to the manager defaults when the notification is
/// built, so `Options::default()` yields an info toast that auto-dismisses.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub kind: Kind,
    pub title: Option<String>,
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
    pub action: Option<Action>,
    pub on_dismiss: Option<Callback>,
}

impl Options {
    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom lifetime. `Duration::ZERO` disables auto-dismiss.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, f: impl Fn(ToastId) + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Callback::new(f));
        self
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: ToastId,
    kind: Kind,
    title: Option<String>,
    message: String,
    /// Lifetime before auto-removal, `Duration::ZERO` for none.
    duration: Duration,
    dismissible: bool,
    action: Option<Action>,
    on_dismiss: Option<Callback>,
    created_at: Instant,
}

impl Notification {
    /// Builds a notification, resolving unset options against `defaults`.
    pub(crate) fn build(message: String, options: Options, defaults: &Durations) -> Self {
        let duration = options
            .duration
            .unwrap_or_else(|| defaults.for_kind(options.kind));

        Self {
            id: ToastId::new(),
            kind: options.kind,
            title: options.title,
            message,
            duration,
            dismissible: options.dismissible.unwrap_or(true),
            action: options.action,
            on_dismiss: options.on_dismiss,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether this notification is removed by a timer.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub(crate) fn notify_dismissed(&self) {
        if let Some(callback) = &self.on_dismiss {
            callback.call(self.id);
        }
    }
}

/// Per-kind default lifetimes, taken from the `[notifications]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub standard: Duration,
    pub error: Duration,
}

impl Durations {
    #[must_use]
    pub fn for_kind(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Error => self.error,
            Kind::Success | Kind::Warning | Kind::Info => self.standard,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            standard: Kind::Info.default_duration(),
            error: Kind::Error.default_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn build(message: &str, options: Options) -> Notification {
        Notification::build(message.to_string(), options, &Durations::default())
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = build("a", Options::default());
        let n2 = build("a", Options::default());
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors: Vec<Color> = Kind::ALL.iter().map(Kind::color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn errors_default_to_manual_dismiss() {
        let n = build("Failed", Options::default().kind(Kind::Error));
        assert_eq!(n.duration(), Duration::ZERO);
        assert!(!n.auto_dismisses());
    }

    #[test]
    fn other_kinds_default_to_five_seconds() {
        for kind in [Kind::Success, Kind::Warning, Kind::Info] {
            let n = build("Saved", Options::default().kind(kind));
            assert_eq!(n.duration(), Duration::from_millis(5000));
        }
    }

    #[test]
    fn explicit_duration_overrides_kind_default() {
        let n = build(
            "Failed",
            Options::default()
                .kind(Kind::Error)
                .duration(Duration::from_secs(2)),
        );
        assert_eq!(n.duration(), Duration::from_secs(2));
    }

    #[test]
    fn builder_sets_every_field() {
        let n = build(
            "Deleted 3 files",
            Options::default()
                .kind(Kind::Warning)
                .title("Trash")
                .dismissible(false)
                .action(Action::new("Undo", |_| {})),
        );

        assert_eq!(n.kind(), Kind::Warning);
        assert_eq!(n.title(), Some("Trash"));
        assert_eq!(n.message(), "Deleted 3 files");
        assert!(!n.is_dismissible());
        assert_eq!(n.action().map(|a| a.label.as_str()), Some("Undo"));
    }

    #[test]
    fn dismiss_callback_receives_own_id() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let n = build(
            "x",
            Options::default().on_dismiss(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }),
        );

        n.notify_dismissed();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
