// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered toast queue. It bounds the queue by
//! evicting the oldest entry, arms one auto-dismiss timer per entry with a
//! non-zero lifetime, and cancels that timer whenever the entry leaves the
//! queue early.

use super::notification::{Durations, Kind, Notification, Options, ToastId};
use super::position::Position;
use super::timer::{Scheduler, Timer, Unscheduled};
use crate::config::{DEFAULT_MAX_TOASTS, MAX_TOASTS_LIMIT, MIN_TOASTS_LIMIT};
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(ToastId),
    /// Auto-dismiss timer elapsed for a notification.
    Expired(ToastId),
    /// The notification's inline action was pressed.
    Action(ToastId),
    /// Remove every active notification.
    DismissAll,
}

/// Why a notification left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Expired,
    Dismissed,
    Evicted,
    Cleared,
}

/// Queue settings, usually read from the `[notifications]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub max_toasts: usize,
    pub position: Position,
    pub durations: Durations,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            position: Position::default(),
            durations: Durations::default(),
        }
    }
}

struct Entry<T> {
    notification: Notification,
    timer: Option<T>,
}

/// Manages the bounded, insertion-ordered notification queue.
pub struct Manager<S: Scheduler = Unscheduled> {
    entries: VecDeque<Entry<S::Timer>>,
    max_toasts: usize,
    position: Position,
    durations: Durations,
    scheduler: S,
}

impl Default for Manager<Unscheduled> {
    fn default() -> Self {
        Self::new(Unscheduled)
    }
}

impl<S: Scheduler> std::fmt::Debug for Manager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("len", &self.entries.len())
            .field("max_toasts", &self.max_toasts)
            .field("position", &self.position)
            .finish()
    }
}

impl<S: Scheduler> Manager<S> {
    /// Creates an empty manager with default settings.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self::with_settings(Settings::default(), scheduler)
    }

    /// Creates an empty manager; `max_toasts` is clamped to the supported range.
    #[must_use]
    pub fn with_settings(settings: Settings, scheduler: S) -> Self {
        Self {
            entries: VecDeque::new(),
            max_toasts: settings.max_toasts.clamp(MIN_TOASTS_LIMIT, MAX_TOASTS_LIMIT),
            position: settings.position,
            durations: settings.durations,
            scheduler,
        }
    }

    /// Pushes a new notification and returns its id.
    ///
    /// When the queue is full the oldest entry is evicted first. A non-zero
    /// lifetime arms an auto-dismiss timer.
    pub fn enqueue(&mut self, message: impl Into<String>, options: Options) -> ToastId {
        let notification = Notification::build(message.into(), options, &self.durations);
        let id = notification.id();

        while self.entries.len() >= self.max_toasts {
            let Some(oldest) = self.entries.front().map(|e| e.notification.id()) else {
                break;
            };
            self.remove(oldest, Removal::Evicted);
        }

        let timer = notification
            .auto_dismisses()
            .then(|| self.scheduler.schedule(id, notification.duration()));

        tracing::debug!(
            %id,
            kind = ?notification.kind(),
            duration = ?notification.duration(),
            "toast enqueued"
        );
        self.entries.push_back(Entry {
            notification,
            timer,
        });
        id
    }

    /// Same as [`Self::enqueue`].
    pub fn notify(&mut self, message: impl Into<String>, options: Options) -> ToastId {
        self.enqueue(message, options)
    }

    pub fn success(&mut self, message: impl Into<String>, options: Options) -> ToastId {
        self.enqueue(message, options.kind(Kind::Success))
    }

    pub fn error(&mut self, message: impl Into<String>, options: Options) -> ToastId {
        self.enqueue(message, options.kind(Kind::Error))
    }

    pub fn warning(&mut self, message: impl Into<String>, options: Options) -> ToastId {
        self.enqueue(message, options.kind(Kind::Warning))
    }

    pub fn info(&mut self, message: impl Into<String>, options: Options) -> ToastId {
        self.enqueue(message, options.kind(Kind::Info))
    }

    /// Dismisses a notification by its ID.
    ///
    /// Runs the notification's dismiss callback. Returns `false` (and does
    /// nothing else) when the id is not active.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.remove(id, Removal::Dismissed)
    }

    /// Removes a notification whose timer elapsed.
    ///
    /// Late expiries for already-removed ids are ignored.
    pub fn expire(&mut self, id: ToastId) -> bool {
        self.remove(id, Removal::Expired)
    }

    /// Removes every notification, running each dismiss callback once.
    pub fn dismiss_all(&mut self) {
        let drained: Vec<_> = self.entries.drain(..).collect();
        for entry in drained {
            Self::finish(entry, Removal::Cleared);
        }
    }

    /// Runs the inline action of a notification, if it has one.
    pub fn invoke_action(&mut self, id: ToastId) -> bool {
        let Some(action) = self.get(id).and_then(Notification::action) else {
            return false;
        };
        tracing::debug!(%id, label = %action.label, "toast action invoked");
        action.callback.call(id);
        true
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Expired(id) => {
                self.expire(*id);
            }
            Message::Action(id) => {
                self.invoke_action(*id);
            }
            Message::DismissAll => self.dismiss_all(),
        }
    }

    /// Moves every current and future toast to `position`.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts
    }

    /// Returns active notifications, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Notification> {
        self.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn remove(&mut self, id: ToastId, reason: Removal) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.notification.id() == id) else {
            tracing::trace!(%id, ?reason, "toast already gone");
            return false;
        };
        if let Some(entry) = self.entries.remove(pos) {
            Self::finish(entry, reason);
        }
        true
    }

    fn finish(entry: Entry<S::Timer>, reason: Removal) {
        let Entry {
            notification,
            timer,
        } = entry;

        if let Some(timer) = timer {
            timer.cancel();
        }
        tracing::debug!(id = %notification.id(), ?reason, "toast removed");

        // Overflow is silent; every other removal reports back to the producer.
        if reason != Removal::Evicted {
            notification.notify_dismissed();
        }
    }
}
