// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only keyboard shortcuts are routed here; toast expiry is driven by the
//! tasks the notification scheduler hands back from `update`.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Global shortcuts: `Escape` dismisses every toast.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => shortcut(&key),
            _ => None,
        }
    })
}

fn shortcut(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::Notification(NotificationMessage::DismissAll)),
        _ => None,
    }
}
