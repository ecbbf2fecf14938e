// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm actions or report problems
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Kind` and the `Options` builder
//! - [`manager`] - `Manager`, the bounded queue and its lifecycle rules
//! - [`timer`] - cancellable auto-dismiss timers
//! - [`position`] - the six screen anchors
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use motion_kit::ui::notifications::{Manager, Options};
//!
//! let mut manager = Manager::default();
//! let id = manager.success("Saved", Options::default());
//! assert_eq!(manager.len(), 1);
//!
//! manager.dismiss(id);
//! assert!(manager.is_empty());
//! ```
//!
//! # Behavior
//!
//! - Lifetime: 5s by default, errors stay until dismissed
//! - At most 5 toasts; the oldest is evicted to make room
//! - One position shared by all toasts (top-right by default)

mod manager;
mod notification;
mod position;
mod timer;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Removal, Settings};
pub use notification::{Action, Callback, Durations, Kind, Notification, Options, ToastId};
pub use position::{Position, UnknownPosition};
pub use timer::{Scheduler, TaskScheduler, TaskTimer, Timer, TokioScheduler, Unscheduled};
pub use toast::Toast;
