// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetimes and queue bounds
//! - **Adaptive**: Novice detection threshold

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for success, warning and info toasts (ms).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Default auto-dismiss delay for error toasts (ms). Zero keeps them until dismissed.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 0;

/// Default maximum number of toasts on screen at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Smallest accepted `max_toasts`.
pub const MIN_TOASTS_LIMIT: usize = 1;

/// Largest accepted `max_toasts`.
pub const MAX_TOASTS_LIMIT: usize = 10;

// ==========================================================================
// Adaptive Defaults
// ==========================================================================

/// Interactions with a component before it stops showing beginner hints.
pub const DEFAULT_NOVICE_THRESHOLD: u32 = 3;

const _: () = {
    assert!(MIN_TOASTS_LIMIT >= 1);
    assert!(DEFAULT_MAX_TOASTS >= MIN_TOASTS_LIMIT && DEFAULT_MAX_TOASTS <= MAX_TOASTS_LIMIT);
};
