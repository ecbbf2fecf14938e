// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`catalog`] - Live component previews and the context panel
//! - [`tokens`] - Design token browser
//! - [`about`] - Application version, rules and credits
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Section switcher and theme toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, adaptive sizing)
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod catalog;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod tokens;
