// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Translation files embedded at build time from `assets/i18n/`
//! - Runtime language switching
//! - Visible `MISSING:` marker when a key has no translation

pub mod fluent;
