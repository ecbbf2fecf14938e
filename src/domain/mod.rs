// SPDX-License-Identifier: MPL-2.0
//! Framework-independent domain logic.
//!
//! Nothing in here depends on Iced; the UI layer maps these types onto
//! widgets and styles.

pub mod adaptive;
