// SPDX-License-Identifier: MPL-2.0
//! `motion_kit` is a UI kit showcase built with the Iced GUI framework.
//!
//! It hosts two reusable stores behind a component catalog:
//!
//! - [`ui::notifications`]: a bounded toast queue with cancellable
//!   auto-dismiss timers and six screen anchors.
//! - [`domain::adaptive`]: a rule evaluator turning a user context snapshot
//!   into typed per-component style overrides.

#![doc(html_root_url = "https://docs.rs/motion_kit/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
