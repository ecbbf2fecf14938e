// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the showcase chrome and component previews.

pub mod adaptive;
pub mod button;
pub mod container;

pub use button::{primary as button_primary, selected as button_selected};
