// SPDX-License-Identifier: MPL-2.0
//! Translation of adaptive props into concrete sizes and durations.
//!
//! Previews never branch on the user context directly; they ask for their
//! [`AdaptiveProps`] and feed them through these helpers.

use crate::domain::adaptive::{AdaptiveProps, Layout, Motion};
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use std::time::Duration;

/// Inner padding for a preview at the given density.
#[must_use]
pub fn padding(props: &AdaptiveProps) -> f32 {
    match props.layout() {
        Layout::Compact => spacing::XS,
        Layout::Standard => spacing::SM,
        Layout::Spacious => spacing::LG,
    }
}

/// Gap between sibling elements inside a preview.
#[must_use]
pub fn gap(props: &AdaptiveProps) -> f32 {
    match props.layout() {
        Layout::Compact => spacing::XXS,
        Layout::Standard => spacing::XS,
        Layout::Spacious => spacing::MD,
    }
}

/// Transition duration for a component whose resting duration is `base_ms`.
///
/// Reduced motion always yields zero.
#[must_use]
pub fn transition(props: &AdaptiveProps, base_ms: u64) -> Duration {
    let millis = match props.motion() {
        Motion::Reduced => motion::INSTANT,
        Motion::Standard => base_ms,
        Motion::Enhanced => (base_ms as f32 * motion::ENHANCED_FACTOR).round() as u64,
    };
    Duration::from_millis(millis)
}

/// Body text size, bumped one step when the context asks for large fonts.
#[must_use]
pub fn body_size(large_fonts: bool) -> f32 {
    if large_fonts {
        typography::BODY_LG
    } else {
        typography::BODY
    }
}

/// Minimum control height; touch devices get the larger target.
#[must_use]
pub fn control_height(touch: bool) -> f32 {
    if touch {
        sizing::TOUCH_TARGET
    } else {
        sizing::BUTTON_HEIGHT
    }
}
