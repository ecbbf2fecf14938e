// SPDX-License-Identifier: MPL-2.0
//! Adaptive component props.
//!
//! Components ask an [`Experience`] for [`AdaptiveProps`] and get back a
//! small set of typed overrides (motion, layout density, hints) derived from
//! the current [`UserContext`].
//!
//! ```
//! use motion_kit::domain::adaptive::{ComponentKind, ContextUpdate, Device, Experience, Motion};
//!
//! let mut experience = Experience::default();
//! experience.update_context(ContextUpdate::device(Device::Mobile));
//!
//! let props = experience.adaptive_props(ComponentKind::Button);
//! assert_eq!(props.motion, Some(Motion::Reduced));
//! ```

pub mod context;
pub mod provider;
pub mod rules;

pub use context::{
    AccessibilityNeeds, AnimationStyle, ComponentKind, ContextUpdate, Device, ExperienceTier,
    UsageCounters, UserContext,
};
pub use provider::Experience;
pub use rules::{compute_adaptive_props, AdaptiveProps, Condition, Layout, Motion, Rule, RuleSet};
