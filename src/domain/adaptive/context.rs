// SPDX-License-Identifier: MPL-2.0
//! User context snapshot.
//!
//! A flat record of inferred signals about the person using the showcase.
//! Every field is independently optional; nothing relates one field to
//! another.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Signals
// =============================================================================

/// Device class the showcase is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    Tablet,
    Desktop,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Mobile, Device::Tablet, Device::Desktop];
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
            Device::Desktop => "desktop",
        })
    }
}

/// First visit versus returning visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceTier {
    FirstTime,
    Returning,
}

/// Animation flavor the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    Minimal,
    Smooth,
    Playful,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 3] = [
        AnimationStyle::Minimal,
        AnimationStyle::Smooth,
        AnimationStyle::Playful,
    ];
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnimationStyle::Minimal => "minimal",
            AnimationStyle::Smooth => "smooth",
            AnimationStyle::Playful => "playful",
        })
    }
}

/// Accessibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessibilityNeeds {
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub large_fonts: bool,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub screen_reader: bool,
}

/// Catalog primitives that can request adaptive props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Card,
    Modal,
    Tabs,
    Toast,
    Input,
    Toggle,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Button,
        ComponentKind::Card,
        ComponentKind::Modal,
        ComponentKind::Tabs,
        ComponentKind::Toast,
        ComponentKind::Input,
        ComponentKind::Toggle,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Card => "card",
            ComponentKind::Modal => "modal",
            ComponentKind::Tabs => "tabs",
            ComponentKind::Toast => "toast",
            ComponentKind::Input => "input",
            ComponentKind::Toggle => "toggle",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Usage counters
// =============================================================================

/// Interaction counters keyed by `component:action`.
///
/// Counters only grow; there is no way to reset or decrement one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageCounters {
    counts: BTreeMap<(ComponentKind, String), u32>,
}

impl UsageCounters {
    /// Adds one interaction and returns the new count for that key.
    pub fn record(&mut self, component: ComponentKind, action: &str) -> u32 {
        let count = self
            .counts
            .entry((component, action.to_string()))
            .or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Count for one `component:action` key.
    #[must_use]
    pub fn get(&self, component: ComponentKind, action: &str) -> u32 {
        self.counts
            .get(&(component, action.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Total interactions with a component across all actions.
    #[must_use]
    pub fn total_for(&self, component: ComponentKind) -> u32 {
        self.counts
            .iter()
            .filter(|((kind, _), _)| *kind == component)
            .fold(0u32, |acc, (_, n)| acc.saturating_add(*n))
    }

    /// Iterates over `(component:action, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (String, u32)> + '_ {
        self.counts
            .iter()
            .map(|((kind, action), n)| (format!("{kind}:{action}"), *n))
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Current snapshot of inferred user and device signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub device: Option<Device>,
    pub experience: Option<ExperienceTier>,
    pub accessibility: AccessibilityNeeds,
    pub preferred_animation_style: Option<AnimationStyle>,
    pub usage: UsageCounters,
}

impl UserContext {
    /// Applies a partial update; fields left `None` keep their value.
    pub fn apply(&mut self, update: &ContextUpdate) {
        if let Some(device) = update.device {
            self.device = Some(device);
        }
        if let Some(experience) = update.experience {
            self.experience = Some(experience);
        }
        if let Some(style) = update.preferred_animation_style {
            self.preferred_animation_style = Some(style);
        }
        if let Some(value) = update.reduced_motion {
            self.accessibility.reduced_motion = value;
        }
        if let Some(value) = update.large_fonts {
            self.accessibility.large_fonts = value;
        }
        if let Some(value) = update.high_contrast {
            self.accessibility.high_contrast = value;
        }
        if let Some(value) = update.screen_reader {
            self.accessibility.screen_reader = value;
        }
    }
}

/// Partial context update. Unset fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextUpdate {
    pub device: Option<Device>,
    pub experience: Option<ExperienceTier>,
    pub preferred_animation_style: Option<AnimationStyle>,
    pub reduced_motion: Option<bool>,
    pub large_fonts: Option<bool>,
    pub high_contrast: Option<bool>,
    pub screen_reader: Option<bool>,
}

impl ContextUpdate {
    #[must_use]
    pub fn device(device: Device) -> Self {
        Self {
            device: Some(device),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn animation_style(style: AnimationStyle) -> Self {
        Self {
            preferred_animation_style: Some(style),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn reduced_motion(enabled: bool) -> Self {
        Self {
            reduced_motion: Some(enabled),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn large_fonts(enabled: bool) -> Self {
        Self {
            large_fonts: Some(enabled),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_by_one() {
        let mut usage = UsageCounters::default();
        assert_eq!(usage.record(ComponentKind::Button, "click"), 1);
        assert_eq!(usage.record(ComponentKind::Button, "click"), 2);
        assert_eq!(usage.get(ComponentKind::Button, "click"), 2);
        assert_eq!(usage.get(ComponentKind::Button, "hover"), 0);
    }

    #[test]
    fn total_sums_actions_of_one_component() {
        let mut usage = UsageCounters::default();
        usage.record(ComponentKind::Tabs, "select");
        usage.record(ComponentKind::Tabs, "keyboard");
        usage.record(ComponentKind::Card, "expand");

        assert_eq!(usage.total_for(ComponentKind::Tabs), 2);
        assert_eq!(usage.total_for(ComponentKind::Card), 1);
        assert_eq!(usage.total_for(ComponentKind::Modal), 0);
    }

    #[test]
    fn iter_uses_component_action_keys() {
        let mut usage = UsageCounters::default();
        usage.record(ComponentKind::Toggle, "switch");
        let keys: Vec<_> = usage.iter().collect();
        assert_eq!(keys, vec![("toggle:switch".to_string(), 1)]);
    }

    #[test]
    fn apply_only_touches_set_fields() {
        let mut ctx = UserContext {
            preferred_animation_style: Some(AnimationStyle::Playful),
            ..UserContext::default()
        };
        ctx.apply(&ContextUpdate::device(Device::Mobile));

        assert_eq!(ctx.device, Some(Device::Mobile));
        assert_eq!(ctx.preferred_animation_style, Some(AnimationStyle::Playful));
        assert!(!ctx.accessibility.reduced_motion);
    }

    #[test]
    fn later_updates_win() {
        let mut ctx = UserContext::default();
        ctx.apply(&ContextUpdate::device(Device::Mobile));
        ctx.apply(&ContextUpdate::device(Device::Desktop));
        ctx.apply(&ContextUpdate::reduced_motion(true));
        ctx.apply(&ContextUpdate::reduced_motion(false));

        assert_eq!(ctx.device, Some(Device::Desktop));
        assert!(!ctx.accessibility.reduced_motion);
    }
}
