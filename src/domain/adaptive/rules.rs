// SPDX-License-Identifier: MPL-2.0
//! Adaptation rules.
//!
//! A rule pairs a [`Condition`] over the user context with a typed
//! [`AdaptiveProps`] override. Rules run top to bottom and every matching
//! rule writes the fields it sets, so for any single field the last
//! matching rule wins. Fields no rule sets stay `None`.

use super::context::{AnimationStyle, ComponentKind, Device, UserContext};
use crate::config::DEFAULT_NOVICE_THRESHOLD;

// =============================================================================
// Overrides
// =============================================================================

/// Motion intensity for transitions and micro-interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motion {
    Reduced,
    #[default]
    Standard,
    Enhanced,
}

/// Spacing density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    Compact,
    #[default]
    Standard,
    Spacious,
}

/// Style overrides for one component.
///
/// `None` means "no adaptation"; the component keeps its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdaptiveProps {
    pub motion: Option<Motion>,
    pub layout: Option<Layout>,
    pub show_hints: Option<bool>,
    pub simplified: Option<bool>,
}

impl AdaptiveProps {
    /// Writes every field `other` sets over `self`.
    pub fn merge(&mut self, other: &AdaptiveProps) {
        if other.motion.is_some() {
            self.motion = other.motion;
        }
        if other.layout.is_some() {
            self.layout = other.layout;
        }
        if other.show_hints.is_some() {
            self.show_hints = other.show_hints;
        }
        if other.simplified.is_some() {
            self.simplified = other.simplified;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == AdaptiveProps::default()
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion.unwrap_or_default()
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }

    #[must_use]
    pub fn shows_hints(&self) -> bool {
        self.show_hints.unwrap_or(false)
    }

    #[must_use]
    pub fn is_simplified(&self) -> bool {
        self.simplified.unwrap_or(false)
    }
}

// =============================================================================
// Conditions
// =============================================================================

/// Predicate over a context snapshot and the requesting component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    ReducedMotion,
    LargeFonts,
    Device(Device),
    AnimationStyle(AnimationStyle),
    /// Fewer recorded interactions with the component than the novice threshold.
    Novice,
    Any(Vec<Condition>),
    All(Vec<Condition>),
}

impl Condition {
    #[must_use]
    pub fn matches(&self, ctx: &UserContext, component: ComponentKind, novice_threshold: u32) -> bool {
        match self {
            Condition::ReducedMotion => ctx.accessibility.reduced_motion,
            Condition::LargeFonts => ctx.accessibility.large_fonts,
            Condition::Device(device) => ctx.device == Some(*device),
            Condition::AnimationStyle(style) => ctx.preferred_animation_style == Some(*style),
            Condition::Novice => ctx.usage.total_for(component) < novice_threshold,
            Condition::Any(conditions) => conditions
                .iter()
                .any(|c| c.matches(ctx, component, novice_threshold)),
            Condition::All(conditions) => conditions
                .iter()
                .all(|c| c.matches(ctx, component, novice_threshold)),
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub when: Condition,
    pub then: AdaptiveProps,
}

/// Ordered, static rule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    novice_threshold: u32,
}

impl RuleSet {
    /// The built-in rules.
    ///
    /// Playful motion comes before the reduced-motion rule so that reduced
    /// motion takes precedence whenever both match.
    #[must_use]
    pub fn standard(novice_threshold: u32) -> Self {
        let rules = vec![
            Rule {
                name: "playful-motion",
                when: Condition::AnimationStyle(AnimationStyle::Playful),
                then: AdaptiveProps {
                    motion: Some(Motion::Enhanced),
                    ..AdaptiveProps::default()
                },
            },
            Rule {
                name: "reduced-motion",
                when: Condition::Any(vec![
                    Condition::ReducedMotion,
                    Condition::Device(Device::Mobile),
                ]),
                then: AdaptiveProps {
                    motion: Some(Motion::Reduced),
                    ..AdaptiveProps::default()
                },
            },
            Rule {
                name: "novice-guidance",
                when: Condition::Novice,
                then: AdaptiveProps {
                    show_hints: Some(true),
                    simplified: Some(true),
                    ..AdaptiveProps::default()
                },
            },
            Rule {
                name: "spacious-layout",
                when: Condition::Any(vec![
                    Condition::Device(Device::Mobile),
                    Condition::LargeFonts,
                ]),
                then: AdaptiveProps {
                    layout: Some(Layout::Spacious),
                    ..AdaptiveProps::default()
                },
            },
        ];

        Self {
            rules,
            novice_threshold,
        }
    }

    /// Builds a rule set from custom rules.
    #[must_use]
    pub fn new(rules: Vec<Rule>, novice_threshold: u32) -> Self {
        Self {
            rules,
            novice_threshold,
        }
    }

    #[must_use]
    pub fn novice_threshold(&self) -> u32 {
        self.novice_threshold
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates every rule in order against `ctx` for `component`.
    #[must_use]
    pub fn evaluate(&self, ctx: &UserContext, component: ComponentKind) -> AdaptiveProps {
        self.rules
            .iter()
            .filter(|rule| rule.when.matches(ctx, component, self.novice_threshold))
            .fold(AdaptiveProps::default(), |mut props, rule| {
                props.merge(&rule.then);
                props
            })
    }

    /// Names of the rules that match, in evaluation order.
    #[must_use]
    pub fn matching(&self, ctx: &UserContext, component: ComponentKind) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.when.matches(ctx, component, self.novice_threshold))
            .map(|rule| rule.name)
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard(DEFAULT_NOVICE_THRESHOLD)
    }
}

/// Computes style overrides for `component` with the built-in rules.
#[must_use]
pub fn compute_adaptive_props(ctx: &UserContext, component: ComponentKind) -> AdaptiveProps {
    RuleSet::default().evaluate(ctx, component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adaptive::context::ContextUpdate;

    fn seasoned(component: ComponentKind) -> UserContext {
        let mut ctx = UserContext::default();
        for _ in 0..DEFAULT_NOVICE_THRESHOLD {
            ctx.usage.record(component, "click");
        }
        ctx
    }

    #[test]
    fn mobile_reduces_motion_and_spaces_layout() {
        let mut ctx = UserContext::default();
        ctx.apply(&ContextUpdate::device(Device::Mobile));

        let props = compute_adaptive_props(&ctx, ComponentKind::Button);
        assert_eq!(props.motion, Some(Motion::Reduced));
        assert_eq!(props.layout, Some(Layout::Spacious));
    }

    #[test]
    fn playful_enhances_motion_on_desktop() {
        let mut ctx = seasoned(ComponentKind::Card);
        ctx.apply(&ContextUpdate::device(Device::Desktop));
        ctx.apply(&ContextUpdate::animation_style(AnimationStyle::Playful));

        let props = compute_adaptive_props(&ctx, ComponentKind::Card);
        assert_eq!(
            props,
            AdaptiveProps {
                motion: Some(Motion::Enhanced),
                ..AdaptiveProps::default()
            }
        );
    }

    #[test]
    fn reduced_motion_beats_playful() {
        let mut ctx = UserContext::default();
        ctx.apply(&ContextUpdate::animation_style(AnimationStyle::Playful));
        ctx.apply(&ContextUpdate::reduced_motion(true));

        let props = compute_adaptive_props(&ctx, ComponentKind::Modal);
        assert_eq!(props.motion, Some(Motion::Reduced));
    }

    #[test]
    fn large_fonts_only_changes_layout() {
        let mut ctx = seasoned(ComponentKind::Input);
        ctx.apply(&ContextUpdate::large_fonts(true));

        let props = compute_adaptive_props(&ctx, ComponentKind::Input);
        assert_eq!(props.layout, Some(Layout::Spacious));
        assert_eq!(props.motion, None);
    }

    #[test]
    fn novice_gets_hints_until_threshold() {
        let mut ctx = UserContext::default();
        for _ in 0..2 {
            ctx.usage.record(ComponentKind::Button, "click");
            assert!(compute_adaptive_props(&ctx, ComponentKind::Button).shows_hints());
        }

        ctx.usage.record(ComponentKind::Button, "click");
        let props = compute_adaptive_props(&ctx, ComponentKind::Button);
        assert!(!props.shows_hints());
        assert!(!props.is_simplified());
    }

    #[test]
    fn usage_of_other_components_does_not_count() {
        let ctx = seasoned(ComponentKind::Toggle);
        assert!(compute_adaptive_props(&ctx, ComponentKind::Tabs).shows_hints());
        assert!(!compute_adaptive_props(&ctx, ComponentKind::Toggle).shows_hints());
    }

    #[test]
    fn seasoned_default_context_has_no_overrides() {
        let ctx = seasoned(ComponentKind::Button);
        assert!(compute_adaptive_props(&ctx, ComponentKind::Button).is_empty());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut ctx = UserContext::default();
        ctx.apply(&ContextUpdate::device(Device::Tablet));
        ctx.apply(&ContextUpdate::large_fonts(true));

        for kind in ComponentKind::ALL {
            assert_eq!(
                compute_adaptive_props(&ctx, kind),
                compute_adaptive_props(&ctx, kind)
            );
        }
    }

    #[test]
    fn last_matching_rule_wins_per_field() {
        let rules = RuleSet::new(
            vec![
                Rule {
                    name: "first",
                    when: Condition::LargeFonts,
                    then: AdaptiveProps {
                        layout: Some(Layout::Compact),
                        show_hints: Some(true),
                        ..AdaptiveProps::default()
                    },
                },
                Rule {
                    name: "second",
                    when: Condition::All(vec![Condition::LargeFonts, Condition::Novice]),
                    then: AdaptiveProps {
                        layout: Some(Layout::Spacious),
                        ..AdaptiveProps::default()
                    },
                },
            ],
            3,
        );
        let mut ctx = UserContext::default();
        ctx.apply(&ContextUpdate::large_fonts(true));

        let props = rules.evaluate(&ctx, ComponentKind::Card);
        assert_eq!(props.layout, Some(Layout::Spacious));
        assert_eq!(props.show_hints, Some(true));
        assert_eq!(rules.matching(&ctx, ComponentKind::Card), vec!["first", "second"]);
    }

    #[test]
    fn zero_threshold_disables_guidance() {
        let rules = RuleSet::standard(0);
        let props = rules.evaluate(&UserContext::default(), ComponentKind::Button);
        assert_eq!(props.show_hints, None);
    }
}
