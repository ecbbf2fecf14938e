// SPDX-License-Identifier: MPL-2.0
//! Experience provider.
//!
//! Owns one [`UserContext`] and the [`RuleSet`] applied to it. The
//! application holds a single instance and passes it to whoever needs
//! adaptive props; tests build their own.

use super::context::{ComponentKind, ContextUpdate, UserContext};
use super::rules::{AdaptiveProps, RuleSet};

#[derive(Debug, Clone, Default)]
pub struct Experience {
    context: UserContext,
    rules: RuleSet,
}

impl Experience {
    #[must_use]
    pub fn new(context: UserContext, rules: RuleSet) -> Self {
        Self { context, rules }
    }

    /// Style overrides for `component` given the current context.
    #[must_use]
    pub fn adaptive_props(&self, component: ComponentKind) -> AdaptiveProps {
        self.rules.evaluate(&self.context, component)
    }

    /// Records one interaction and returns the new `component:action` count.
    pub fn track_usage(&mut self, component: ComponentKind, action: &str) -> u32 {
        let was_novice = self.is_novice(component);
        let count = self.context.usage.record(component, action);
        if was_novice && !self.is_novice(component) {
            tracing::debug!(%component, "component no longer novice");
        }
        tracing::trace!(%component, action, count, "usage tracked");
        count
    }

    /// Whether `component` has seen fewer interactions, over all its
    /// actions, than the novice threshold.
    #[must_use]
    pub fn is_novice(&self, component: ComponentKind) -> bool {
        self.context.usage.total_for(component) < self.rules.novice_threshold()
    }

    /// Merges a partial update into the context.
    pub fn update_context(&mut self, update: ContextUpdate) {
        tracing::debug!(?update, "context updated");
        self.context.apply(&update);
    }

    #[must_use]
    pub fn context(&self) -> &UserContext {
        &self.context
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adaptive::context::Device;
    use crate::domain::adaptive::rules::{Layout, Motion};

    #[test]
    fn update_context_feeds_adaptive_props() {
        let mut experience = Experience::default();
        experience.update_context(ContextUpdate::device(Device::Mobile));

        let props = experience.adaptive_props(ComponentKind::Button);
        assert_eq!(props.motion, Some(Motion::Reduced));
        assert_eq!(props.layout, Some(Layout::Spacious));
    }

    #[test]
    fn three_clicks_turn_hints_off() {
        let mut experience = Experience::default();
        assert!(experience.adaptive_props(ComponentKind::Button).shows_hints());

        for expected in 1..=3 {
            assert_eq!(experience.track_usage(ComponentKind::Button, "click"), expected);
        }

        assert!(!experience.adaptive_props(ComponentKind::Button).shows_hints());
    }

    #[test]
    fn novice_status_counts_every_action() {
        let mut experience = Experience::default();
        experience.track_usage(ComponentKind::Input, "focus");
        experience.track_usage(ComponentKind::Input, "type");
        assert!(experience.is_novice(ComponentKind::Input));

        // Third interaction overall, first of its kind.
        assert_eq!(experience.track_usage(ComponentKind::Input, "submit"), 1);
        assert!(!experience.is_novice(ComponentKind::Input));
        assert!(!experience.adaptive_props(ComponentKind::Input).shows_hints());
        assert!(experience.is_novice(ComponentKind::Toggle));
    }

    #[test]
    fn usage_never_decreases() {
        let mut experience = Experience::default();
        let mut last = 0;
        for _ in 0..10 {
            let count = experience.track_usage(ComponentKind::Tabs, "select");
            assert_eq!(count, last + 1);
            last = count;
            experience.update_context(ContextUpdate::device(Device::Desktop));
        }
        assert_eq!(experience.context().usage.get(ComponentKind::Tabs, "select"), 10);
    }

    #[test]
    fn separate_instances_do_not_share_state() {
        let mut a = Experience::default();
        let b = Experience::default();
        a.update_context(ContextUpdate::device(Device::Mobile));
        a.track_usage(ComponentKind::Card, "open");

        assert_eq!(b.context(), &UserContext::default());
    }
}
