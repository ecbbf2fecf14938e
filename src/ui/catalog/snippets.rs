// SPDX-License-Identifier: MPL-2.0
//! Usage snippets shown under each preview.

use crate::domain::adaptive::ComponentKind;

#[must_use]
pub fn snippet(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Button => {
            "let props = experience.adaptive_props(ComponentKind::Button);\n\
             button(\"Save\")\n    \
                 .padding(adaptive::padding(&props))\n    \
                 .on_press(Message::Save)"
        }
        ComponentKind::Card => {
            "let props = experience.adaptive_props(ComponentKind::Card);\n\
             container(content)\n    \
                 .padding(adaptive::padding(&props))\n    \
                 .style(styles::container::card)"
        }
        ComponentKind::Modal => {
            "let props = experience.adaptive_props(ComponentKind::Modal);\n\
             let fade = adaptive::transition(&props, motion::SLOW);\n\
             if props.is_simplified() { /* single confirm action */ }"
        }
        ComponentKind::Tabs => {
            "let props = experience.adaptive_props(ComponentKind::Tabs);\n\
             experience.track_usage(ComponentKind::Tabs, \"select\");"
        }
        ComponentKind::Toast => {
            "toasts.success(\"Saved\", Options::default());\n\
             toasts.error(\"Upload failed\", Options::default().title(\"Error\"));\n\
             toasts.info(\"Item archived\", Options::default()\n    \
                 .action(Action::new(\"Undo\", |id| undo(id))));"
        }
        ComponentKind::Input => {
            "text_input(\"Email\", &value)\n    \
                 .on_input(Message::Changed)\n    \
                 .padding(adaptive::padding(&props))"
        }
        ComponentKind::Toggle => {
            "toggler(enabled)\n    \
                 .on_toggle(Message::Toggled)\n    \
                 .size(adaptive::control_height(touch) / 2.0)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_component_has_a_snippet() {
        for kind in ComponentKind::ALL {
            assert!(!snippet(kind).trim().is_empty(), "{kind} has no snippet");
        }
    }

    #[test]
    fn adaptive_snippets_mention_their_component() {
        for kind in [ComponentKind::Button, ComponentKind::Card, ComponentKind::Tabs] {
            assert!(snippet(kind).contains(&format!("{kind:?}")));
        }
    }
}
