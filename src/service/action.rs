use crate::config::constant::{
    ACTION_BUTTONS, DESIGN_ACTION_BUTTONS, DESIGN_MENU_DESCRIPTION, DESIGN_MENU_LABEL,
    DESIGN_MENU_TOOLTIP,
};
use crate::dto::response::{ActionButtonView, ActionPanelResponse, DesignMenuView};
use crate::entity::action::{ActionButton, ActionType, PanelState};

fn views(buttons: &[ActionButton], state: PanelState) -> Vec<ActionButtonView> {
    buttons
        .iter()
        .map(|button| ActionButtonView {
            button: button.clone(),
            disabled: state.is_action_disabled(button.id),
        })
        .collect()
}

pub fn action_panel(state: PanelState) -> ActionPanelResponse {
    ActionPanelResponse {
        disabled: state.is_loading || !state.has_profile,
        actions: views(&ACTION_BUTTONS, state),
        design: DesignMenuView {
            label: DESIGN_MENU_LABEL,
            tooltip: DESIGN_MENU_TOOLTIP,
            description: DESIGN_MENU_DESCRIPTION,
            disabled: state.is_action_disabled(ActionType::DesignIdea),
            actions: views(&DESIGN_ACTION_BUTTONS, state),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constant::{DESIGN_IDEAS_ENDPOINT, DESIGN_PROMPTS_ENDPOINT};

    #[test]
    fn panel_lists_primary_and_design_actions() {
        let panel = action_panel(PanelState {
            is_loading: false,
            has_profile: true,
        });
        let primary: Vec<_> = panel.actions.iter().map(|a| a.button.short_label).collect();
        assert_eq!(
            primary,
            vec!["Chat", "Requirements", "Brief", "Delivery", "Revision"]
        );
        assert!(panel.actions.iter().all(|a| !a.button.id.is_design()));
        assert!(panel.design.actions.iter().all(|a| a.button.id.is_design()));
        assert!(!panel.disabled);
        assert!(!panel.design.disabled);
    }

    #[test]
    fn design_actions_point_at_their_endpoints() {
        let panel = action_panel(PanelState::default());
        let endpoints: Vec<_> = panel
            .design
            .actions
            .iter()
            .map(|a| a.button.endpoint)
            .collect();
        assert_eq!(
            endpoints,
            vec![Some(DESIGN_IDEAS_ENDPOINT), Some(DESIGN_PROMPTS_ENDPOINT)]
        );
    }

    #[test]
    fn everything_disabled_without_profile() {
        let panel = action_panel(PanelState {
            is_loading: false,
            has_profile: false,
        });
        assert!(panel.disabled);
        assert!(panel.design.disabled);
        assert!(panel
            .actions
            .iter()
            .chain(panel.design.actions.iter())
            .all(|a| a.disabled));
    }

    #[test]
    fn serializes_flat_buttons() {
        let panel = action_panel(PanelState {
            is_loading: true,
            has_profile: true,
        });
        let value = serde_json::to_value(&panel).unwrap();
        let first = &value["actions"][0];
        assert_eq!(first["id"], "processMessage");
        assert_eq!(first["shortLabel"], "Chat");
        assert_eq!(first["disabled"], true);
        assert!(first.get("endpoint").is_none());
        assert_eq!(
            value["design"]["actions"][1]["endpoint"],
            "/api/generate-design-prompts"
        );
    }
}
