use serde::{Deserialize, Serialize};

/// Named actions the chat UI's action panel can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    ProcessMessage,
    AnalyzeRequirements,
    GenerateEngagementPack,
    GenerateDelivery,
    GenerateRevision,
    DesignIdea,
    DesignPrompt,
}

impl ActionType {
    pub fn is_design(&self) -> bool {
        matches!(self, ActionType::DesignIdea | ActionType::DesignPrompt)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub id: ActionType,
    pub label: &'static str,
    pub short_label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<&'static str>,
}

/// UI state the panel's availability depends on. The draft message and
/// attachments never disable an action.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    pub is_loading: bool,
    pub has_profile: bool,
}

impl PanelState {
    pub fn is_action_disabled(&self, _action: ActionType) -> bool {
        self.is_loading || !self.has_profile
    }
}
