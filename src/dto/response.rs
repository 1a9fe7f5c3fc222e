use crate::entity::action::ActionButton;
use garde::Validate;
use serde::{Deserialize, Serialize};

pub const CREATIVE_PROMPT_COUNT: usize = 5;
pub const TYPOGRAPHY_PROMPT_COUNT: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DesignIdeasResponse {
    #[garde(length(min = 1))]
    pub creative_design_ideas: String,
    #[garde(length(min = 1))]
    pub typography_ideas: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DesignPromptsResponse {
    #[garde(length(min = 5, max = 5), inner(length(min = 1)))]
    pub creative_design_prompts: Vec<String>,
    #[garde(length(min = 2, max = 2), inner(length(min = 1)))]
    pub typography_prompts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButtonView {
    #[serde(flatten)]
    pub button: ActionButton,
    pub disabled: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignMenuView {
    pub label: &'static str,
    pub tooltip: &'static str,
    pub description: &'static str,
    pub disabled: bool,
    pub actions: Vec<ActionButtonView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPanelResponse {
    pub disabled: bool,
    pub actions: Vec<ActionButtonView>,
    pub design: DesignMenuView,
}
