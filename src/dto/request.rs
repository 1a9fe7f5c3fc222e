use garde::Validate;
use serde::Deserialize;

/// Body accepted by both design generation routes.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DesignGenerationRequest {
    #[garde(required, length(min = 1))]
    pub text: Option<String>,
    #[garde(skip)]
    pub user_profile: Option<serde_json::Value>,
    #[garde(skip)]
    pub model_id: Option<String>,
}

pub type DesignIdeasRequest = DesignGenerationRequest;
pub type DesignPromptsRequest = DesignGenerationRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPanelQuery {
    #[serde(default)]
    pub loading: bool,
    #[serde(default = "default_has_profile")]
    pub has_profile: bool,
}

fn default_has_profile() -> bool {
    true
}

impl Default for ActionPanelQuery {
    fn default() -> Self {
        Self {
            loading: false,
            has_profile: default_has_profile(),
        }
    }
}
