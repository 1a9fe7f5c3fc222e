use crate::entity::action::{ActionButton, ActionType};
use once_cell::sync::Lazy;

pub const DEFAULT_MODEL_ID: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub const DESIGN_IDEAS_ENDPOINT: &str = "/api/generate-design-ideas";
pub const DESIGN_PROMPTS_ENDPOINT: &str = "/api/generate-design-prompts";

pub const DESIGN_MENU_LABEL: &str = "Design";
pub const DESIGN_MENU_TOOLTIP: &str = "Design Tools";
pub const DESIGN_MENU_DESCRIPTION: &str =
    "Generate design ideas and AI prompts based on client requirements";

pub static ACTION_BUTTONS: Lazy<Vec<ActionButton>> = Lazy::new(|| {
    vec![
        ActionButton {
            id: ActionType::ProcessMessage,
            label: "Process Client Message",
            short_label: "Chat",
            icon: "bot-message-square",
            description: "Full analysis, plan, Bengali translation, and English reply suggestions based on conversation.",
            endpoint: None,
        },
        ActionButton {
            id: ActionType::AnalyzeRequirements,
            label: "Analyze Requirements",
            short_label: "Requirements",
            icon: "list-checks",
            description: "Detailed analysis of requirements, prioritization, Bangla translation, and design message.",
            endpoint: None,
        },
        ActionButton {
            id: ActionType::GenerateEngagementPack,
            label: "Generate Engagement Pack",
            short_label: "Brief",
            icon: "clipboard-list",
            description: "Generates a personalized intro, job reply, budget/timeline/software ideas, and clarifying questions.",
            endpoint: None,
        },
        ActionButton {
            id: ActionType::GenerateDelivery,
            label: "Generate Delivery Message",
            short_label: "Delivery",
            icon: "plane",
            description: "Platform-ready delivery messages and follow-ups.",
            endpoint: None,
        },
        ActionButton {
            id: ActionType::GenerateRevision,
            label: "Generate Revision Message",
            short_label: "Revision",
            icon: "rotate-ccw",
            description: "Platform-ready revision messages and follow-ups.",
            endpoint: None,
        },
    ]
});

pub static DESIGN_ACTION_BUTTONS: Lazy<Vec<ActionButton>> = Lazy::new(|| {
    vec![
        ActionButton {
            id: ActionType::DesignIdea,
            label: "Generate Design Ideas",
            short_label: "Idea",
            icon: "lightbulb",
            description: "Browse the web for similar designs and generate 5 creative design ideas plus 2 typography design ideas based on the text or saying.",
            endpoint: Some(DESIGN_IDEAS_ENDPOINT),
        },
        ActionButton {
            id: ActionType::DesignPrompt,
            label: "Generate Design Prompts",
            short_label: "Prompt",
            icon: "sparkle",
            description: "Convert design ideas into detailed AI image generation prompts with solid color backgrounds and suitable formatting.",
            endpoint: Some(DESIGN_PROMPTS_ENDPOINT),
        },
    ]
});
