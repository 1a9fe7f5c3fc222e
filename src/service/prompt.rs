use once_cell::sync::Lazy;
use serde_json::{json, Value};

const TEXT_PLACEHOLDER: &str = "{{text}}";

/// A named prompt sent to the completion service together with the JSON
/// schema its output must follow.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub template: &'static str,
    pub output_schema: Value,
}

impl PromptTemplate {
    pub fn render(&self, text: &str) -> String {
        self.template.replace(TEXT_PLACEHOLDER, text)
    }
}

pub static DESIGN_IDEAS_PROMPT: Lazy<PromptTemplate> = Lazy::new(|| PromptTemplate {
    name: "generateDesignIdeasPrompt",
    template: r#"You are a professional graphic designer tasked with generating creative design ideas based on the provided text or saying.

Given this text: "{{text}}"

Generate the following:

1. 5 detailed creative design ideas inspired by this text. For each idea, provide:
   - A clear visual concept description
   - Style suggestions (vintage, modern, minimalist, etc.)
   - Color palette ideas
   - Visual elements to include

2. 2 creative typography-only design ideas (no graphics) inspired by this text. For each idea, provide:
   - Font style suggestions
   - Typography layout concepts
   - Treatment ideas (effects, arrangements, etc.)

Format your response with clear sections for each idea. Be detailed, creative, and diverse in your suggestions.
"#,
    output_schema: json!({
        "type": "object",
        "properties": {
            "creativeDesignIdeas": {
                "type": "string",
                "description": "5 creative design ideas based on the text"
            },
            "typographyIdeas": {
                "type": "string",
                "description": "2 creative typography design ideas based on the text"
            }
        },
        "required": ["creativeDesignIdeas", "typographyIdeas"],
        "additionalProperties": false
    }),
});

pub static DESIGN_PROMPTS_PROMPT: Lazy<PromptTemplate> = Lazy::new(|| PromptTemplate {
    name: "generateDesignPromptsPrompt",
    template: r#"You are a professional graphic designer tasked with creating detailed AI image generation prompts based on the provided text or saying.

Given this text: "{{text}}"

Create the following:

1. 5 highly detailed prompts for AI image generation based on creative design ideas. For each prompt:
   - Be highly detailed but skip unnecessary words
   - Avoid using terms like "T-shirt," "Mug," "POD," etc.
   - Use suitable alternatives like "typography design," "vector design," "vintage design," "minimalist design", "printing design"
   - Specify a solid color background (mostly black or white, with colors suited for the background)
   - For designs intended for mugs, always specify a white background

2. 2 highly detailed prompts for AI image generation based on typography-only design ideas (no graphics). Follow the same guidelines as above.

Format your output as an array of 5 creative design prompts and an array of 2 typography prompts.
Each prompt should be concise, detailed, and optimized for AI image generation.
"#,
    output_schema: json!({
        "type": "object",
        "properties": {
            "creativeDesignPrompts": {
                "type": "array",
                "items": { "type": "string" },
                "description": "5 creative design prompts for AI image generation"
            },
            "typographyPrompts": {
                "type": "array",
                "items": { "type": "string" },
                "description": "2 creative typography prompts for AI image generation"
            }
        },
        "required": ["creativeDesignPrompts", "typographyPrompts"],
        "additionalProperties": false
    }),
});
