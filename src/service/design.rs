use crate::dto::response::{DesignIdeasResponse, DesignPromptsResponse};
use crate::service::completion::CompletionService;
use crate::service::prompt::{PromptTemplate, DESIGN_IDEAS_PROMPT, DESIGN_PROMPTS_PROMPT};
use garde::Validate;
use serde::de::DeserializeOwned;
use tracing::{error, info};

pub async fn generate_design_ideas(
    ai: &dyn CompletionService,
    text: &str,
    model: &str,
) -> DesignIdeasResponse {
    generate_or_fallback(ai, &DESIGN_IDEAS_PROMPT, text, model, fallback_design_ideas).await
}

pub async fn generate_design_prompts(
    ai: &dyn CompletionService,
    text: &str,
    model: &str,
) -> DesignPromptsResponse {
    generate_or_fallback(ai, &DESIGN_PROMPTS_PROMPT, text, model, fallback_design_prompts).await
}

async fn generate_or_fallback<T, F>(
    ai: &dyn CompletionService,
    prompt: &PromptTemplate,
    text: &str,
    model: &str,
    fallback: F,
) -> T
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
    F: FnOnce(&str) -> T,
{
    match generate(ai, prompt, text, model).await {
        Ok(output) => {
            info!("✅ '{}' answered with model '{}'", prompt.name, model);
            output
        }
        Err(e) => {
            error!("AI generation error in '{}': {}", prompt.name, e);
            fallback(text)
        }
    }
}

async fn generate<T>(
    ai: &dyn CompletionService,
    prompt: &PromptTemplate,
    text: &str,
    model: &str,
) -> Result<T, String>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
{
    let output = ai.complete(prompt, text, model).await?;
    let parsed: T = serde_json::from_value(output)
        .map_err(|e| format!("Model output does not match the schema: {}", e))?;
    parsed
        .validate()
        .map_err(|e| format!("Model output failed validation: {}", e))?;
    Ok(parsed)
}

pub fn fallback_design_ideas(text: &str) -> DesignIdeasResponse {
    let creative_design_ideas = [
        format!("Based on \"{text}\", here are 5 creative design ideas:\n\n"),
        format!("1. A bold, minimalist design featuring a central illustration of {text} in a flat design style. Use a vibrant color palette with teal, orange, and navy blue against a clean white background. Include simple geometric shapes to frame the main elements.\n\n"),
        format!("2. A vintage-inspired design with distressed textures and retro typography. Create a badge/emblem style layout with {text} as the centerpiece. Use a muted color palette of burgundy, cream, and forest green with subtle textures.\n\n"),
        "3. A modern, abstract interpretation using fluid shapes and gradients. The text should flow within or around organic forms, creating a sense of movement. Use a gradient color scheme transitioning from deep purple to electric blue.\n\n".to_string(),
        format!("4. A hand-drawn illustration style with whimsical elements related to {text}. Include playful doodles and casual handlettering. Use a bright, cheerful color palette of coral, sunshine yellow, and turquoise.\n\n"),
        format!("5. A geometric, tech-inspired design with clean lines and a futuristic feel. Arrange {text} within a structured grid layout. Use a monochromatic color scheme with one accent color for emphasis."),
    ]
    .concat();

    let typography_ideas = [
        format!("Typography Design Ideas for \"{text}\":\n\n"),
        "1. A dynamic, layered typography design where each word has different weights and sizes. Use a combination of serif and sans-serif fonts with varying opacities. Position words at different angles to create visual interest, with key terms emphasized through size and bold weight.\n\n".to_string(),
        "2. A single-font approach using a versatile family like Montserrat or Roboto, exploring the full range of weights from thin to black. Arrange the words in a circular or spiral pattern, with size increasing or decreasing to create rhythm and flow. Use tracking and kerning variations to add sophisticated spacing dynamics.".to_string(),
    ]
    .concat();

    DesignIdeasResponse {
        creative_design_ideas,
        typography_ideas,
    }
}

pub fn fallback_design_prompts(text: &str) -> DesignPromptsResponse {
    DesignPromptsResponse {
        creative_design_prompts: vec![
            format!("Detailed vector design inspired by \"{text}\", minimalist style, clean lines, bold typography, solid black background, high contrast colors, commercial quality, high resolution"),
            format!("Vintage design featuring \"{text}\", distressed texture, retro typography, halftone shadows, solid white background, printing design, vector art, high resolution"),
            format!("Artistic interpretation of \"{text}\", watercolor style, elegant typography, fluid brush strokes, solid light background, minimal color palette, printing design, high resolution"),
            format!("Abstract geometric design with \"{text}\" integrated into pattern, modern style, clean shapes, solid black background, vibrant accent colors, vector design, high resolution"),
            format!("Hand-drawn illustration style featuring \"{text}\", sketchy lines, organic shapes, playful elements, solid white background, minimal color palette, printing design, high resolution"),
        ],
        typography_prompts: vec![
            format!("Typography design of \"{text}\", multiple font styles and weights, dynamic arrangement, no images or graphics, solid white background, elegant hierarchy, minimalist design, high resolution"),
            format!("Creative lettering of \"{text}\", flowing script and bold sans serif combination, dynamic layout, no images, solid black background, high contrast, typography design, high resolution"),
        ],
    }
}
