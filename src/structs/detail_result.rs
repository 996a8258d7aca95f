use serde::{Deserialize, Serialize};

use crate::enums::visual_type::VisualType;
use crate::structs::image_generation_prompt::ImageGenerationPrompt;
use crate::structs::image_source::FreeImageSource;

/// Per-category second-pass result. Carries no suitability percentage; the
/// client keeps using the screening figure for that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResult {
    #[serde(rename = "type")]
    pub visual_type: VisualType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,

    pub free_image_sources: Vec<FreeImageSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompt: Option<String>,

    pub image_generation_prompt: ImageGenerationPrompt,
}
