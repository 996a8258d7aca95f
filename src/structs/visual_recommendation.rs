use serde::{Deserialize, Serialize};

use crate::enums::visual_type::VisualType;
use crate::structs::image_generation_prompt::ImageGenerationPrompt;
use crate::structs::image_source::FreeImageSource;

/// One entry of the combined analysis result, ordered by suitability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualRecommendation {
    #[serde(rename = "type")]
    pub visual_type: VisualType,

    pub suitability_percent: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,

    #[serde(default)]
    pub free_image_sources: Vec<FreeImageSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_generation_prompt: Option<ImageGenerationPrompt>,
}
