use serde::{Deserialize, Serialize};

/// Guidance block for generating the visual with an image model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationPrompt {
    pub purpose: String,
    pub conditions: String,
    pub composition: String,
    pub precautions: String,
}
