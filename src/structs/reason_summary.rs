use serde::{Deserialize, Serialize};

use crate::enums::visual_type::VisualType;

/// One short screening rationale per visual type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonSummary {
    #[serde(rename = "type")]
    pub visual_type: VisualType,
    pub reason: String,
}
