use serde::{Deserialize, Serialize};

use crate::structs::suitability::VisualTypeSuitability;
use crate::structs::visual_recommendation::VisualRecommendation;

/// Combined single-call result: suitability map plus all five recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub visual_type_suitability: VisualTypeSuitability,
    pub visual_recommendations: Vec<VisualRecommendation>,
}
