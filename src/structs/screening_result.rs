use serde::{Deserialize, Serialize};

use crate::structs::reason_summary::ReasonSummary;
use crate::structs::suitability::VisualTypeSuitability;

/// First-pass result: normalized suitability map plus exactly five reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub visual_type_suitability: VisualTypeSuitability,
    pub reason_summary: Vec<ReasonSummary>,
}
