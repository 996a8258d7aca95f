use serde::{Deserialize, Serialize};

use crate::enums::visual_type::VisualType;
use crate::structs::analysis_request::AnalysisRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRequest {
    pub visual_type: VisualType,
    pub form_data: AnalysisRequest,
}
