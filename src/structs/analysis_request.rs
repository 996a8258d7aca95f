use serde::{Deserialize, Serialize};

/// Form input for an analysis call. Only `subject` and `content` are
/// mandatory; the rest default to a dash in the assembled prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub grade: Option<String>,

    #[serde(default)]
    pub area: Option<String>,

    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub keywords: Option<String>,

    #[serde(default)]
    pub text_type: Option<String>,

    #[serde(default)]
    pub content: String,
}
