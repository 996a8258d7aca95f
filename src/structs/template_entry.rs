use serde::Serialize;

/// One immutable history row: who saved which text, and when.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateHistoryEntry {
    pub timestamp: String,
    pub version: u32,
    pub content: String,
    pub modified_by: String,
}

impl TemplateHistoryEntry {
    /// Maps a raw sheet row. Missing or malformed cells degrade per-field
    /// rather than dropping the entry.
    pub fn from_row(row: &[String]) -> Self {
        Self {
            timestamp: row.first().cloned().unwrap_or_default(),
            version: row.get(1).and_then(|v| v.parse().ok()).unwrap_or(0),
            content: row.get(2).cloned().unwrap_or_default(),
            modified_by: row
                .get(3)
                .filter(|cell| !cell.is_empty())
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
