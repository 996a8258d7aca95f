use serde::Serialize;

use crate::config::constants::HISTORY_PREVIEW_CHARS;
use crate::logger::response_logger::preview;
use crate::structs::template_entry::TemplateHistoryEntry;

/// History entry shaped for the admin backup listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSummary {
    pub filename: String,
    pub created_at: String,
    pub modified_at: String,
    pub size: usize,
    pub preview: String,
    pub char_count: usize,
    pub version: u32,
    pub modified_by: String,
}

impl BackupSummary {
    pub fn from_entry(entry: &TemplateHistoryEntry) -> Self {
        let char_count = entry.content.chars().count();
        Self {
            filename: format!("version-{}.txt", entry.version),
            created_at: entry.timestamp.clone(),
            modified_at: entry.timestamp.clone(),
            size: char_count,
            preview: preview(&entry.content, HISTORY_PREVIEW_CHARS),
            char_count,
            version: entry.version,
            modified_by: entry.modified_by.clone(),
        }
    }
}
