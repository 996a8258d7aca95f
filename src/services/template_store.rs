use std::sync::Arc;

use chrono::Utc;

use crate::config::constants::{CURRENT_HEADER, HISTORY_HEADER};
use crate::enums::template_kind::TemplateKind;
use crate::errors::{VisaidError, VisaidResult};
use crate::structs::template_entry::TemplateHistoryEntry;
use crate::traits::tabular_backend::TabularBackend;

/// Where the current template text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    Store,
    Seed,
}

#[derive(Debug, Clone)]
pub struct CurrentTemplate {
    pub text: String,
    pub source: TemplateSource,
}

/// Versioned template storage over two tabs per category: a single current
/// row and an append-only history. Reads never fail outward; the seed
/// template is the fallback. Writes propagate errors.
pub struct TemplateStore {
    backend: Arc<dyn TabularBackend>,
}

fn current_range(kind: TemplateKind) -> String {
    format!("{}!A2:B2", kind.current_tab())
}

fn current_header_range(kind: TemplateKind) -> String {
    format!("{}!A1:B1", kind.current_tab())
}

/// Full history range, header row included; its row count is the next
/// version number.
fn history_range(kind: TemplateKind) -> String {
    format!("{}!A:D", kind.history_tab())
}

fn history_data_range(kind: TemplateKind) -> String {
    format!("{}!A2:D", kind.history_tab())
}

fn history_header_range(kind: TemplateKind) -> String {
    format!("{}!A1:D1", kind.history_tab())
}

impl TemplateStore {
    pub fn new(backend: Arc<dyn TabularBackend>) -> Self {
        Self { backend }
    }

    async fn load_current(&self, kind: TemplateKind) -> VisaidResult<Option<String>> {
        let rows = self.backend.read_range(&current_range(kind)).await?;
        Ok(rows
            .first()
            .and_then(|row| row.get(1))
            .filter(|content| !content.is_empty())
            .cloned())
    }

    /// Current template for a category. Storage errors and empty cells both
    /// degrade to the compiled-in seed; the `source` tag records which branch
    /// fired.
    pub async fn get_current(&self, kind: TemplateKind) -> CurrentTemplate {
        match self.load_current(kind).await {
            Ok(Some(text)) => CurrentTemplate {
                text,
                source: TemplateSource::Store,
            },
            Ok(None) => {
                log::info!("📋 No stored {} template; using the seed", kind);
                CurrentTemplate {
                    text: kind.seed().to_string(),
                    source: TemplateSource::Seed,
                }
            }
            Err(e) => {
                log::error!("❌ Failed to read {} template: {}", kind, e);
                log::info!("📋 Falling back to the seed {} template", kind);
                CurrentTemplate {
                    text: kind.seed().to_string(),
                    source: TemplateSource::Seed,
                }
            }
        }
    }

    /// Overwrites the current row, then appends a history entry. The history
    /// append is best-effort: its failure is logged and the save stands.
    pub async fn set_current(&self, kind: TemplateKind, text: &str, editor: &str) -> VisaidResult<()> {
        let timestamp = Utc::now().to_rfc3339();

        self.backend
            .write_range(
                &current_range(kind),
                vec![vec![timestamp.clone(), text.to_string()]],
            )
            .await?;

        if let Err(e) = self.append_history(kind, text, editor, &timestamp).await {
            log::warn!("⚠️ Failed to append {} template history: {}", kind, e);
        }

        Ok(())
    }

    async fn append_history(
        &self,
        kind: TemplateKind,
        text: &str,
        editor: &str,
        timestamp: &str,
    ) -> VisaidResult<()> {
        // Version number = current row count of the history tab, header
        // included. Concurrent editors can race this and duplicate a version
        // number; there is no lock.
        let rows = self.backend.read_range(&history_range(kind)).await?;
        let version = rows.len() as u32;

        self.backend
            .append_rows(
                &history_range(kind),
                vec![vec![
                    timestamp.to_string(),
                    version.to_string(),
                    text.to_string(),
                    editor.to_string(),
                ]],
            )
            .await
    }

    /// All history entries, newest first.
    pub async fn list_history(&self, kind: TemplateKind) -> VisaidResult<Vec<TemplateHistoryEntry>> {
        let rows = self.backend.read_range(&history_data_range(kind)).await?;
        let mut entries: Vec<TemplateHistoryEntry> = rows
            .iter()
            .map(|row| TemplateHistoryEntry::from_row(row))
            .collect();
        entries.reverse();
        Ok(entries)
    }

    /// Re-activates the template saved under `version`. The current template
    /// is untouched when the version does not exist.
    pub async fn restore(&self, kind: TemplateKind, version: u32, editor: &str) -> VisaidResult<String> {
        let history = self.list_history(kind).await?;
        let entry = history
            .into_iter()
            .find(|entry| entry.version == version)
            .ok_or_else(|| {
                VisaidError::not_found(
                    "template version",
                    &format!("Version {} of the {} template was not found.", version, kind),
                )
            })?;

        self.set_current(
            kind,
            &entry.content,
            &format!("{} (restored from v{})", editor, version),
        )
        .await?;

        Ok(entry.content)
    }

    /// Overwrites the current template with the compiled-in seed.
    pub async fn reset(&self, kind: TemplateKind) -> VisaidResult<&'static str> {
        let seed = kind.seed();
        self.set_current(kind, seed, "system (reset)").await?;
        Ok(seed)
    }

    /// Creates any missing tabs and writes their header rows.
    pub async fn initialize(&self) -> VisaidResult<()> {
        let titles = self.backend.sheet_titles().await?;

        for kind in TemplateKind::ALL {
            let current_tab = kind.current_tab();
            if !titles.contains(&current_tab) {
                log::info!("🛠️ Creating tab {}", current_tab);
                self.backend.add_sheet(&current_tab).await?;
                self.backend
                    .write_range(
                        &current_header_range(kind),
                        vec![CURRENT_HEADER.iter().map(|h| h.to_string()).collect()],
                    )
                    .await?;
            }

            let history_tab = kind.history_tab();
            if !titles.contains(&history_tab) {
                log::info!("🛠️ Creating tab {}", history_tab);
                self.backend.add_sheet(&history_tab).await?;
                self.backend
                    .write_range(
                        &history_header_range(kind),
                        vec![HISTORY_HEADER.iter().map(|h| h.to_string()).collect()],
                    )
                    .await?;
            }
        }

        Ok(())
    }
}
