use async_trait::async_trait;

use crate::errors::VisaidResult;

/// Seam over the two-table spreadsheet backend. Ranges use A1 notation,
/// e.g. `screening_history!A2:D`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TabularBackend: Send + Sync {
    async fn read_range(&self, range: &str) -> VisaidResult<Vec<Vec<String>>>;

    async fn write_range(&self, range: &str, rows: Vec<Vec<String>>) -> VisaidResult<()>;

    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> VisaidResult<()>;

    async fn sheet_titles(&self) -> VisaidResult<Vec<String>>;

    async fn add_sheet(&self, title: &str) -> VisaidResult<()>;
}
