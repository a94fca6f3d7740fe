use super::OutputDocument;
use crate::inventory::domain::{InventorySummary, ProjectScope, RawInventory};
use crate::shared::Result;
use std::path::PathBuf;

/// InventoryResponse - Response DTO from the inventory use case
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    pub scope: ProjectScope,
    /// Collector output, one key per category
    pub raw: RawInventory,
    pub summary: InventorySummary,
    /// Where the summary artifact was persisted
    pub summary_path: PathBuf,
}

impl InventoryResponse {
    pub fn new(
        scope: ProjectScope,
        raw: RawInventory,
        summary: InventorySummary,
        summary_path: PathBuf,
    ) -> Self {
        Self {
            scope,
            raw,
            summary,
            summary_path,
        }
    }

    /// Pretty JSON of the selected document, newline terminated
    pub fn render(&self, document: OutputDocument) -> Result<String> {
        let mut rendered = match document {
            OutputDocument::Summary => self.summary.to_pretty_json()?,
            OutputDocument::Raw => serde_json::to_string_pretty(&self.raw)?,
        };
        rendered.push('\n');
        Ok(rendered)
    }
}
